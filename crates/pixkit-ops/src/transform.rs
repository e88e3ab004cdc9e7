//! Geometric transforms.
//!
//! All transforms are channel-count agnostic and return a new buffer.
//!
//! - [`reflect`] - Horizontal mirror, column `x` becomes `width - 1 - x`
//! - [`flip_v`] - Vertical flip
//! - [`transpose`] - Swap rows and columns
//! - [`rotate`] - 90 degrees counter-clockwise (`flip_v(transpose(b))`)
//! - [`rotate_ccw_n`] - Any number of quarter turns
//!
//! # Example
//!
//! ```rust
//! use pixkit_core::{Channels, PixelBuffer};
//! use pixkit_ops::transform::{reflect, rotate};
//!
//! let src = PixelBuffer::from_data(2, 1, Channels::Gray, vec![1, 2]).unwrap();
//! assert_eq!(reflect(&src).data(), &[2, 1]);
//!
//! let turned = rotate(&src);
//! assert_eq!(turned.dimensions(), (1, 2));
//! assert_eq!(turned.data(), &[2, 1]);
//! ```

use pixkit_core::PixelBuffer;
use tracing::trace;

/// Mirrors the image left-right.
pub fn reflect(src: &PixelBuffer) -> PixelBuffer {
    let (width, height) = src.dimensions();
    trace!(width, height, "transform::reflect");

    let mut dst = PixelBuffer::zeroed(src.layout());
    for y in 0..height {
        for x in 0..width {
            dst.set_pixel(width - 1 - x, y, src.pixel(x, y));
        }
    }
    dst
}

/// Flips the image top-bottom.
pub fn flip_v(src: &PixelBuffer) -> PixelBuffer {
    let (width, height) = src.dimensions();
    trace!(width, height, "transform::flip_v");

    let mut dst = PixelBuffer::zeroed(src.layout());
    for y in 0..height {
        for x in 0..width {
            dst.set_pixel(x, height - 1 - y, src.pixel(x, y));
        }
    }
    dst
}

/// Swaps rows and columns; the result is `height x width`.
pub fn transpose(src: &PixelBuffer) -> PixelBuffer {
    let (width, height) = src.dimensions();
    trace!(width, height, "transform::transpose");

    let mut dst = PixelBuffer::zeroed(src.layout().transposed());
    for y in 0..height {
        for x in 0..width {
            dst.set_pixel(y, x, src.pixel(x, y));
        }
    }
    dst
}

/// Rotates 90 degrees counter-clockwise: transpose, then flip vertically.
///
/// Output dimensions are `(height, width)` of the input. Pixel `(x, y)`
/// lands at `(y, width - 1 - x)`.
pub fn rotate(src: &PixelBuffer) -> PixelBuffer {
    flip_v(&transpose(src))
}

/// Rotates by `turns` quarter turns counter-clockwise.
///
/// Negative values turn clockwise; `turns` is taken modulo 4.
pub fn rotate_ccw_n(src: &PixelBuffer, turns: i32) -> PixelBuffer {
    match turns.rem_euclid(4) {
        0 => src.clone(),
        1 => rotate(src),
        2 => flip_v(&reflect(src)),
        _ => transpose(&flip_v(src)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixkit_core::Channels;

    fn ramp(w: usize, h: usize, channels: Channels) -> PixelBuffer {
        let n = w * h * channels.count();
        let data = (0..n).map(|i| (i * 7 % 251) as u8).collect();
        PixelBuffer::from_data(w, h, channels, data).unwrap()
    }

    #[test]
    fn test_reflect_rgb() {
        let src = PixelBuffer::from_data(2, 1, Channels::Rgb, vec![1, 0, 0, 0, 1, 0]).unwrap();
        let out = reflect(&src);
        assert_eq!(out.data(), &[0, 1, 0, 1, 0, 0]);
    }

    #[test]
    fn test_reflect_involution() {
        for ch in [Channels::Gray, Channels::Rgb, Channels::Rgba] {
            for (w, h) in [(1, 1), (2, 3), (5, 4), (7, 1)] {
                let src = ramp(w, h, ch);
                assert_eq!(reflect(&reflect(&src)), src, "{w}x{h} {ch}");
            }
        }
    }

    #[test]
    fn test_transpose() {
        // 3x2:
        // 1 2 3
        // 4 5 6
        let src = PixelBuffer::from_data(3, 2, Channels::Gray, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let t = transpose(&src);
        assert_eq!(t.dimensions(), (2, 3));
        assert_eq!(t.data(), &[1, 4, 2, 5, 3, 6]);
    }

    #[test]
    fn test_rotate_ccw() {
        // 1 2 3        3 6
        // 4 5 6   ->   2 5
        //              1 4
        let src = PixelBuffer::from_data(3, 2, Channels::Gray, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let r = rotate(&src);
        assert_eq!(r.dimensions(), (2, 3));
        assert_eq!(r.data(), &[3, 6, 2, 5, 1, 4]);
    }

    #[test]
    fn test_rotate_pixel_mapping() {
        let src = ramp(5, 3, Channels::Rgb);
        let r = rotate(&src);
        for y in 0..3 {
            for x in 0..5 {
                assert_eq!(r.pixel(y, 5 - 1 - x), src.pixel(x, y));
            }
        }
    }

    #[test]
    fn test_rotate_four_times() {
        for ch in [Channels::Gray, Channels::Rgb, Channels::Rgba] {
            let src = ramp(4, 3, ch);
            let mut r = src.clone();
            for _ in 0..4 {
                r = rotate(&r);
            }
            assert_eq!(r, src);
        }
    }

    #[test]
    fn test_rotate_ccw_n_matches_repeated_rotate() {
        let src = ramp(4, 3, Channels::Rgb);
        let once = rotate(&src);
        let twice = rotate(&once);
        let thrice = rotate(&twice);

        assert_eq!(rotate_ccw_n(&src, 0), src);
        assert_eq!(rotate_ccw_n(&src, 1), once);
        assert_eq!(rotate_ccw_n(&src, 2), twice);
        assert_eq!(rotate_ccw_n(&src, 3), thrice);
        assert_eq!(rotate_ccw_n(&src, -1), thrice);
        assert_eq!(rotate_ccw_n(&src, 6), twice);
    }

    #[test]
    fn test_empty_image() {
        let src = PixelBuffer::new(0, 3, Channels::Rgb);
        assert_eq!(reflect(&src), src);
        assert_eq!(rotate(&src).dimensions(), (3, 0));
    }
}
