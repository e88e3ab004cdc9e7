//! Alpha compositing.
//!
//! [`over`] merges a straight-alpha RGBA source onto a destination of the
//! same size. With `as`/`ad` the normalized source/destination alpha:
//!
//! ```text
//! color = as * (1 - ad) * src + as * ad * dst
//! alpha = as
//! ```
//!
//! The destination-only region `ad * (1 - as)` contributes nothing and the
//! output alpha is the source alpha, so this is not the textbook Porter-Duff
//! over: where the source is transparent the result is transparent black.
//! An opaque source over a transparent destination reproduces the source;
//! an opaque source over an opaque destination yields the destination color.
//!
//! # Example
//!
//! ```rust
//! use pixkit_ops::composite::over_pixel;
//!
//! let red = [255, 0, 0, 128];
//! let blue = [0, 0, 255, 255];
//! assert_eq!(over_pixel(red, blue), [0, 0, 128, 128]);
//! ```

use crate::{OpsError, OpsResult};
use pixkit_core::{Channels, PixelBuffer};
use tracing::{debug, trace};

/// Composites one RGBA pixel over another.
#[inline]
pub fn over_pixel(src: [u8; 4], dst: [u8; 4]) -> [u8; 4] {
    let a_src = f64::from(src[3]) / 255.0;
    let a_dst = f64::from(dst[3]) / 255.0;
    let src_only = a_src * (1.0 - a_dst);
    let both = a_src * a_dst;

    let mut out = [0u8; 4];
    for c in 0..3 {
        let s = f64::from(src[c]) / 255.0;
        let d = f64::from(dst[c]) / 255.0;
        out[c] = ((src_only * s + both * d) * 255.0) as u8;
    }
    out[3] = (a_src * 255.0) as u8;
    out
}

/// Composites `src` over `dst`, returning a new RGBA buffer.
///
/// # Errors
///
/// [`OpsError::Buffer`] unless both buffers are RGBA and the same size.
pub fn over(src: &PixelBuffer, dst: &PixelBuffer) -> OpsResult<PixelBuffer> {
    src.channels().expect(Channels::Rgba)?;
    dst.channels().expect(Channels::Rgba)?;
    src.layout().check_same_size(&dst.layout())?;
    let (width, height) = src.dimensions();
    debug!(width, height, "Compositing over");

    let mut out = PixelBuffer::new(width, height, Channels::Rgba);
    for y in 0..height {
        for x in 0..width {
            let s = rgba_at(src, x, y);
            let d = rgba_at(dst, x, y);
            out.set_pixel(x, y, &over_pixel(s, d));
        }
    }
    Ok(out)
}

/// Composites a stack of layers, first element at the bottom.
///
/// The running result is the source and each further layer the destination:
/// `over(... over(l[0], l[1]) ..., l[n])`. Output alpha therefore stays the
/// bottom layer's alpha, and a fully transparent upper region leaves the
/// result unchanged.
///
/// # Errors
///
/// - [`OpsError::InvalidParameter`] for an empty stack
/// - any error of [`over`]
pub fn over_stack(layers: &[PixelBuffer]) -> OpsResult<PixelBuffer> {
    let (bottom, rest) = layers
        .split_first()
        .ok_or_else(|| OpsError::InvalidParameter("layer stack is empty".into()))?;
    bottom.channels().expect(Channels::Rgba)?;
    trace!(layers = layers.len(), "Compositing stack");

    rest.iter().try_fold(bottom.clone(), |acc, layer| over(&acc, layer))
}

#[inline]
fn rgba_at(buf: &PixelBuffer, x: usize, y: usize) -> [u8; 4] {
    let p = buf.pixel(x, y);
    [p[0], p[1], p[2], p[3]]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(w: usize, h: usize, px: [u8; 4]) -> PixelBuffer {
        PixelBuffer::filled(w, h, &px).unwrap()
    }

    #[test]
    fn test_over_pixel_values() {
        assert_eq!(over_pixel([255, 0, 0, 128], [0, 0, 255, 255]), [0, 0, 128, 128]);
        assert_eq!(over_pixel([200, 100, 50, 128], [0, 0, 0, 0]), [100, 50, 25, 128]);
        assert_eq!(over_pixel([200, 100, 50, 128], [10, 200, 30, 128]), [52, 75, 20, 128]);
    }

    #[test]
    fn test_transparent_source_clears() {
        assert_eq!(over_pixel([200, 100, 50, 0], [10, 200, 30, 255]), [0, 0, 0, 0]);
    }

    #[test]
    fn test_opaque_source_over_transparent_is_source() {
        let src = [200, 100, 50, 255];
        assert_eq!(over_pixel(src, [10, 20, 30, 0]), src);
    }

    // The formula wins over "opaque source gives the source": with an opaque
    // destination the A_both term selects the destination color.
    #[test]
    fn test_opaque_over_opaque_keeps_destination_color() {
        assert_eq!(over_pixel([200, 100, 50, 255], [10, 20, 30, 255]), [10, 20, 30, 255]);
    }

    #[test]
    fn test_transparent_destination_scales_by_alpha() {
        for a in [0u8, 1, 64, 128, 200, 255] {
            for v in [0u8, 17, 128, 255] {
                let out = over_pixel([v, v, v, a], [99, 99, 99, 0]);
                assert_eq!(out[3], a);
                assert!(out[0] <= v);
                if a == 255 {
                    assert_eq!(out[0], v);
                }
                if a == 0 {
                    assert_eq!(out[0], 0);
                }
            }
        }
    }

    #[test]
    fn test_over_buffers() {
        let mut src = solid(3, 2, [0, 0, 0, 0]);
        src.set_pixel(1, 1, &[200, 100, 50, 255]);
        let dst = solid(3, 2, [10, 20, 30, 0]);

        let out = over(&src, &dst).unwrap();
        assert_eq!(out.dimensions(), (3, 2));
        assert_eq!(out.pixel(1, 1), &[200, 100, 50, 255]);
        assert_eq!(out.pixel(0, 0), &[0, 0, 0, 0]);
        // inputs untouched
        assert_eq!(dst.pixel(1, 1), &[10, 20, 30, 0]);
    }

    #[test]
    fn test_over_size_mismatch() {
        let err = over(&solid(2, 2, [0; 4]), &solid(2, 3, [0; 4])).unwrap_err();
        assert_eq!(
            err,
            OpsError::Buffer(pixkit_core::Error::dimension_mismatch((2, 2), (2, 3)))
        );
    }

    #[test]
    fn test_over_requires_rgba() {
        let rgb = PixelBuffer::new(2, 2, Channels::Rgb);
        assert!(matches!(over(&rgb, &solid(2, 2, [0; 4])), Err(OpsError::Buffer(_))));
        assert!(matches!(over(&solid(2, 2, [0; 4]), &rgb), Err(OpsError::Buffer(_))));
    }

    #[test]
    fn test_over_stack() {
        let bottom = solid(2, 2, [0, 0, 255, 255]);
        let layer = solid(2, 2, [255, 0, 0, 128]);

        let single = over_stack(std::slice::from_ref(&bottom)).unwrap();
        assert_eq!(single, bottom);

        let two = over_stack(&[bottom.clone(), layer.clone()]).unwrap();
        assert_eq!(two, over(&bottom, &layer).unwrap());
        assert_eq!(two.pixel(0, 0), &[128, 0, 127, 255]);

        let three = over_stack(&[bottom, layer.clone(), layer.clone()]).unwrap();
        assert_eq!(three, over(&two, &layer).unwrap());
    }

    #[test]
    fn test_over_stack_transparent_layer_keeps_bottom() {
        let bottom = solid(2, 2, [200, 100, 50, 255]);
        let clear = solid(2, 2, [9, 9, 9, 0]);

        let merged = over_stack(&[bottom.clone(), clear]).unwrap();
        assert_eq!(merged, bottom);
    }

    #[test]
    fn test_over_stack_keeps_bottom_alpha() {
        let mut bottom = solid(2, 1, [200, 100, 50, 255]);
        bottom.set_pixel(1, 0, &[200, 100, 50, 64]);
        let layer = solid(2, 1, [10, 20, 30, 128]);

        let merged = over_stack(&[bottom, layer]).unwrap();
        assert_eq!(merged.pixel(0, 0)[3], 255);
        assert_eq!(merged.pixel(1, 0)[3], 64);
    }

    #[test]
    fn test_over_stack_empty() {
        assert!(matches!(over_stack(&[]), Err(OpsError::InvalidParameter(_))));
    }
}
