//! Hue shift and desaturation.
//!
//! Both operations take every RGB pixel through [`rgb_to_hsv`], adjust one
//! component, and come back through [`hsv_to_rgb`]. Results are truncated to
//! bytes; the HSV round trip is only exact in the continuous domain, so an
//! arbitrary pixel may move by one code value. A zero adjustment is
//! short-circuited and returns an exact copy.
//!
//! # Example
//!
//! ```rust
//! use pixkit_color::tone::{desaturate, hue_shift};
//! use pixkit_core::PixelBuffer;
//!
//! let img = PixelBuffer::filled(2, 2, &[255, 0, 0]).unwrap();
//! assert_eq!(hue_shift(&img, 120.0).unwrap().pixel(0, 0), &[0, 255, 0]);
//! assert_eq!(desaturate(&img, 1.0).unwrap().pixel(0, 0), &[255, 255, 255]);
//! ```

use crate::hsv::{hsv_to_rgb, rgb_to_hsv, Hsv};
use crate::{ColorError, ColorResult};
use pixkit_core::{Channels, PixelBuffer};
use tracing::{debug, trace};

/// Rotates the hue of every pixel by `shift_degrees`.
///
/// The shifted hue is wrapped back into `[0, 360)`, so any finite shift is
/// accepted; `360` behaves like `0` up to truncation.
///
/// # Errors
///
/// - [`ColorError::Buffer`] unless `rgb` is 3-channel
/// - [`ColorError::InvalidValue`] for a non-finite shift
pub fn hue_shift(rgb: &PixelBuffer, shift_degrees: f64) -> ColorResult<PixelBuffer> {
    rgb.channels().expect(Channels::Rgb)?;
    if !shift_degrees.is_finite() {
        return Err(ColorError::InvalidValue(format!(
            "hue shift must be finite, got {shift_degrees}"
        )));
    }
    debug!(width = rgb.width(), height = rgb.height(), shift_degrees, "tone::hue_shift");

    if shift_degrees == 0.0 {
        trace!("zero hue shift, copying input");
        return Ok(rgb.clone());
    }

    Ok(map_hsv(rgb, |hsv| Hsv {
        h: Hsv::wrap_hue(hsv.h + shift_degrees),
        ..hsv
    }))
}

/// Scales the saturation of every pixel by `1 - factor`.
///
/// `factor = 0` leaves the image untouched, `factor = 1` drives saturation to
/// zero so that every output pixel has `R == G == B`.
///
/// # Errors
///
/// - [`ColorError::Buffer`] unless `rgb` is 3-channel
/// - [`ColorError::InvalidValue`] if `factor` is outside `[0, 1]`
pub fn desaturate(rgb: &PixelBuffer, factor: f64) -> ColorResult<PixelBuffer> {
    rgb.channels().expect(Channels::Rgb)?;
    if !(0.0..=1.0).contains(&factor) {
        return Err(ColorError::InvalidValue(format!(
            "desaturation factor must be in [0, 1], got {factor}"
        )));
    }
    debug!(width = rgb.width(), height = rgb.height(), factor, "tone::desaturate");

    if factor == 0.0 {
        trace!("zero desaturation, copying input");
        return Ok(rgb.clone());
    }

    Ok(map_hsv(rgb, |hsv| Hsv {
        s: hsv.s * (1.0 - factor),
        ..hsv
    }))
}

fn map_hsv<F>(rgb: &PixelBuffer, adjust: F) -> PixelBuffer
where
    F: Fn(Hsv) -> Hsv,
{
    rgb.map_pixels(Channels::Rgb, |src, dst| {
        let hsv = adjust(rgb_to_hsv(src[0] as f64, src[1] as f64, src[2] as f64));
        let out = hsv_to_rgb(hsv.h, hsv.s, hsv.v);
        dst[0] = out[0] as u8;
        dst[1] = out[1] as u8;
        dst[2] = out[2] as u8;
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: usize, height: usize) -> PixelBuffer {
        let mut data = Vec::with_capacity(width * height * 3);
        for y in 0..height {
            for x in 0..width {
                data.push((x * 37 % 256) as u8);
                data.push((y * 53 % 256) as u8);
                data.push(((x + y) * 29 % 256) as u8);
            }
        }
        PixelBuffer::from_data(width, height, Channels::Rgb, data).unwrap()
    }

    fn assert_close(a: &PixelBuffer, b: &PixelBuffer, tolerance: i32) {
        assert_eq!(a.layout(), b.layout());
        for (i, (&x, &y)) in a.data().iter().zip(b.data()).enumerate() {
            assert!((x as i32 - y as i32).abs() <= tolerance, "sample {i}: {x} vs {y}");
        }
    }

    #[test]
    fn test_hue_shift_zero_is_exact() {
        let img = gradient(16, 9);
        assert_eq!(hue_shift(&img, 0.0).unwrap(), img);
    }

    #[test]
    fn test_hue_shift_full_turn() {
        let img = gradient(16, 9);
        assert_close(&hue_shift(&img, 360.0).unwrap(), &img, 1);
    }

    #[test]
    fn test_hue_shift_primaries() {
        let data = vec![255, 0, 0, 0, 255, 0, 0, 0, 255];
        let img = PixelBuffer::from_data(3, 1, Channels::Rgb, data).unwrap();

        let shifted = hue_shift(&img, 180.0).unwrap();
        assert_eq!(shifted.data(), &[0, 255, 255, 255, 0, 255, 255, 255, 0]);

        let back = hue_shift(&img, -120.0).unwrap();
        assert_eq!(back.data(), &[0, 0, 255, 255, 0, 0, 0, 255, 0]);
    }

    #[test]
    fn test_hue_shift_mixed_color() {
        let img = PixelBuffer::filled(1, 1, &[100, 150, 200]).unwrap();
        assert_eq!(hue_shift(&img, 180.0).unwrap().data(), &[200, 150, 100]);
        assert_eq!(hue_shift(&img, 120.0).unwrap().data(), &[200, 100, 150]);
    }

    #[test]
    fn test_hue_shift_rejects_non_finite() {
        let img = gradient(2, 2);
        assert!(matches!(
            hue_shift(&img, f64::INFINITY),
            Err(ColorError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_desaturate_zero_is_identity() {
        let img = gradient(8, 8);
        assert_eq!(desaturate(&img, 0.0).unwrap(), img);
    }

    #[test]
    fn test_desaturate_full_is_gray() {
        let img = gradient(12, 7);
        let out = desaturate(&img, 1.0).unwrap();
        for px in out.pixels() {
            assert_eq!(px[0], px[1]);
            assert_eq!(px[1], px[2]);
        }
    }

    #[test]
    fn test_desaturate_partial() {
        let img = PixelBuffer::filled(1, 1, &[100, 150, 200]).unwrap();
        assert_eq!(desaturate(&img, 0.5).unwrap().data(), &[150, 175, 200]);
        assert_eq!(desaturate(&img, 0.25).unwrap().data(), &[125, 162, 200]);
    }

    #[test]
    fn test_desaturate_rejects_out_of_range_factor() {
        let img = gradient(2, 2);
        assert!(desaturate(&img, 1.5).is_err());
        assert!(desaturate(&img, -0.1).is_err());
        assert!(desaturate(&img, f64::NAN).is_err());
    }

    #[test]
    fn test_requires_rgb() {
        let rgba = PixelBuffer::new(2, 2, Channels::Rgba);
        assert!(matches!(hue_shift(&rgba, 10.0), Err(ColorError::Buffer(_))));
        assert!(matches!(desaturate(&rgba, 0.5), Err(ColorError::Buffer(_))));
    }
}
