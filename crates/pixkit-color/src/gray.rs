//! Luma-weighted reduction of RGB to a single channel.

use crate::ColorResult;
use pixkit_core::{Channels, PixelBuffer};
use tracing::debug;

/// BT.709 luma weights `[R, G, B]`.
pub const REC709_LUMA: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Weighted BT.709 luma of one RGB triple, unclamped and unrounded.
#[inline]
pub fn luma_rec709(r: f64, g: f64, b: f64) -> f64 {
    REC709_LUMA[0] * r + REC709_LUMA[1] * g + REC709_LUMA[2] * b
}

/// Reduces an RGB buffer to one luma sample per pixel.
///
/// Luma is truncated, not rounded: white comes out as 254 because the
/// weighted sum lands just under 255.
///
/// # Errors
///
/// [`crate::ColorError::Buffer`] unless `rgb` is 3-channel.
///
/// # Example
///
/// ```rust
/// use pixkit_color::rgb_to_gray;
/// use pixkit_core::PixelBuffer;
///
/// let img = PixelBuffer::filled(1, 1, &[100, 150, 200]).unwrap();
/// assert_eq!(rgb_to_gray(&img).unwrap().data(), &[142]);
/// ```
pub fn rgb_to_gray(rgb: &PixelBuffer) -> ColorResult<PixelBuffer> {
    rgb.channels().expect(Channels::Rgb)?;
    debug!(width = rgb.width(), height = rgb.height(), "gray::rgb_to_gray");

    Ok(rgb.map_pixels(Channels::Gray, |src, dst| {
        dst[0] = luma_rec709(src[0] as f64, src[1] as f64, src[2] as f64) as u8;
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColorError;

    #[test]
    fn test_known_values() {
        let data = vec![255, 255, 255, 255, 0, 0, 0, 255, 0, 0, 0, 255, 10, 20, 30, 128, 128, 128];
        let img = PixelBuffer::from_data(6, 1, Channels::Rgb, data).unwrap();
        let gray = rgb_to_gray(&img).unwrap();
        assert_eq!(gray.channels(), Channels::Gray);
        assert_eq!(gray.data(), &[254, 54, 182, 18, 18, 128]);
    }

    #[test]
    fn test_dimensions_preserved() {
        let img = PixelBuffer::new(7, 3, Channels::Rgb);
        let gray = rgb_to_gray(&img).unwrap();
        assert_eq!(gray.dimensions(), (7, 3));
        assert_eq!(gray.data().len(), 21);
    }

    #[test]
    fn test_rejects_gray_input() {
        let img = PixelBuffer::new(2, 2, Channels::Gray);
        assert!(matches!(rgb_to_gray(&img), Err(ColorError::Buffer(_))));
    }
}
