//! Owned pixel storage.
//!
//! [`PixelBuffer`] pairs a [`Layout`] with exactly `layout.len()` samples.
//! The pairing is checked once at construction, so every filter downstream
//! can index through the layout without re-validating lengths.
//!
//! Filters never mutate their input: they borrow a buffer and hand back a
//! freshly allocated one.
//!
//! # Usage
//!
//! ```rust
//! use pixkit_core::{Channels, PixelBuffer};
//!
//! let mut img = PixelBuffer::new(4, 2, Channels::Rgb);
//! img.set_pixel(1, 1, &[10, 20, 30]);
//! assert_eq!(img.pixel(1, 1), &[10, 20, 30]);
//! assert_eq!(img.data().len(), 24);
//! ```

use crate::{Channels, Error, Layout, Result};

/// Flat, row-major 8-bit image.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    layout: Layout,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Creates a zero-filled buffer.
    pub fn new(width: usize, height: usize, channels: Channels) -> Self {
        Self::zeroed(Layout::new(width, height, channels))
    }

    /// Creates a zero-filled buffer for `layout`.
    pub fn zeroed(layout: Layout) -> Self {
        Self {
            layout,
            data: vec![0; layout.len()],
        }
    }

    /// Wraps existing samples.
    ///
    /// # Errors
    ///
    /// [`Error::LengthMismatch`] unless `data.len() == width * height * channels`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pixkit_core::{Channels, PixelBuffer};
    ///
    /// let img = PixelBuffer::from_data(2, 1, Channels::Rgb, vec![10, 20, 30, 40, 50, 60]).unwrap();
    /// assert_eq!(img.pixel(1, 0), &[40, 50, 60]);
    /// assert!(PixelBuffer::from_data(2, 1, Channels::Rgb, vec![0; 5]).is_err());
    /// ```
    pub fn from_data(width: usize, height: usize, channels: Channels, data: Vec<u8>) -> Result<Self> {
        Self::from_layout(Layout::new(width, height, channels), data)
    }

    /// Wraps existing samples described by `layout`.
    pub fn from_layout(layout: Layout, data: Vec<u8>) -> Result<Self> {
        layout.check_len(data.len())?;
        Ok(Self { layout, data })
    }

    /// Creates a buffer where every pixel equals `pixel`.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedChannels`] if `pixel.len()` is not 1, 3 or 4.
    /// Lengths past 255 are reported as 255.
    pub fn filled(width: usize, height: usize, pixel: &[u8]) -> Result<Self> {
        let channels = Channels::from_count(saturating_count(pixel.len()))?;
        let layout = Layout::new(width, height, channels);
        let data = pixel.repeat(layout.pixel_count());
        Ok(Self { layout, data })
    }

    /// Geometry of this buffer.
    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.layout.width()
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.layout.height()
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        self.layout.dimensions()
    }

    /// Channel description.
    #[inline]
    pub fn channels(&self) -> Channels {
        self.layout.channels()
    }

    /// Returns `true` if the image has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    /// Raw samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the buffer, returning the samples.
    #[inline]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Sample `c` of pixel `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the buffer.
    #[inline]
    pub fn sample(&self, x: usize, y: usize, c: usize) -> u8 {
        debug_assert!(self.layout.contains(x, y), "pixel out of bounds");
        self.data[self.layout.offset(x, y, c)]
    }

    /// Samples of pixel `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> &[u8] {
        debug_assert!(self.layout.contains(x, y), "pixel out of bounds");
        let start = self.layout.pixel_offset(x, y);
        &self.data[start..start + self.layout.channel_count()]
    }

    /// Samples of pixel `(x, y)`, or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> Option<&[u8]> {
        self.layout.contains(x, y).then(|| self.pixel(x, y))
    }

    /// Overwrites pixel `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds or `pixel` has the wrong length.
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: &[u8]) {
        debug_assert!(self.layout.contains(x, y), "pixel out of bounds");
        let start = self.layout.pixel_offset(x, y);
        self.data[start..start + self.layout.channel_count()].copy_from_slice(pixel);
    }

    /// Overwrites pixel `(x, y)`, reporting positions outside the image.
    pub fn try_set_pixel(&mut self, x: usize, y: usize, pixel: &[u8]) -> Result<()> {
        if !self.layout.contains(x, y) {
            return Err(Error::out_of_bounds(x, y, self.width(), self.height()));
        }
        if pixel.len() != self.layout.channel_count() {
            return Err(Error::channel_mismatch(
                self.channels() as u8,
                saturating_count(pixel.len()),
            ));
        }
        self.set_pixel(x, y, pixel);
        Ok(())
    }

    /// Samples of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        debug_assert!(y < self.height(), "row out of bounds");
        let start = self.layout.pixel_offset(0, y);
        &self.data[start..start + self.layout.row_len()]
    }

    /// Iterates over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        // chunks_exact panics on zero, and a zero-width image has no samples anyway
        let row_len = self.layout.row_len().max(1);
        self.data.chunks_exact(row_len)
    }

    /// Iterates over pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.data.chunks_exact(self.layout.channel_count())
    }

    /// Builds a new buffer of the same size by mapping every pixel.
    ///
    /// `f` receives the source pixel and the destination pixel slice
    /// (`channels` samples, zero-initialized).
    ///
    /// # Example
    ///
    /// ```rust
    /// use pixkit_core::{Channels, PixelBuffer};
    ///
    /// let rgb = PixelBuffer::filled(2, 2, &[10, 20, 30]).unwrap();
    /// let red = rgb.map_pixels(Channels::Gray, |src, dst| dst[0] = src[0]);
    /// assert_eq!(red.data(), &[10, 10, 10, 10]);
    /// ```
    pub fn map_pixels<F>(&self, channels: Channels, mut f: F) -> PixelBuffer
    where
        F: FnMut(&[u8], &mut [u8]),
    {
        let mut out = PixelBuffer::zeroed(self.layout.with_channels(channels));
        for (src, dst) in self
            .data
            .chunks_exact(self.layout.channel_count())
            .zip(out.data.chunks_exact_mut(channels.count()))
        {
            f(src, dst);
        }
        out
    }

    /// Discards the alpha channel of an RGBA buffer.
    ///
    /// # Errors
    ///
    /// [`Error::ChannelMismatch`] unless the buffer is RGBA.
    pub fn drop_alpha(&self) -> Result<PixelBuffer> {
        self.channels().expect(Channels::Rgba)?;
        Ok(self.map_pixels(Channels::Rgb, |src, dst| dst.copy_from_slice(&src[..3])))
    }

    /// Appends an opaque alpha channel to an RGB buffer.
    ///
    /// # Errors
    ///
    /// [`Error::ChannelMismatch`] unless the buffer is RGB.
    pub fn with_opaque_alpha(&self) -> Result<PixelBuffer> {
        self.channels().expect(Channels::Rgb)?;
        Ok(self.map_pixels(Channels::Rgba, |src, dst| {
            dst[..3].copy_from_slice(src);
            dst[3] = u8::MAX;
        }))
    }
}

/// Sample count as reported in channel errors.
#[inline]
fn saturating_count(len: usize) -> u8 {
    u8::try_from(len).unwrap_or(u8::MAX)
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("channels", &self.channels())
            .finish()
    }
}

impl AsRef<[u8]> for PixelBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let img = PixelBuffer::new(10, 5, Channels::Rgba);
        assert_eq!(img.data().len(), 200);
        assert!(img.data().iter().all(|&v| v == 0));
        assert_eq!(img.dimensions(), (10, 5));
    }

    #[test]
    fn test_from_data_wrong_size() {
        let err = PixelBuffer::from_data(3, 3, Channels::Rgb, vec![0; 26]).unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { expected: 27, got: 26, .. }));
    }

    #[test]
    fn test_filled() {
        let img = PixelBuffer::filled(3, 2, &[1, 2, 3, 4]).unwrap();
        assert_eq!(img.channels(), Channels::Rgba);
        assert_eq!(img.pixel(2, 1), &[1, 2, 3, 4]);
        assert!(PixelBuffer::filled(3, 2, &[1, 2]).is_err());
    }

    #[test]
    fn test_filled_rejects_long_pixel() {
        // 259 would wrap to 3 if narrowed with `as`
        let err = PixelBuffer::filled(2, 1, &[7; 259]).unwrap_err();
        assert_eq!(err, Error::UnsupportedChannels(u8::MAX));
        assert!(PixelBuffer::filled(2, 1, &[7; 256]).is_err());
    }

    #[test]
    fn test_set_get_pixel() {
        let mut img = PixelBuffer::new(4, 4, Channels::Rgb);
        img.set_pixel(3, 2, &[9, 8, 7]);
        assert_eq!(img.pixel(3, 2), &[9, 8, 7]);
        assert_eq!(img.sample(3, 2, 2), 7);
        assert_eq!(img.get_pixel(4, 0), None);
        assert_eq!(img.pixel(0, 0), &[0, 0, 0]);
    }

    #[test]
    fn test_try_set_pixel() {
        let mut img = PixelBuffer::new(2, 2, Channels::Gray);
        assert!(img.try_set_pixel(1, 1, &[5]).is_ok());
        assert!(img.try_set_pixel(2, 0, &[5]).unwrap_err().is_bounds_error());
        assert!(img.try_set_pixel(0, 0, &[5, 5, 5]).unwrap_err().is_channel_error());
        assert_eq!(
            img.try_set_pixel(0, 0, &[5; 257]),
            Err(Error::channel_mismatch(1, u8::MAX))
        );
    }

    #[test]
    fn test_rows() {
        let img = PixelBuffer::from_data(2, 2, Channels::Gray, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(img.row(1), &[3, 4]);
        let rows: Vec<&[u8]> = img.rows().collect();
        assert_eq!(rows, vec![&[1u8, 2][..], &[3u8, 4][..]]);
    }

    #[test]
    fn test_drop_alpha() {
        let rgba = PixelBuffer::from_data(2, 1, Channels::Rgba, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let rgb = rgba.drop_alpha().unwrap();
        assert_eq!(rgb.channels(), Channels::Rgb);
        assert_eq!(rgb.data(), &[1, 2, 3, 5, 6, 7]);
        assert!(rgb.drop_alpha().is_err());
    }

    #[test]
    fn test_with_opaque_alpha() {
        let rgb = PixelBuffer::from_data(1, 1, Channels::Rgb, vec![7, 8, 9]).unwrap();
        let rgba = rgb.with_opaque_alpha().unwrap();
        assert_eq!(rgba.data(), &[7, 8, 9, 255]);
    }
}
