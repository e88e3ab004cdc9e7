//! Buffer geometry and the one place that maps coordinates to offsets.
//!
//! # Example
//!
//! ```rust
//! use pixkit_core::{Channels, Layout};
//!
//! let layout = Layout::new(4, 2, Channels::Rgb);
//! assert_eq!(layout.len(), 24);
//! // Green sample of pixel (1, 1)
//! assert_eq!(layout.offset(1, 1, 1), (1 * 4 + 1) * 3 + 1);
//! ```

use crate::{Channels, Error, Result};

/// Width, height and channel count of a flat row-major buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    width: usize,
    height: usize,
    channels: Channels,
}

impl Layout {
    /// Creates a layout.
    #[inline]
    pub const fn new(width: usize, height: usize, channels: Channels) -> Self {
        Self {
            width,
            height,
            channels,
        }
    }

    /// Image width in pixels.
    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Channel description.
    #[inline]
    pub const fn channels(&self) -> Channels {
        self.channels
    }

    /// Samples per pixel.
    #[inline]
    pub const fn channel_count(&self) -> usize {
        self.channels.count()
    }

    /// `(width, height)`.
    #[inline]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of pixels.
    #[inline]
    pub const fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Number of samples (`width * height * channels`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.pixel_count() * self.channel_count()
    }

    /// Returns `true` if the layout has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Samples per row.
    #[inline]
    pub const fn row_len(&self) -> usize {
        self.width * self.channel_count()
    }

    /// Offset of the first sample of pixel `(x, y)`.
    #[inline]
    pub const fn pixel_offset(&self, x: usize, y: usize) -> usize {
        (y * self.width + x) * self.channel_count()
    }

    /// Offset of sample `c` of pixel `(x, y)`.
    #[inline]
    pub const fn offset(&self, x: usize, y: usize, c: usize) -> usize {
        self.pixel_offset(x, y) + c
    }

    /// Returns `true` if `(x, y)` lies inside the image.
    #[inline]
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Same layout with width and height swapped.
    #[inline]
    pub const fn transposed(&self) -> Self {
        Self::new(self.height, self.width, self.channels)
    }

    /// Same dimensions, different channel count.
    #[inline]
    pub const fn with_channels(&self, channels: Channels) -> Self {
        Self::new(self.width, self.height, channels)
    }

    /// Verifies that a sample slice fits this layout exactly.
    ///
    /// # Errors
    ///
    /// [`Error::LengthMismatch`] when `len != self.len()`.
    pub fn check_len(&self, len: usize) -> Result<()> {
        if len == self.len() {
            Ok(())
        } else {
            Err(Error::LengthMismatch {
                width: self.width,
                height: self.height,
                channels: self.channels as u8,
                expected: self.len(),
                got: len,
            })
        }
    }

    /// Fails with [`Error::DimensionMismatch`] unless both layouts share width/height.
    pub fn check_same_size(&self, other: &Layout) -> Result<()> {
        if self.dimensions() == other.dimensions() {
            Ok(())
        } else {
            Err(Error::dimension_mismatch(self.dimensions(), other.dimensions()))
        }
    }
}
