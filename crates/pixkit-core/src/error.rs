//! Error types for pixkit-core operations.
//!
//! Every pixkit crate builds on these variants for buffer contract
//! violations: wrong sample count, unsupported channel count, mismatched
//! dimensions between operands.
//!
//! # Usage
//!
//! ```rust
//! use pixkit_core::{Error, Result};
//!
//! fn check_pixel(x: usize, y: usize, width: usize, height: usize) -> Result<()> {
//!     if x >= width || y >= height {
//!         return Err(Error::out_of_bounds(x, y, width, height));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when a buffer or its description breaks the layout contract.
///
/// # Categories
///
/// - **Bounds errors**: [`OutOfBounds`](Error::OutOfBounds)
/// - **Layout errors**: [`LengthMismatch`](Error::LengthMismatch), [`InvalidDimensions`](Error::InvalidDimensions)
/// - **Channel errors**: [`UnsupportedChannels`](Error::UnsupportedChannels), [`ChannelMismatch`](Error::ChannelMismatch)
/// - **Operand errors**: [`DimensionMismatch`](Error::DimensionMismatch)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Pixel coordinates are outside image bounds.
    #[error("pixel ({x}, {y}) out of bounds for image {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: usize,
        /// Y coordinate that was out of bounds
        y: usize,
        /// Image width
        width: usize,
        /// Image height
        height: usize,
    },

    /// Sample count does not equal `width * height * channels`.
    #[error("buffer holds {got} samples, layout {width}x{height}x{channels} needs {expected}")]
    LengthMismatch {
        /// Layout width
        width: usize,
        /// Layout height
        height: usize,
        /// Layout channel count
        channels: u8,
        /// Required sample count
        expected: usize,
        /// Actual sample count
        got: usize,
    },

    /// Channel count outside {1, 3, 4}.
    #[error("unsupported channel count: {0} (expected 1, 3 or 4)")]
    UnsupportedChannels(u8),

    /// Operation requires a specific channel count.
    ///
    /// Returned, for instance, when an RGB-only filter receives RGBA data.
    #[error("channel mismatch: expected {expected}, got {got}")]
    ChannelMismatch {
        /// Expected channel count
        expected: u8,
        /// Actual channel count
        got: u8,
    },

    /// Two operands must share width and height.
    #[error("dimension mismatch: {a_width}x{a_height} vs {b_width}x{b_height}")]
    DimensionMismatch {
        /// First image width
        a_width: usize,
        /// First image height
        a_height: usize,
        /// Second image width
        b_width: usize,
        /// Second image height
        b_height: usize,
    },

    /// Width/height unusable for the requested operation.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
        /// Reason why dimensions are invalid
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: usize, height: usize, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::DimensionMismatch`] error.
    #[inline]
    pub fn dimension_mismatch(a: (usize, usize), b: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            a_width: a.0,
            a_height: a.1,
            b_width: b.0,
            b_height: b.1,
        }
    }

    /// Creates an [`Error::ChannelMismatch`] error.
    #[inline]
    pub fn channel_mismatch(expected: u8, got: u8) -> Self {
        Self::ChannelMismatch { expected, got }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }

    /// Returns `true` if the error concerns channel counts.
    #[inline]
    pub fn is_channel_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedChannels(_) | Self::ChannelMismatch { .. }
        )
    }
}
