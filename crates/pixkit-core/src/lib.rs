//! # pixkit-core
//!
//! Core types for in-memory raster processing.
//!
//! This crate provides the foundational types used by every other pixkit crate:
//!
//! - [`Channels`] - Supported sample counts per pixel (gray, RGB, RGBA)
//! - [`Layout`] - Width/height/channels and the single `(x, y, c) -> offset` mapping
//! - [`PixelBuffer`] - Owned, row-major 8-bit pixel storage
//! - [`Error`] - Contract violations shared by all crates
//!
//! ## Memory Layout
//!
//! Buffers are flat and row-major with no padding or stride:
//!
//! ```text
//! Memory: [R G B R G B R G B ...]  <- Row 0
//!         [R G B R G B R G B ...]  <- Row 1
//! ```
//!
//! Sample `c` of pixel `(x, y)` lives at `(y * width + x) * channels + c`.
//! That arithmetic is owned by [`Layout::offset`]; nothing else re-derives it.
//!
//! ## Crate Structure
//!
//! ```text
//! pixkit-core (this crate)
//!    ^
//!    |
//!    +-- pixkit-color (HSV, tone ops, grayscale)
//!    +-- pixkit-ops (bayer, demosaic, composite, transform)
//!    +-- pixkit-io (pixmap text format, PNG decode)
//!    +-- pixkit-points (colored point clouds)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod error;
pub mod layout;
pub mod pixel;

pub use buffer::PixelBuffer;
pub use error::{Error, Result};
pub use layout::Layout;
pub use pixel::Channels;

/// Prelude module for convenient imports.
///
/// ```
/// use pixkit_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffer::PixelBuffer;
    pub use crate::error::{Error, Result};
    pub use crate::layout::Layout;
    pub use crate::pixel::Channels;
}
