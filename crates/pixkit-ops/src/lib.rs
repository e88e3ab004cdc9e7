//! # pixkit-ops
//!
//! Image operations over [`pixkit_core::PixelBuffer`].
//!
//! # Modules
//!
//! - [`bayer`] - Sensor mosaic simulation (RGB -> one sample per pixel)
//! - [`demosaic`] - Neighbor-average reconstruction (mosaic -> RGB)
//! - [`composite`] - Alpha "over" merge of two RGBA buffers
//! - [`transform`] - Mirror, flip, transpose and 90 degree rotation
//!
//! Every operation borrows its input and returns a newly allocated buffer.
//!
//! # Example
//!
//! ```rust
//! use pixkit_core::PixelBuffer;
//! use pixkit_ops::{bayer::simulate_bayer_mosaic, demosaic::demosaic, transform::rotate};
//!
//! let rgb = PixelBuffer::filled(4, 4, &[100, 150, 200]).unwrap();
//! let raw = simulate_bayer_mosaic(&rgb).unwrap();
//! let back = demosaic(&raw).unwrap();
//! assert_eq!(back, rgb);
//!
//! let turned = rotate(&rgb);
//! assert_eq!(turned.dimensions(), (4, 4));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod bayer;
pub mod composite;
pub mod demosaic;
pub mod transform;

pub use bayer::{BayerPattern, MosaicOptions, ZeroNeighbors};
pub use error::{OpsError, OpsResult};
