//! # pixkit-color
//!
//! Per-pixel color operations on 8-bit buffers.
//!
//! - [`hsv`] - RGB <-> HSV point conversion
//! - [`tone`] - Hue shift and desaturation built on [`hsv`]
//! - [`gray`] - BT.709 luma reduction to a single channel
//!
//! # Architecture
//!
//! ```text
//!   tone ----> hsv
//!   gray
//!    \          /
//!     pixkit-core
//! ```
//!
//! All math runs in `f64`. Results are narrowed to bytes by truncation, never
//! rounding; this is what makes the outputs reproducible sample-for-sample.
//!
//! # Quick Start
//!
//! ```rust
//! use pixkit_color::{hue_shift, rgb_to_gray};
//! use pixkit_core::PixelBuffer;
//!
//! let red = PixelBuffer::filled(2, 2, &[255, 0, 0]).unwrap();
//! let cyan = hue_shift(&red, 180.0).unwrap();
//! assert_eq!(cyan.pixel(0, 0), &[0, 255, 255]);
//!
//! let gray = rgb_to_gray(&red).unwrap();
//! assert_eq!(gray.pixel(0, 0), &[54]);
//! ```

#![warn(missing_docs)]

mod error;
pub mod gray;
pub mod hsv;
pub mod tone;

pub use error::{ColorError, ColorResult};
pub use gray::{luma_rec709, rgb_to_gray, REC709_LUMA};
pub use hsv::{hsv_to_rgb, rgb_to_hsv, Hsv};
pub use tone::{desaturate, hue_shift};
