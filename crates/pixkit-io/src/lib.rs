//! # pixkit-io
//!
//! File formats for pixkit buffers.
//!
//! - [`pixmap`] - ASCII pixmap writer, reader and exact comparator
//!   (`P3` for RGB, `P2` for single-channel data)
//! - [`png`](mod@crate::png) - PNG decoding to RGBA8 (feature `png`, on by default)
//!
//! # Example
//!
//! ```rust
//! use pixkit_core::{Channels, PixelBuffer};
//! use pixkit_io::{parse_pixmap, to_pixmap_string};
//!
//! let img = PixelBuffer::from_data(2, 1, Channels::Rgb, vec![10, 20, 30, 40, 50, 60]).unwrap();
//! let text = to_pixmap_string(&img).unwrap();
//! assert_eq!(text, "P3\n2 1\n255\n10 20 30 40 50 60 \n");
//! assert_eq!(parse_pixmap(&text).unwrap(), img);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod pixmap;
#[cfg(feature = "png")]
pub mod png;

pub use error::{IoError, IoResult};
pub use pixmap::{
    compare_pixmap_files, compare_pixmaps, encode_pixmap, parse_pixmap, read_pixmap,
    to_pixmap_string, write_pixmap, PixmapDiff, SampleMismatch,
};
#[cfg(feature = "png")]
pub use self::png::read_png_rgba;
