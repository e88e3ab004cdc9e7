//! PNG decoding.
//!
//! Decodes any PNG into an RGBA8 [`PixelBuffer`], the input contract of the
//! pixkit filters. Palette and low bit depth images are expanded, 16-bit
//! samples are reduced to their high byte, gray is replicated into RGB and
//! images without alpha get an opaque alpha channel.
//!
//! # Example
//!
//! ```rust,ignore
//! use pixkit_io::read_png_rgba;
//!
//! let rgba = read_png_rgba("input.png")?;
//! let rgb = rgba.drop_alpha()?;
//! ```

use crate::{IoError, IoResult};
use pixkit_core::{Channels, PixelBuffer};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, warn};

/// Reads a PNG file as RGBA8.
///
/// # Errors
///
/// - [`IoError::Io`] if the file cannot be opened
/// - [`IoError::DecodeError`] for corrupt or unsupported PNG data
pub fn read_png_rgba<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let mut decoder = ::png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(::png::Transformations::EXPAND | ::png::Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(e.to_string()))?;

    if reader.info().bit_depth == ::png::BitDepth::Sixteen {
        warn!(path = %path.display(), "16-bit PNG reduced to 8 bits per sample");
    }

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(e.to_string()))?;
    let samples = &buf[..info.buffer_size()];
    let width = info.width as usize;
    let height = info.height as usize;

    let rgba: Vec<u8> = match (info.color_type, info.bit_depth) {
        (::png::ColorType::Rgba, ::png::BitDepth::Eight) => samples.to_vec(),
        (::png::ColorType::Rgb, ::png::BitDepth::Eight) => samples
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], u8::MAX])
            .collect(),
        (::png::ColorType::Grayscale, ::png::BitDepth::Eight) => {
            samples.iter().flat_map(|&g| [g, g, g, u8::MAX]).collect()
        }
        (::png::ColorType::GrayscaleAlpha, ::png::BitDepth::Eight) => samples
            .chunks_exact(2)
            .flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]])
            .collect(),
        (color_type, bit_depth) => {
            return Err(IoError::DecodeError(format!(
                "unexpected decoded layout {color_type:?} {bit_depth:?}"
            )));
        }
    };
    debug!(
        path = %path.display(),
        width,
        height,
        color_type = ?info.color_type,
        "Decoded PNG"
    );

    Ok(PixelBuffer::from_data(width, height, Channels::Rgba, rgba)?)
}
