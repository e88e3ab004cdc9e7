//! ASCII pixmap format.
//!
//! Layout written by [`encode_pixmap`]:
//!
//! ```text
//! P3            <- P3 for 3-channel data, P2 for 1-channel data
//! 2 1           <- width height
//! 255           <- max value
//! 10 20 30 40 50 60 
//! ```
//!
//! One text line per image row, every sample followed by a single space.
//! The reader accepts any whitespace between tokens and `#` comments
//! running to end of line.

use crate::{IoError, IoResult};
use pixkit_core::{Channels, PixelBuffer};
use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, trace};

/// Largest sample value the format carries.
pub const MAX_VALUE: u32 = 255;

/// Format tag for a channel layout, or `None` if the format cannot hold it.
pub fn tag_for(channels: Channels) -> Option<&'static str> {
    match channels {
        Channels::Gray => Some("P2"),
        Channels::Rgb => Some("P3"),
        Channels::Rgba => None,
    }
}

/// Writes `buffer` as pixmap text to any sink.
///
/// # Errors
///
/// - [`IoError::UnsupportedChannels`] for RGBA input (nothing is written)
/// - [`IoError::Io`] if the sink fails
pub fn encode_pixmap<W: Write>(writer: &mut W, buffer: &PixelBuffer) -> IoResult<()> {
    let tag = tag_for(buffer.channels()).ok_or(IoError::UnsupportedChannels(buffer.channels()))?;
    let (width, height) = buffer.dimensions();

    writeln!(writer, "{tag}")?;
    writeln!(writer, "{width} {height}")?;
    writeln!(writer, "{MAX_VALUE}")?;
    // one line per row, even when rows are empty
    for y in 0..height {
        for v in buffer.row(y) {
            write!(writer, "{v} ")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Writes `buffer` to a pixmap file.
///
/// The file is buffered and flushed before returning, so a failure on the
/// final write is reported rather than lost on drop. A failed write may
/// leave a partial file behind.
///
/// # Errors
///
/// See [`encode_pixmap`]; also [`IoError::Io`] if the file cannot be created.
pub fn write_pixmap<P: AsRef<Path>>(path: P, buffer: &PixelBuffer) -> IoResult<()> {
    let path = path.as_ref();
    if tag_for(buffer.channels()).is_none() {
        return Err(IoError::UnsupportedChannels(buffer.channels()));
    }
    debug!(
        path = %path.display(),
        width = buffer.width(),
        height = buffer.height(),
        channels = %buffer.channels(),
        "Writing pixmap"
    );

    let mut writer = BufWriter::new(File::create(path)?);
    encode_pixmap(&mut writer, buffer)?;
    writer.flush()?;
    Ok(())
}

/// Encodes `buffer` into an in-memory pixmap string.
///
/// # Errors
///
/// [`IoError::UnsupportedChannels`] for RGBA input.
pub fn to_pixmap_string(buffer: &PixelBuffer) -> IoResult<String> {
    let mut bytes = Vec::with_capacity(16 + buffer.data().len() * 4);
    encode_pixmap(&mut bytes, buffer)?;
    String::from_utf8(bytes).map_err(|e| IoError::InvalidFile(e.to_string()))
}

/// Parses pixmap text.
///
/// Accepts `P2` (1 channel) and `P3` (3 channels). The max value must be
/// 255 and the body must hold exactly `width * height * channels` samples.
///
/// # Errors
///
/// - [`IoError::UnsupportedFormat`] for any other tag
/// - [`IoError::InvalidFile`] for a malformed header, bad or missing samples
pub fn parse_pixmap(text: &str) -> IoResult<PixelBuffer> {
    let mut tokens = text
        .lines()
        .flat_map(|line| line.split('#').next().unwrap_or("").split_whitespace());

    let tag = tokens
        .next()
        .ok_or_else(|| IoError::InvalidFile("empty pixmap".into()))?;
    let channels = match tag {
        "P2" => Channels::Gray,
        "P3" => Channels::Rgb,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "pixmap tag '{other}' (only P2 and P3 are supported)"
            )));
        }
    };

    let mut header = |name: &str| -> IoResult<usize> {
        let token = tokens
            .next()
            .ok_or_else(|| IoError::InvalidFile(format!("malformed header: missing {name}")))?;
        token
            .parse()
            .map_err(|_| IoError::InvalidFile(format!("malformed header: {name} '{token}'")))
    };
    let width = header("width")?;
    let height = header("height")?;
    let max_value = header("max value")?;
    if width == 0 || height == 0 {
        return Err(IoError::InvalidFile(format!("invalid dimensions {width}x{height}")));
    }
    if max_value != MAX_VALUE as usize {
        return Err(IoError::InvalidFile(format!(
            "max value {max_value} not supported (expected {MAX_VALUE})"
        )));
    }
    trace!(tag, width, height, "Parsed pixmap header");

    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(channels.count()))
        .ok_or_else(|| IoError::InvalidFile(format!("dimensions {width}x{height} overflow")))?;
    // every sample takes at least one byte of text
    if expected > text.len() {
        return Err(IoError::InvalidFile(format!(
            "header claims {expected} samples, file holds {} bytes",
            text.len()
        )));
    }
    let mut data = Vec::with_capacity(expected);
    for token in tokens.by_ref().take(expected) {
        let v: u32 = token
            .parse()
            .map_err(|_| IoError::InvalidFile(format!("bad sample '{token}'")))?;
        if v > MAX_VALUE {
            return Err(IoError::InvalidFile(format!("sample {v} exceeds {MAX_VALUE}")));
        }
        data.push(v as u8);
    }
    if data.len() != expected {
        return Err(IoError::InvalidFile(format!(
            "unexpected end of pixel data: {} of {expected} samples",
            data.len()
        )));
    }
    if tokens.next().is_some() {
        return Err(IoError::InvalidFile(format!(
            "trailing data after {expected} samples"
        )));
    }

    Ok(PixelBuffer::from_data(width, height, channels, data)?)
}

/// Reads a pixmap file. See [`parse_pixmap`].
pub fn read_pixmap<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Reading pixmap");
    let text = fs::read_to_string(path)?;
    parse_pixmap(&text)
}

/// One differing sample between two pixmaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleMismatch {
    /// Image row.
    pub row: usize,
    /// Image column.
    pub col: usize,
    /// Channel index within the pixel.
    pub channel: usize,
    /// Sample in the first image.
    pub a: u8,
    /// Sample in the second image.
    pub b: u8,
}

/// Outcome of [`compare_pixmaps`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixmapDiff {
    /// Every sample matches.
    Identical,
    /// Images differ in size; samples were not compared.
    DimensionMismatch {
        /// First image `(width, height)`.
        a: (usize, usize),
        /// Second image `(width, height)`.
        b: (usize, usize),
    },
    /// Images differ in channel layout; samples were not compared.
    ChannelMismatch {
        /// First image channels.
        a: Channels,
        /// Second image channels.
        b: Channels,
    },
    /// Same shape, these samples differ (row-major order).
    Samples {
        /// Channel layout shared by both images.
        channels: Channels,
        /// Differing samples.
        mismatches: Vec<SampleMismatch>,
    },
}

impl PixmapDiff {
    /// True for [`PixmapDiff::Identical`].
    pub fn is_identical(&self) -> bool {
        matches!(self, PixmapDiff::Identical)
    }

    /// Number of differing samples (0 for shape mismatches).
    pub fn mismatch_count(&self) -> usize {
        match self {
            PixmapDiff::Samples { mismatches, .. } => mismatches.len(),
            _ => 0,
        }
    }
}

impl fmt::Display for PixmapDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixmapDiff::Identical => write!(f, "All pixels match exactly."),
            PixmapDiff::DimensionMismatch { a, b } => {
                write!(f, "Dimension mismatch: {}x{} vs {}x{}", a.0, a.1, b.0, b.1)
            }
            PixmapDiff::ChannelMismatch { a, b } => {
                write!(f, "Channel mismatch: {} vs {}", a.count(), b.count())
            }
            PixmapDiff::Samples {
                channels,
                mismatches,
            } => {
                for m in mismatches {
                    write!(f, "Mismatch at row {}, col {}", m.row, m.col)?;
                    if *channels != Channels::Gray {
                        write!(f, ", channel {}", channel_name(m.channel))?;
                    }
                    writeln!(f, ": {} vs {}", m.a, m.b)?;
                }
                write!(f, "Total differing samples: {}", mismatches.len())
            }
        }
    }
}

fn channel_name(channel: usize) -> &'static str {
    ["R", "G", "B", "A"].get(channel).copied().unwrap_or("?")
}

/// Compares two buffers sample by sample, without tolerance.
pub fn compare_pixmaps(a: &PixelBuffer, b: &PixelBuffer) -> PixmapDiff {
    if a.dimensions() != b.dimensions() {
        return PixmapDiff::DimensionMismatch {
            a: a.dimensions(),
            b: b.dimensions(),
        };
    }
    if a.channels() != b.channels() {
        return PixmapDiff::ChannelMismatch {
            a: a.channels(),
            b: b.channels(),
        };
    }

    let channels = a.channels().count();
    let width = a.width();
    let mismatches: Vec<SampleMismatch> = a
        .data()
        .iter()
        .zip(b.data())
        .enumerate()
        .filter(|(_, (sa, sb))| sa != sb)
        .map(|(i, (&sa, &sb))| {
            let pixel = i / channels;
            SampleMismatch {
                row: pixel / width,
                col: pixel % width,
                channel: i % channels,
                a: sa,
                b: sb,
            }
        })
        .collect();

    if mismatches.is_empty() {
        PixmapDiff::Identical
    } else {
        PixmapDiff::Samples {
            channels: a.channels(),
            mismatches,
        }
    }
}

/// Reads two pixmap files and compares them.
pub fn compare_pixmap_files<P: AsRef<Path>, Q: AsRef<Path>>(a: P, b: Q) -> IoResult<PixmapDiff> {
    Ok(compare_pixmaps(&read_pixmap(a)?, &read_pixmap(b)?))
}
