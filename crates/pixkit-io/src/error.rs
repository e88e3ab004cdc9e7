//! Error types for I/O operations.

use pixkit_core::Channels;
use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error (open, write, flush).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Unsupported format tag.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The format cannot store this channel layout.
    #[error("pixmap cannot store {0} data (expected gray or rgb)")]
    UnsupportedChannels(Channels),

    /// Invalid or corrupted file.
    #[error("invalid file: {0}")]
    InvalidFile(String),

    /// Decoding error from an underlying codec.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Decoded data does not form a valid buffer.
    #[error(transparent)]
    Buffer(#[from] pixkit_core::Error),
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
