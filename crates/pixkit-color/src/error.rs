//! Error types for color operations.

use thiserror::Error;

/// Color operation error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorError {
    /// Parameter is invalid (NaN, out of its documented range).
    #[error("invalid input value: {0}")]
    InvalidValue(String),

    /// Buffer does not satisfy the operation's layout contract.
    #[error(transparent)]
    Buffer(#[from] pixkit_core::Error),
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
