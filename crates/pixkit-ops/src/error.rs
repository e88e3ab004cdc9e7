//! Error types for image operations.

use thiserror::Error;

/// Error type for image operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OpsError {
    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Buffer contract violated: channel count, operand size, too few pixels.
    #[error(transparent)]
    Buffer(#[from] pixkit_core::Error),
}

/// Result type for image operations.
pub type OpsResult<T> = Result<T, OpsError>;
