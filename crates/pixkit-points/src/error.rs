//! Error types for point cloud operations.

use std::io;
use thiserror::Error;

/// Point cloud error.
#[derive(Debug, Error)]
pub enum PointsError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration value out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The shape kept landing outside the canvas.
    #[error("sampling gave up after {attempts} attempts with {accepted} of {requested} points")]
    SamplingExhausted {
        /// Samples drawn.
        attempts: usize,
        /// Points that landed on the canvas.
        accepted: usize,
        /// Points requested.
        requested: usize,
    },
}

/// Result type for point cloud operations.
pub type PointsResult<T> = Result<T, PointsError>;
