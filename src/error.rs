//! Error types for the light curve analyses.

use thiserror::Error;

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, FlareError>;

/// Errors that can occur while validating or analysing a light curve.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlareError {
    /// Series is malformed (length mismatch, too short, time going backwards).
    #[error("invalid series: {0}")]
    InvalidSeries(String),

    /// Not enough usable data for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Two consecutive samples share the same timestamp.
    #[error("degenerate timestep: zero time delta between samples {index} and {}", .index + 1)]
    DegenerateTimestep { index: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
