//! Error Types - Request-Input Failures
//!
//! Every failure here is caused by the request itself. Nothing is retried
//! and nothing is fatal to the process.

use thiserror::Error;

/// Malformed or out-of-range dimension string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DimensionError {
    #[error("invalid dimensions: expected {expected} dimensions, got {actual}")]
    FieldCount { expected: usize, actual: usize },

    #[error("invalid dimension values, expected integer values (got {0:?})")]
    NotAnInteger(String),

    #[error("dimension values must be between {min} and {max} (got {value})")]
    OutOfRange { value: i64, min: u32, max: u32 },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CubeError {
    #[error(transparent)]
    Structural(#[from] DimensionError),

    #[error("unknown color code '{0}'")]
    UnknownColor(char),
}
