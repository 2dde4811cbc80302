//! Error types for OpenGRC

use thiserror::Error;

/// OpenGRC error type
#[derive(Error, Debug)]
pub enum GrcError {
    /// An input violated the caller's contract. Never silently coerced:
    /// an out-of-range risk factor or malformed check fails the whole
    /// call rather than being clamped or skipped, since a partially
    /// dropped input would produce a misleading score.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Register lookup by identifier missed
    #[error("not found: {0}")]
    NotFound(String),
}

/// Result type for OpenGRC
pub type GrcResult<T> = Result<T, GrcError>;
