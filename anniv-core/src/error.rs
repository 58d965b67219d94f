//! Error types for anniv.

use thiserror::Error;

/// Errors that can occur in anniv operations.
///
/// Only I/O-bearing operations return these. Event generation, filtering and
/// export degrade to safe defaults instead of failing.
#[derive(Error, Debug)]
pub enum AnnivError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for anniv operations.
pub type AnnivResult<T> = Result<T, AnnivError>;
