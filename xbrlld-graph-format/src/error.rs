//! Formatter error types

use thiserror::Error;

/// Result type for formatting operations
pub type Result<T> = std::result::Result<T, FormatError>;

/// Errors that can occur while serializing a dataset
#[derive(Error, Debug)]
pub enum FormatError {
    /// Writing to the output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The requested serialization is not supported
    #[error("Unknown output format: {0} (expected trig or nquads)")]
    UnknownFormat(String),
}
