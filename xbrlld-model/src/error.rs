//! Model loading error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading an XBRL model
#[derive(Debug, Error)]
pub enum LoadError {
    /// No model is available for the requested location
    #[error("Document not found: {0}")]
    NotFound(String),

    /// Reading the model file failed
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The model file is not valid model JSON
    #[error("Invalid model JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The location cannot be handled by this loader
    #[error("Unsupported location: {0}")]
    Unsupported(String),
}

/// Result type for model loading
pub type Result<T> = std::result::Result<T, LoadError>;
