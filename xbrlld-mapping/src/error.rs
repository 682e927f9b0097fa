//! Conversion error types

use thiserror::Error;
use xbrlld_model::LoadError;

/// Fatal conversion errors
///
/// Every variant names the document location it concerns.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The model provider could not load the document
    #[error("Failed to load XBRL document: {location}: {source}")]
    Load {
        location: String,
        #[source]
        source: LoadError,
    },

    /// The document is neither a schema nor a linkbase
    #[error("Document at {location} is not a valid XBRL taxonomy document")]
    NotTaxonomy { location: String },

    /// The document is not an instance or inline XBRL document
    #[error("Document at {location} is not a valid XBRL instance document")]
    NotInstance { location: String },

    /// The canonical fact list is empty
    #[error("No facts found within XBRL document: {location}")]
    NoFacts { location: String },
}

/// Result type for conversions
pub type Result<T> = std::result::Result<T, ConvertError>;
