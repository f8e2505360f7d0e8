//! Error handling for Polytonic
//!
//! Only resource construction can fail: mapping tables, dictionaries,
//! reading material and persisted positions. Conversion itself is total and
//! never returns an error.

use thiserror::Error;

use super::files::ResourceError;

/// Error type for every fallible operation in the crate
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The mapping resource is not a flat, non-empty string-to-string object
    #[error("Malformed mapping table: {message}")]
    MalformedTable { message: String },

    /// The resource could not be located or read
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON syntax or shape error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading material violates its structural invariants
    #[error("Invalid work '{work}': {message}")]
    InvalidWork { work: String, message: String },

    /// A reading position could not be stored or restored
    #[error("Position store error: {message}")]
    Persistence { message: String },

    /// No loader is available for the resource's format
    #[error("Unsupported resource format '{extension}'{}", hint(.extension))]
    UnsupportedFormat { extension: String },
}

fn hint(extension: &str) -> &'static str {
    match extension {
        "yaml" | "yml" | "toml" | "csv" => " (enable the `data-loading` feature)",
        _ => "",
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

// Convenience constructors for errors
impl ConversionError {
    pub fn malformed(message: impl Into<String>) -> Self {
        ConversionError::MalformedTable {
            message: message.into(),
        }
    }

    pub fn invalid_work(work: impl Into<String>, message: impl Into<String>) -> Self {
        ConversionError::InvalidWork {
            work: work.into(),
            message: message.into(),
        }
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        ConversionError::Persistence {
            message: message.into(),
        }
    }

    pub fn unsupported_format(extension: impl Into<String>) -> Self {
        ConversionError::UnsupportedFormat {
            extension: extension.into(),
        }
    }
}
