//! Error types for threadvast

use thiserror::Error;

/// Main error type for threadvast
#[derive(Debug, Error)]
pub enum ThreadvastError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Unparsable selector string
    #[error("Invalid selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },

    /// A comment container that cannot be turned into a complete record
    #[error("Malformed comment record '{id}': {reason}")]
    MalformedRecord { id: String, reason: String },

    /// Reconstruction popped past the sentinel root
    #[error("Internal consistency failure: {0}")]
    InternalConsistency(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<ThreadvastError>,
    },
}

impl ThreadvastError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        ThreadvastError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Malformed-record constructor naming the offending container
    pub fn malformed(id: impl Into<String>, reason: impl Into<String>) -> Self {
        ThreadvastError::MalformedRecord {
            id: id.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for threadvast
pub type Result<T> = std::result::Result<T, ThreadvastError>;
