//! Error types and error handling for the CAALM search service.
//!
//! The scorer itself cannot fail. These errors cover request
//! validation, configuration loading and the document source.
//! Protocol-specific mapping (HTTP status codes) lives in the
//! respective adapter modules.

use thiserror::Error;

/// Result type alias for search operations
pub type Result<T> = std::result::Result<T, SearchError>;

/// Main error type for the search service
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter { name: String, message: String },

    #[error("Document source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl SearchError {
    /// Shorthand for an `InvalidParameter` error
    pub fn invalid_parameter(name: &str, message: impl Into<String>) -> Self {
        SearchError::InvalidParameter {
            name: name.to_string(),
            message: message.into(),
        }
    }

    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            SearchError::InvalidQuery(_) | SearchError::InvalidParameter { .. }
        )
    }

    /// Check if the document source failed
    pub fn is_unavailable(&self) -> bool {
        matches!(self, SearchError::SourceUnavailable(_))
    }
}
