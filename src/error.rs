//! Error types for the translate stage

use thiserror::Error;

/// Result type for translate operations
pub type Result<T> = std::result::Result<T, TranslateError>;

/// Errors raised by stage construction and execution
#[derive(Error, Debug)]
pub enum TranslateError {
    /// Stage configuration was rejected during construction
    #[error("{0}")]
    Config(String),

    /// Source field is absent or null and `ignore_missing` is disabled
    #[error("field [{0}] is missing or null, cannot be translated")]
    FieldMissing(String),

    /// Source field holds a value that is not a string
    #[error("field [{0}] has non-string values, only string values are supported")]
    NonStringValue(String),
}

impl TranslateError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
