//! Error types for the contact book
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for contact book operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the contact book
#[derive(Error, Debug)]
pub enum Error {
    /// Contact store-related errors (read/write of the collection file)
    #[error("contact store error: {0}")]
    Store(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// No contact with the given name exists
    #[error("contact not found: {0}")]
    NotFound(String),

    /// Underlying filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a contact store error
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a "not found" error carrying the missing contact's name
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }
}

/// Helper for converting anyhow::Error to our Error type
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}
