//! Error types for deployment production

use thiserror::Error;

use crate::domain::ValidationError;

/// Errors that can occur while loading a manifest or producing a plan
#[derive(Debug, Error)]
pub enum ProducerError {
    /// Manifest violates a builder invariant
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Deserialization error
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for deployment production
pub type ProducerResult<T> = Result<T, ProducerError>;

impl From<std::io::Error> for ProducerError {
    fn from(err: std::io::Error) -> Self {
        ProducerError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ProducerError {
    fn from(err: serde_json::Error) -> Self {
        ProducerError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for ProducerError {
    fn from(err: serde_yaml::Error) -> Self {
        ProducerError::Deserialization(err.to_string())
    }
}
