//! Core error types for the ZenTime Exchange.
//!
//! This module defines storage-agnostic error types. Store-specific errors
//! (filesystem, in-memory) are converted to these types by the store layer.

use thiserror::Error;
use zentime_ai::AiError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the exchange core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage operation failed: {0}")]
    Storage(#[from] StorageError),

    #[error("Input validation failed: {0}")]
    Validation(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("AI gateway error: {0}")]
    Gateway(#[from] AiError),

    #[error("Cannot {action} from the {from} state")]
    InvalidTransition {
        from: &'static str,
        action: &'static str,
    },

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Store-agnostic error type for key-value operations.
///
/// This enum uses `String` for all error details, allowing each store
/// implementation to convert its own errors into this format.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to read a stored value.
    #[error("Read failed: {0}")]
    ReadFailed(String),

    /// Failed to write a value.
    #[error("Write failed: {0}")]
    WriteFailed(String),

    /// A value could not be serialized or deserialized.
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
