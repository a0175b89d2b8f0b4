//! Storage error types.

use thiserror::Error;

/// Errors that can occur reading, writing, or (de)serializing the slot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Serialization or deserialization of the slot contents failed.
    ///
    /// Surfaces corrupt stored data as well as unserializable payloads.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The storage backend rejected the operation.
    #[error("storage operation failed: {0}")]
    OperationFailed(String),
}
