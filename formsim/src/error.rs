//! Error types for the simulated form-builder backend.

use thiserror::Error;

use crate::api::Operation;
use crate::model::QuestionId;
use crate::storage::StorageError;

/// Errors surfaced by the simulated persistence API.
///
/// Every failure is local and recoverable: callers retry the same operation,
/// nothing is fatal to the process. Controllers catch these at the boundary
/// and convert them into user-visible toasts.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A deliberately injected backend failure.
    ///
    /// Fired with the configured probability before the operation touches
    /// storage, to exercise error-handling paths without a real unreliable
    /// backend.
    #[error("injected fault: failed to {operation}")]
    Injected {
        /// The operation that was made to fail.
        operation: Operation,
    },

    /// The durable slot could not be read, written, or (de)serialized.
    #[error("storage failed: {0}")]
    Storage(#[from] StorageError),

    /// An update addressed an id that is not in the collection.
    ///
    /// Only `update` raises this; `delete` is lenient and treats a missing
    /// id as a no-op.
    #[error("question not found: {0}")]
    NotFound(QuestionId),
}

/// Reasons a draft fails the validity gate and must not be persisted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The question label is empty.
    #[error("question label must not be empty")]
    EmptyLabel,

    /// A select question has no options.
    #[error("select questions need at least one option")]
    NoOptions,

    /// Text length bounds are reversed.
    #[error("minimum length {min} exceeds maximum length {max}")]
    LengthBoundsReversed {
        /// Configured minimum length.
        min: u32,
        /// Configured maximum length.
        max: u32,
    },

    /// Numeric bounds are reversed.
    #[error("minimum value {min} exceeds maximum value {max}")]
    NumericBoundsReversed {
        /// Configured minimum value.
        min: f64,
        /// Configured maximum value.
        max: f64,
    },
}
