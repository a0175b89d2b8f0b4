//! Storage slot trait abstraction.

use crate::storage::error::StorageError;
use async_trait::async_trait;

/// Trait for loading and saving one named durable slot.
///
/// Implementations provide a backend for persisting the serialized
/// collection as raw bytes. Serialization itself is handled by
/// [`SlotSerializer`](crate::storage::SlotSerializer).
#[async_trait(?Send)]
pub trait StorageSlot {
    /// Load the contents of a slot.
    ///
    /// Returns `Ok(None)` when the slot has never been written.
    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replace the contents of a slot.
    async fn store(&self, key: &str, data: Vec<u8>) -> Result<(), StorageError>;
}
