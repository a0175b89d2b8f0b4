//! Slot serialization abstraction.

use crate::storage::error::StorageError;
use serde::{Deserialize, Serialize};

/// Trait for serializing and deserializing slot contents.
///
/// This abstraction keeps the wire shape swappable; the JSON implementation
/// is the one the storage format is specified against.
pub trait SlotSerializer {
    /// Serialize a value to bytes.
    fn serialize<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, StorageError>;

    /// Deserialize a value from bytes.
    fn deserialize<T: for<'de> Deserialize<'de>>(&self, data: &[u8]) -> Result<T, StorageError>;
}

/// JSON slot serializer using serde_json.
///
/// Human-readable slot contents: a JSON array of flat question records.
#[derive(Debug, Clone, Default)]
pub struct JsonSerializer;

impl JsonSerializer {
    /// Create a new JSON serializer.
    pub fn new() -> Self {
        Self
    }
}

impl SlotSerializer for JsonSerializer {
    fn serialize<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, StorageError> {
        Ok(serde_json::to_vec(value)?)
    }

    fn deserialize<T: for<'de> Deserialize<'de>>(&self, data: &[u8]) -> Result<T, StorageError> {
        Ok(serde_json::from_slice(data)?)
    }
}
