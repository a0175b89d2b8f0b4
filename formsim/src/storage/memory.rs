//! In-memory slot implementation.

use crate::storage::error::StorageError;
use crate::storage::slot::StorageSlot;
use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// In-memory storage standing in for browser local storage.
///
/// Clones share the same underlying map, so an API instance and a test (or
/// two API instances with different configurations) can observe each other's
/// writes through cloned handles. Read/write counters are exposed so tests
/// can assert how often the slot was actually touched, e.g. that a debounced
/// burst of edits persisted exactly once.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    slots: Rc<RefCell<HashMap<String, Vec<u8>>>>,
    reads: Rc<Cell<usize>>,
    writes: Rc<Cell<usize>>,
}

impl MemorySlot {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful loads since creation.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    /// Number of stores since creation.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

#[async_trait(?Send)]
impl StorageSlot for MemorySlot {
    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        self.reads.set(self.reads.get() + 1);
        Ok(self.slots.borrow().get(key).cloned())
    }

    async fn store(&self, key: &str, data: Vec<u8>) -> Result<(), StorageError> {
        self.writes.set(self.writes.get() + 1);
        self.slots.borrow_mut().insert(key.to_string(), data);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unwritten_slot_loads_none() {
        let slot = MemorySlot::new();
        assert!(slot.load("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn store_then_load_round_trips() {
        let slot = MemorySlot::new();
        slot.store("key", b"payload".to_vec()).await.unwrap();

        let loaded = slot.load("key").await.unwrap();
        assert_eq!(loaded.as_deref(), Some(b"payload".as_slice()));
    }

    #[tokio::test]
    async fn clones_share_contents_and_counters() {
        let slot = MemorySlot::new();
        let other = slot.clone();

        other.store("key", b"shared".to_vec()).await.unwrap();

        assert_eq!(slot.load("key").await.unwrap().as_deref(), Some(b"shared".as_slice()));
        assert_eq!(slot.writes(), 1);
        assert_eq!(slot.reads(), 1);
    }

    #[tokio::test]
    async fn store_overwrites_wholesale() {
        let slot = MemorySlot::new();
        slot.store("key", b"first".to_vec()).await.unwrap();
        slot.store("key", b"second".to_vec()).await.unwrap();

        assert_eq!(slot.load("key").await.unwrap().as_deref(), Some(b"second".as_slice()));
    }
}
