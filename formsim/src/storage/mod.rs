//! Durable slot abstraction for the question collection.
//!
//! The entire collection lives under one named key, serialized as a JSON
//! array of flat records and rewritten wholesale on each mutation. The
//! [`StorageSlot`] trait is the seam a real backend would implement; the
//! in-memory implementation stands in for browser local storage.

mod error;
mod memory;
mod serializer;
mod slot;

pub use error::StorageError;
pub use memory::MemorySlot;
pub use serializer::{JsonSerializer, SlotSerializer};
pub use slot::StorageSlot;
