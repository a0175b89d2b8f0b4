//! # Formsim
//!
//! Deterministic simulation of a form-builder persistence backend.
//!
//! Formsim implements the core of a questionnaire builder without the
//! rendering layer: a typed question model, a simulated persistence API with
//! randomized latency and injected failures, a form-edit controller with
//! debounced autosave, and a list controller that owns the displayed
//! collection. Timing and randomness flow through provider traits so the
//! whole stack runs deterministically under a paused clock in tests, and the
//! simulated API can later be swapped for a real network client without
//! touching caller code.
//!
//! ## Module Overview
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`model`] | Question tagged union, stored records, shallow-merge patches |
//! | [`providers`] | Injectable time, randomness, and task-spawning seams |
//! | [`storage`] | Durable slot abstraction and JSON serialization |
//! | [`api`] | `QuestionApi` persistence simulator |
//! | [`editor`] | Draft state and debounced form-edit controller |
//! | [`list`] | List controller over the stored collection |
//! | [`notify`] | Toast notifications with the auto-dismissal contract |
//!
//! ## Quick Start
//!
//! ```ignore
//! use formsim::prelude::*;
//! use std::rc::Rc;
//!
//! let api = Rc::new(QuestionApi::new(
//!     TokioTimeProvider::new(),
//!     ThreadRandomProvider::new(),
//!     MemorySlot::new(),
//!     ApiConfiguration::default(),
//! ));
//! let stored = api.add_question(question).await?;
//! ```
//!
//! ## Execution Model
//!
//! Single-threaded and cooperative: controllers are `!Send`, share state via
//! `Rc`/`RefCell`, and spawn background work with `spawn_local`. The backing
//! store is one logical slot rewritten wholesale on each mutation, so
//! concurrent writers race last-writer-wins; callers that need stronger
//! guarantees must serialize their mutations.

#![deny(missing_docs)]

pub mod api;
pub mod editor;
pub mod error;
pub mod list;
pub mod model;
pub mod notify;
pub mod prelude;
pub mod providers;
pub mod storage;

pub use api::{ApiConfiguration, Operation, QuestionApi};
pub use editor::{FormEditor, QuestionDraft, AUTOSAVE_QUIET_PERIOD};
pub use error::{ApiError, ValidationError};
pub use list::QuestionList;
pub use model::{
    Question, QuestionId, QuestionKind, QuestionPatch, QuestionType, SelectOption, StoredQuestion,
};
pub use notify::{Notifier, Toast, ToastKind, TOAST_DISMISS_AFTER};
pub use providers::{
    RandomProvider, SeededRandomProvider, TaskProvider, ThreadRandomProvider, TimeProvider,
    TokioTaskProvider, TokioTimeProvider,
};
pub use storage::{JsonSerializer, MemorySlot, SlotSerializer, StorageError, StorageSlot};
