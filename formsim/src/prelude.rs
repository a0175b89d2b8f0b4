//! Convenience re-exports for typical usage.
//!
//! ```ignore
//! use formsim::prelude::*;
//! ```

pub use crate::api::{ApiConfiguration, Operation, QuestionApi};
pub use crate::editor::{FormEditor, QuestionDraft, AUTOSAVE_QUIET_PERIOD};
pub use crate::error::{ApiError, ValidationError};
pub use crate::list::QuestionList;
pub use crate::model::{
    Question, QuestionId, QuestionKind, QuestionPatch, QuestionType, SelectOption, StoredQuestion,
};
pub use crate::notify::{Notifier, Toast, ToastKind, TOAST_DISMISS_AFTER};
pub use crate::providers::{
    RandomProvider, SeededRandomProvider, TaskProvider, ThreadRandomProvider, TimeProvider,
    TokioTaskProvider, TokioTimeProvider,
};
pub use crate::storage::{JsonSerializer, MemorySlot, SlotSerializer, StorageError, StorageSlot};
