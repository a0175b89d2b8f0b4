//! List controller over the stored question collection.

use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;

use crate::api::QuestionApi;
use crate::model::{Question, QuestionId, QuestionPatch, StoredQuestion};
use crate::notify::Notifier;
use crate::providers::{RandomProvider, TimeProvider};
use crate::storage::StorageSlot;

/// Owner of the authoritative in-memory copy of the collection.
///
/// All mutations route through the simulated API; after any successful
/// create, update, or delete the controller reloads the full collection
/// rather than patching its in-memory copy optimistically. A failed
/// mutation leaves the prior collection untouched and surfaces an error
/// toast.
///
/// At most one record is in the "being edited" state and at most one "being
/// created" state at a time; entering either leaves the other.
pub struct QuestionList<T, R, S> {
    api: Rc<QuestionApi<T, R, S>>,
    notifier: Notifier<T>,
    questions: RefCell<Vec<StoredQuestion>>,
    /// True until the first load resolves or fails.
    loading: Cell<bool>,
    editing: RefCell<Option<QuestionId>>,
    adding_new: Cell<bool>,
}

impl<T, R, S> QuestionList<T, R, S>
where
    T: TimeProvider,
    R: RandomProvider,
    S: StorageSlot,
{
    /// Create a list controller over the given API.
    pub fn new(api: Rc<QuestionApi<T, R, S>>, notifier: Notifier<T>) -> Self {
        Self {
            api,
            notifier,
            questions: RefCell::new(Vec::new()),
            loading: Cell::new(true),
            editing: RefCell::new(None),
            adding_new: Cell::new(false),
        }
    }

    /// The current in-memory collection.
    pub fn questions(&self) -> Ref<'_, Vec<StoredQuestion>> {
        self.questions.borrow()
    }

    /// Whether the initial load is still outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    /// Id of the record currently in the "being edited" view, if any.
    pub fn editing_id(&self) -> Option<QuestionId> {
        self.editing.borrow().clone()
    }

    /// Whether the "new question" view is open.
    pub fn is_adding_new(&self) -> bool {
        self.adding_new.get()
    }

    /// Open the "new question" view, closing any edit view.
    pub fn begin_create(&self) {
        self.adding_new.set(true);
        *self.editing.borrow_mut() = None;
    }

    /// Close the "new question" view.
    pub fn cancel_create(&self) {
        self.adding_new.set(false);
    }

    /// Open the edit view for one record, closing the "new question" view.
    pub fn begin_edit(&self, id: QuestionId) {
        *self.editing.borrow_mut() = Some(id);
        self.adding_new.set(false);
    }

    /// Close the edit view.
    pub fn cancel_edit(&self) {
        *self.editing.borrow_mut() = None;
    }

    /// Fetch the full collection into memory.
    ///
    /// On failure the prior collection stays as-is and an error toast is
    /// shown. Clears the loading indicator either way.
    pub async fn load(&self) {
        match self.api.get_questions().await {
            Ok(questions) => {
                *self.questions.borrow_mut() = questions;
            }
            Err(err) => {
                tracing::debug!("load failed: {err}");
                self.notifier.error("Failed to load questions");
            }
        }
        self.loading.set(false);
    }

    /// Create a question, reload, and move focus to editing the new record.
    pub async fn create(&self, question: Question) {
        match self.api.add_question(question).await {
            Ok(record) => {
                self.load().await;
                self.adding_new.set(false);
                *self.editing.borrow_mut() = Some(record.id.clone());
                self.notifier.success("Question created successfully");
            }
            Err(err) => {
                tracing::debug!("create failed: {err}");
                self.notifier.error("Failed to create question");
            }
        }
    }

    /// Update a record and reload.
    pub async fn update(&self, id: &QuestionId, patch: QuestionPatch) {
        match self.api.update_question(id, patch).await {
            Ok(_) => {
                self.load().await;
                self.notifier.success("Question updated successfully");
            }
            Err(err) => {
                tracing::debug!("update failed: {err}");
                self.notifier.error("Failed to update question");
            }
        }
    }

    /// Delete a record and reload.
    pub async fn delete(&self, id: &QuestionId) {
        match self.api.delete_question(id).await {
            Ok(()) => {
                self.load().await;
                self.notifier.success("Question deleted successfully");
            }
            Err(err) => {
                tracing::debug!("delete failed: {err}");
                self.notifier.error("Failed to delete question");
            }
        }
    }
}
