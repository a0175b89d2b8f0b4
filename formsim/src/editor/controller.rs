//! Debounced form edit controller.

use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::api::QuestionApi;
use crate::editor::draft::QuestionDraft;
use crate::model::{QuestionId, QuestionPatch, QuestionType, StoredQuestion};
use crate::notify::Notifier;
use crate::providers::{RandomProvider, TaskProvider, TimeProvider};
use crate::storage::StorageSlot;

/// Quiet period after the last qualifying edit before an autosave fires.
pub const AUTOSAVE_QUIET_PERIOD: Duration = Duration::from_millis(1000);

struct EditorInner<T, R, S, K> {
    api: Rc<QuestionApi<T, R, S>>,
    time: T,
    tasks: K,
    notifier: Notifier<T>,
    draft: RefCell<QuestionDraft>,
    /// Id of the record being edited; `None` while authoring a new draft.
    editing: RefCell<Option<QuestionId>>,
    saving: Cell<bool>,
    /// Edit generation. Each change bumps it; a pending autosave only fires
    /// if its generation is still current, which is what makes the debounce
    /// trailing-edge.
    epoch: Cell<u64>,
}

/// Controller for the draft of one question being created or edited.
///
/// Every field change updates the draft in place and, when the draft passes
/// the validity gate, schedules a save after [`AUTOSAVE_QUIET_PERIOD`] of
/// quiet; each new change supersedes the pending one, so a burst of edits
/// persists exactly once with the final draft. Invalid changes surface a
/// validation toast and schedule nothing. [`FormEditor::submit`] bypasses
/// the debounce and saves immediately.
///
/// The first successful save assigns the record's id to the editor, so
/// subsequent saves update the same record instead of creating duplicates.
/// Submits while a save is in flight are ignored rather than raced.
///
/// Handles are cheap to clone and share one state; the background autosave
/// task holds such a clone.
pub struct FormEditor<T, R, S, K> {
    inner: Rc<EditorInner<T, R, S, K>>,
}

impl<T, R, S, K> Clone for FormEditor<T, R, S, K> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T, R, S, K> FormEditor<T, R, S, K>
where
    T: TimeProvider + 'static,
    R: RandomProvider + 'static,
    S: StorageSlot + 'static,
    K: TaskProvider + 'static,
{
    /// Create an editor with a blank draft (authoring a new question).
    pub fn new(api: Rc<QuestionApi<T, R, S>>, time: T, tasks: K, notifier: Notifier<T>) -> Self {
        Self {
            inner: Rc::new(EditorInner {
                api,
                time,
                tasks,
                notifier,
                draft: RefCell::new(QuestionDraft::default()),
                editing: RefCell::new(None),
                saving: Cell::new(false),
                epoch: Cell::new(0),
            }),
        }
    }

    /// Load an existing record for editing; saves now update that record.
    ///
    /// Cancels any pending autosave of the previous draft.
    pub fn load(&self, record: &StoredQuestion) {
        self.bump_epoch();
        *self.inner.draft.borrow_mut() = QuestionDraft::from_question(&record.question);
        *self.inner.editing.borrow_mut() = Some(record.id.clone());
    }

    /// Discard the draft and start over blank.
    pub fn reset(&self) {
        self.bump_epoch();
        *self.inner.draft.borrow_mut() = QuestionDraft::default();
        *self.inner.editing.borrow_mut() = None;
    }

    /// Read access to the current draft.
    pub fn draft(&self) -> Ref<'_, QuestionDraft> {
        self.inner.draft.borrow()
    }

    /// Id of the record this editor updates, once one exists.
    pub fn editing_id(&self) -> Option<QuestionId> {
        self.inner.editing.borrow().clone()
    }

    /// Whether a save is currently in flight.
    pub fn is_saving(&self) -> bool {
        self.inner.saving.get()
    }

    /// Set the question label.
    pub fn set_label(&self, label: impl Into<String>) {
        self.inner.draft.borrow_mut().label = label.into();
        self.after_change();
    }

    /// Switch the question type. Inactive variants' fields stay in the draft
    /// for round-tripping; only the committed payload narrows.
    pub fn set_question_type(&self, question_type: QuestionType) {
        self.inner.draft.borrow_mut().question_type = question_type;
        self.after_change();
    }

    /// Set the required flag.
    pub fn set_required(&self, required: bool) {
        self.inner.draft.borrow_mut().required = required;
        self.after_change();
    }

    /// Set the hidden flag.
    pub fn set_hidden(&self, hidden: bool) {
        self.inner.draft.borrow_mut().hidden = hidden;
        self.after_change();
    }

    /// Set the helper text. An empty string commits as absent.
    pub fn set_description(&self, description: impl Into<String>) {
        self.inner.draft.borrow_mut().description = description.into();
        self.after_change();
    }

    /// Set the placeholder. An empty string commits as absent.
    pub fn set_placeholder(&self, placeholder: impl Into<String>) {
        self.inner.draft.borrow_mut().placeholder = placeholder.into();
        self.after_change();
    }

    /// Set the minimum text length.
    pub fn set_min_length(&self, min_length: Option<u32>) {
        self.inner.draft.borrow_mut().min_length = min_length;
        self.after_change();
    }

    /// Set the maximum text length.
    pub fn set_max_length(&self, max_length: Option<u32>) {
        self.inner.draft.borrow_mut().max_length = max_length;
        self.after_change();
    }

    /// Set the numeric lower bound.
    pub fn set_min(&self, min: Option<f64>) {
        self.inner.draft.borrow_mut().min = min;
        self.after_change();
    }

    /// Set the numeric upper bound.
    pub fn set_max(&self, max: Option<f64>) {
        self.inner.draft.borrow_mut().max = max;
        self.after_change();
    }

    /// Set the textarea row count.
    pub fn set_rows(&self, rows: Option<u32>) {
        self.inner.draft.borrow_mut().rows = rows;
        self.after_change();
    }

    /// Append a blank option row, returning its index.
    pub fn add_option(&self) -> usize {
        let index = self.inner.draft.borrow_mut().add_option();
        self.after_change();
        index
    }

    /// Remove the option at the given index.
    pub fn remove_option(&self, index: usize) {
        if self.inner.draft.borrow_mut().remove_option(index) {
            self.after_change();
        }
    }

    /// Edit the label of the option at the given index.
    pub fn set_option_label(&self, index: usize, label: impl Into<String>) {
        if self.inner.draft.borrow_mut().set_option_label(index, label) {
            self.after_change();
        }
    }

    /// Edit the value of the option at the given index.
    pub fn set_option_value(&self, index: usize, value: impl Into<String>) {
        if self.inner.draft.borrow_mut().set_option_value(index, value) {
            self.after_change();
        }
    }

    /// Explicit submit: cancel any pending autosave and save the current
    /// draft immediately. Ignored while another save is in flight.
    pub async fn submit(&self) {
        if self.inner.saving.get() {
            tracing::debug!("submit ignored: a save is already in flight");
            return;
        }
        self.bump_epoch();
        self.save().await;
    }

    /// Every change supersedes the pending autosave; valid drafts schedule a
    /// fresh one, invalid drafts surface the validation failure instead.
    fn after_change(&self) {
        let epoch = self.bump_epoch();

        let validation = self.inner.draft.borrow().validate();
        if let Err(err) = validation {
            self.inner.notifier.error(format!("Cannot save question: {err}"));
            return;
        }

        let editor = self.clone();
        self.inner.tasks.spawn_task("debounced-autosave", async move {
            editor.autosave(epoch).await;
        });
    }

    fn bump_epoch(&self) -> u64 {
        let epoch = self.inner.epoch.get() + 1;
        self.inner.epoch.set(epoch);
        epoch
    }

    /// Body of the debounce task: wait out the quiet period, give way to any
    /// in-flight save, and fire only if no newer change superseded us.
    async fn autosave(&self, epoch: u64) {
        self.inner.time.sleep(AUTOSAVE_QUIET_PERIOD).await;
        if self.inner.epoch.get() != epoch {
            return;
        }
        while self.inner.saving.get() {
            self.inner.time.sleep(AUTOSAVE_QUIET_PERIOD).await;
            if self.inner.epoch.get() != epoch {
                return;
            }
        }
        self.save().await;
    }

    /// Validate, build the committed payload, and persist it.
    ///
    /// The draft is re-validated here so a draft that turned invalid after
    /// an autosave was scheduled still never reaches the persistence layer.
    async fn save(&self) {
        let payload = {
            match self.inner.draft.borrow().build_payload() {
                Ok(payload) => payload,
                Err(err) => {
                    self.inner
                        .notifier
                        .error(format!("Cannot save question: {err}"));
                    return;
                }
            }
        };

        self.inner.saving.set(true);
        let editing = self.inner.editing.borrow().clone();
        let result = match editing {
            Some(id) => {
                self.inner
                    .api
                    .update_question(&id, QuestionPatch::from_question(&payload))
                    .await
            }
            None => self.inner.api.add_question(payload).await,
        };

        match result {
            Ok(record) => {
                *self.inner.editing.borrow_mut() = Some(record.id.clone());
                self.inner.notifier.success("Question saved successfully");
            }
            Err(err) => {
                self.inner
                    .notifier
                    .error(format!("Failed to save question: {err}"));
            }
        }
        self.inner.saving.set(false);
    }
}
