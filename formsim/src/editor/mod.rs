//! Form edit controller.
//!
//! [`QuestionDraft`] is the mutable form state: it holds every variant's
//! fields at once so switching the type dropdown and back round-trips
//! values, while the committed payload carries only the active variant's
//! fields. [`FormEditor`] owns one draft, gates saves on validity, and
//! coalesces rapid edits into a single trailing-edge debounced autosave.

mod controller;
mod draft;

pub use controller::{FormEditor, AUTOSAVE_QUIET_PERIOD};
pub use draft::QuestionDraft;
