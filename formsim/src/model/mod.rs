//! Question entity model.
//!
//! The model layer defines the closed set of question variants, the stored
//! record shape that lives in the durable slot, and the shallow-merge patch
//! applied by updates. Variant-specific fields live inside [`QuestionKind`],
//! a tagged union discriminated by `"type"`, so invalid field/type
//! combinations are unrepresentable.

mod patch;
mod question;

pub use patch::QuestionPatch;
pub use question::{
    Question, QuestionId, QuestionKind, QuestionType, SelectOption, StoredQuestion,
};
