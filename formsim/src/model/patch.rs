//! Shallow-merge update payloads.

use crate::model::{Question, QuestionKind, QuestionType, SelectOption};

/// A partial update applied to a stored question.
///
/// Shallow-merge semantics: `Some` overwrites the stored field, `None` leaves
/// it at its prior value. A patch cannot clear an optional field back to
/// absent; callers that need that send the full replacement payload instead.
///
/// When the patch carries a `question_type` differing from the stored
/// record's, the variant is rebuilt from the patch's own fields — stale
/// fields of the old variant do not survive the type change. Variant fields
/// that do not belong to the resulting variant are ignored.
#[derive(Debug, Clone, Default)]
pub struct QuestionPatch {
    /// New label, if changed.
    pub label: Option<String>,
    /// New required flag, if changed.
    pub required: Option<bool>,
    /// New hidden flag, if changed.
    pub hidden: Option<bool>,
    /// New helper text, if changed.
    pub description: Option<String>,
    /// New placeholder, if changed.
    pub placeholder: Option<String>,
    /// New variant tag, if the question changes type.
    pub question_type: Option<QuestionType>,
    /// Text: new minimum length.
    pub min_length: Option<u32>,
    /// Text: new maximum length.
    pub max_length: Option<u32>,
    /// Number: new lower bound.
    pub min: Option<f64>,
    /// Number: new upper bound.
    pub max: Option<f64>,
    /// Textarea: new row count.
    pub rows: Option<u32>,
    /// Select: replacement option list.
    pub options: Option<Vec<SelectOption>>,
}

impl QuestionPatch {
    /// A patch that replaces every field of the stored record with the given
    /// question's fields.
    ///
    /// This is what the edit controller sends on save: the committed payload
    /// contains only the fields relevant to the question's current type, so
    /// applying it also rebuilds the variant when the type changed.
    pub fn from_question(question: &Question) -> Self {
        let mut patch = Self {
            label: Some(question.label.clone()),
            required: Some(question.required),
            hidden: Some(question.hidden),
            description: question.description.clone(),
            placeholder: question.placeholder.clone(),
            question_type: Some(question.kind.tag()),
            ..Self::default()
        };
        match &question.kind {
            QuestionKind::Text {
                min_length,
                max_length,
            } => {
                patch.min_length = *min_length;
                patch.max_length = *max_length;
            }
            QuestionKind::Number { min, max } => {
                patch.min = *min;
                patch.max = *max;
            }
            QuestionKind::Select { options } => {
                patch.options = Some(options.clone());
            }
            QuestionKind::Textarea { rows } => {
                patch.rows = *rows;
            }
        }
        patch
    }

    /// Shallow-merge this patch into a stored question.
    pub fn apply(&self, question: &mut Question) {
        if let Some(label) = &self.label {
            question.label = label.clone();
        }
        if let Some(required) = self.required {
            question.required = required;
        }
        if let Some(hidden) = self.hidden {
            question.hidden = hidden;
        }
        if let Some(description) = &self.description {
            question.description = Some(description.clone());
        }
        if let Some(placeholder) = &self.placeholder {
            question.placeholder = Some(placeholder.clone());
        }

        match self.question_type {
            Some(tag) if tag != question.kind.tag() => {
                question.kind = self.build_kind(tag);
            }
            _ => self.merge_kind(&mut question.kind),
        }
    }

    /// Build a fresh variant of the given type from the patch's fields alone.
    fn build_kind(&self, tag: QuestionType) -> QuestionKind {
        match tag {
            QuestionType::Text => QuestionKind::Text {
                min_length: self.min_length,
                max_length: self.max_length,
            },
            QuestionType::Number => QuestionKind::Number {
                min: self.min,
                max: self.max,
            },
            QuestionType::Select => QuestionKind::Select {
                options: self.options.clone().unwrap_or_default(),
            },
            QuestionType::Textarea => QuestionKind::Textarea { rows: self.rows },
        }
    }

    /// Merge matching variant fields into the current variant, ignoring
    /// fields that belong to a different one.
    fn merge_kind(&self, kind: &mut QuestionKind) {
        match kind {
            QuestionKind::Text {
                min_length,
                max_length,
            } => {
                if self.min_length.is_some() {
                    *min_length = self.min_length;
                }
                if self.max_length.is_some() {
                    *max_length = self.max_length;
                }
            }
            QuestionKind::Number { min, max } => {
                if self.min.is_some() {
                    *min = self.min;
                }
                if self.max.is_some() {
                    *max = self.max;
                }
            }
            QuestionKind::Select { options } => {
                if let Some(replacement) = &self.options {
                    *options = replacement.clone();
                }
            }
            QuestionKind::Textarea { rows } => {
                if self.rows.is_some() {
                    *rows = self.rows;
                }
            }
        }
    }
}
