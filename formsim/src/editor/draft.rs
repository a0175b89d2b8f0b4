//! Mutable form state for one question.

use crate::error::ValidationError;
use crate::model::{Question, QuestionKind, QuestionType, SelectOption};

/// The in-progress, not-yet-committed state of a question being authored.
///
/// Unlike [`Question`], the draft keeps the fields of every variant
/// simultaneously: switching the type to `number` leaves `min_length` and
/// `max_length` in place so they reappear if the user switches back. Only
/// [`QuestionDraft::build_payload`] narrows the draft down to the active
/// variant.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionDraft {
    /// Question title. Must be non-empty to pass the validity gate.
    pub label: String,
    /// The currently selected variant.
    pub question_type: QuestionType,
    /// Whether an answer is mandatory.
    pub required: bool,
    /// Whether the question is hidden from respondents.
    pub hidden: bool,
    /// Helper text; empty means absent in the committed payload.
    pub description: String,
    /// Placeholder; empty means absent in the committed payload.
    pub placeholder: String,
    /// Text: minimum accepted length.
    pub min_length: Option<u32>,
    /// Text: maximum accepted length.
    pub max_length: Option<u32>,
    /// Number: lower bound.
    pub min: Option<f64>,
    /// Number: upper bound.
    pub max: Option<f64>,
    /// Textarea: rendered row count.
    pub rows: Option<u32>,
    /// Select: the option list, ordered and mutable.
    pub options: Vec<SelectOption>,
}

impl Default for QuestionDraft {
    fn default() -> Self {
        Self {
            label: String::new(),
            question_type: QuestionType::Text,
            required: false,
            hidden: false,
            description: String::new(),
            placeholder: String::new(),
            min_length: None,
            max_length: None,
            min: None,
            max: None,
            rows: None,
            options: Vec::new(),
        }
    }
}

impl QuestionDraft {
    /// Load a stored question into a draft for editing.
    pub fn from_question(question: &Question) -> Self {
        let mut draft = Self {
            label: question.label.clone(),
            question_type: question.kind.tag(),
            required: question.required,
            hidden: question.hidden,
            description: question.description.clone().unwrap_or_default(),
            placeholder: question.placeholder.clone().unwrap_or_default(),
            ..Self::default()
        };
        match &question.kind {
            QuestionKind::Text {
                min_length,
                max_length,
            } => {
                draft.min_length = *min_length;
                draft.max_length = *max_length;
            }
            QuestionKind::Number { min, max } => {
                draft.min = *min;
                draft.max = *max;
            }
            QuestionKind::Select { options } => {
                draft.options = options.clone();
            }
            QuestionKind::Textarea { rows } => {
                draft.rows = *rows;
            }
        }
        draft
    }

    /// Append a blank option row, returning its index.
    pub fn add_option(&mut self) -> usize {
        self.options.push(SelectOption::default());
        self.options.len() - 1
    }

    /// Remove the option at the given index. Returns false when the index is
    /// out of bounds.
    pub fn remove_option(&mut self, index: usize) -> bool {
        if index < self.options.len() {
            self.options.remove(index);
            true
        } else {
            false
        }
    }

    /// Set the label of the option at the given index.
    pub fn set_option_label(&mut self, index: usize, label: impl Into<String>) -> bool {
        match self.options.get_mut(index) {
            Some(option) => {
                option.label = label.into();
                true
            }
            None => false,
        }
    }

    /// Set the value of the option at the given index.
    pub fn set_option_value(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.options.get_mut(index) {
            Some(option) => {
                option.value = value.into();
                true
            }
            None => false,
        }
    }

    /// The validity gate checked before any save attempt.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.label.is_empty() {
            return Err(ValidationError::EmptyLabel);
        }
        match self.question_type {
            QuestionType::Select if self.options.is_empty() => {
                return Err(ValidationError::NoOptions);
            }
            QuestionType::Text => {
                if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
                    if min > max {
                        return Err(ValidationError::LengthBoundsReversed { min, max });
                    }
                }
            }
            QuestionType::Number => {
                if let (Some(min), Some(max)) = (self.min, self.max) {
                    if min > max {
                        return Err(ValidationError::NumericBoundsReversed { min, max });
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Commit the draft into a typed payload.
    ///
    /// Validates first, then narrows to the fields relevant to the current
    /// type: a draft switched from `text` to `number` keeps its length
    /// bounds internally, but the payload carries only the numeric bounds.
    /// Empty helper text and placeholder are committed as absent.
    pub fn build_payload(&self) -> Result<Question, ValidationError> {
        self.validate()?;

        let kind = match self.question_type {
            QuestionType::Text => QuestionKind::Text {
                min_length: self.min_length,
                max_length: self.max_length,
            },
            QuestionType::Number => QuestionKind::Number {
                min: self.min,
                max: self.max,
            },
            QuestionType::Select => QuestionKind::Select {
                options: self.options.clone(),
            },
            QuestionType::Textarea => QuestionKind::Textarea { rows: self.rows },
        };

        Ok(Question {
            label: self.label.clone(),
            required: self.required,
            hidden: self.hidden,
            description: none_if_empty(&self.description),
            placeholder: none_if_empty(&self.placeholder),
            kind,
        })
    }
}

fn none_if_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_draft_fails_the_gate() {
        let draft = QuestionDraft::default();
        assert_eq!(draft.validate(), Err(ValidationError::EmptyLabel));
    }

    #[test]
    fn select_without_options_fails_the_gate() {
        let draft = QuestionDraft {
            label: "Color".to_string(),
            question_type: QuestionType::Select,
            ..QuestionDraft::default()
        };
        assert_eq!(draft.validate(), Err(ValidationError::NoOptions));
    }

    #[test]
    fn reversed_length_bounds_fail_the_gate() {
        let draft = QuestionDraft {
            label: "Name".to_string(),
            min_length: Some(10),
            max_length: Some(2),
            ..QuestionDraft::default()
        };
        assert_eq!(
            draft.validate(),
            Err(ValidationError::LengthBoundsReversed { min: 10, max: 2 })
        );
    }

    #[test]
    fn reversed_numeric_bounds_fail_the_gate() {
        let draft = QuestionDraft {
            label: "Age".to_string(),
            question_type: QuestionType::Number,
            min: Some(100.0),
            max: Some(0.0),
            ..QuestionDraft::default()
        };
        assert_eq!(
            draft.validate(),
            Err(ValidationError::NumericBoundsReversed {
                min: 100.0,
                max: 0.0,
            })
        );
    }

    #[test]
    fn payload_narrows_to_the_active_variant() {
        // A draft that was once a text question, now numeric.
        let draft = QuestionDraft {
            label: "Age".to_string(),
            question_type: QuestionType::Number,
            min_length: Some(1),
            max_length: Some(80),
            min: Some(0.0),
            max: Some(120.0),
            ..QuestionDraft::default()
        };

        let payload = draft.build_payload().unwrap();
        assert_eq!(
            payload.kind,
            QuestionKind::Number {
                min: Some(0.0),
                max: Some(120.0),
            }
        );
    }

    #[test]
    fn type_switch_round_trips_inactive_fields() {
        let mut draft = QuestionDraft {
            label: "Name".to_string(),
            min_length: Some(2),
            ..QuestionDraft::default()
        };

        draft.question_type = QuestionType::Number;
        assert_eq!(draft.min_length, Some(2));

        draft.question_type = QuestionType::Text;
        let payload = draft.build_payload().unwrap();
        assert_eq!(
            payload.kind,
            QuestionKind::Text {
                min_length: Some(2),
                max_length: None,
            }
        );
    }

    #[test]
    fn empty_helper_text_is_committed_as_absent() {
        let draft = QuestionDraft {
            label: "Name".to_string(),
            ..QuestionDraft::default()
        };

        let payload = draft.build_payload().unwrap();
        assert_eq!(payload.description, None);
        assert_eq!(payload.placeholder, None);
    }

    #[test]
    fn option_edits_address_rows_by_index() {
        let mut draft = QuestionDraft {
            label: "Color".to_string(),
            question_type: QuestionType::Select,
            ..QuestionDraft::default()
        };

        let first = draft.add_option();
        let second = draft.add_option();
        assert!(draft.set_option_label(first, "Red"));
        assert!(draft.set_option_value(first, "red"));
        assert!(draft.set_option_label(second, "Blue"));
        assert!(draft.set_option_value(second, "blue"));

        assert!(draft.remove_option(second));
        assert!(!draft.remove_option(5));
        assert_eq!(draft.options, vec![SelectOption::new("Red", "red")]);
    }

    #[test]
    fn round_trips_a_stored_question() {
        let question = Question {
            label: "Color".to_string(),
            required: true,
            hidden: false,
            description: Some("pick one".to_string()),
            placeholder: None,
            kind: QuestionKind::Select {
                options: vec![SelectOption::new("Red", "red")],
            },
        };

        let draft = QuestionDraft::from_question(&question);
        assert_eq!(draft.build_payload().unwrap(), question);
    }
}
