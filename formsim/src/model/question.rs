//! Question types and the stored record shape.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned by the store on first successful create.
///
/// A question has no id while it is still a client-side draft; every
/// operation after creation addresses the record by this identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    /// Wrap an already-generated identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Discriminant of the question tagged union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    /// Single-line text input.
    Text,
    /// Numeric input.
    Number,
    /// Dropdown with a fixed option list.
    Select,
    /// Multi-line text input.
    Textarea,
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            QuestionType::Text => "text",
            QuestionType::Number => "number",
            QuestionType::Select => "select",
            QuestionType::Textarea => "textarea",
        };
        write!(f, "{tag}")
    }
}

/// One entry of a select question's option list.
///
/// Value uniqueness within a question is expected but not enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Text shown to the respondent.
    pub label: String,
    /// Value submitted when the option is chosen.
    pub value: String,
}

impl SelectOption {
    /// Build an option from a label/value pair.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Variant-specific fields, discriminated by the serialized `"type"` tag.
///
/// The tag is flattened into the containing record so the storage shape stays
/// a flat map per question, matching the slot format described in the crate
/// docs: absent optional fields are simply omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QuestionKind {
    /// Single-line text with optional length bounds.
    #[serde(rename_all = "camelCase")]
    Text {
        /// Minimum accepted length, when constrained.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_length: Option<u32>,
        /// Maximum accepted length, when constrained.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_length: Option<u32>,
    },
    /// Numeric input with optional bounds.
    Number {
        /// Lower bound, when constrained.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        /// Upper bound, when constrained.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },
    /// Dropdown over an ordered option list.
    Select {
        /// The options, in insertion order.
        options: Vec<SelectOption>,
    },
    /// Multi-line text with an optional row count.
    Textarea {
        /// Rendered row count, when specified.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        rows: Option<u32>,
    },
}

impl QuestionKind {
    /// The discriminant of this variant.
    pub fn tag(&self) -> QuestionType {
        match self {
            QuestionKind::Text { .. } => QuestionType::Text,
            QuestionKind::Number { .. } => QuestionType::Number,
            QuestionKind::Select { .. } => QuestionType::Select,
            QuestionKind::Textarea { .. } => QuestionType::Textarea,
        }
    }
}

/// A question as authored by the builder, before or after storage.
///
/// Common fields sit alongside the flattened [`QuestionKind`]; the serialized
/// form is one flat map with a `"type"` tag, e.g.
/// `{"type":"select","label":"Color","required":true,"options":[...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// The question title shown to respondents. Non-empty for validity.
    pub label: String,
    /// Whether an answer is mandatory.
    #[serde(default)]
    pub required: bool,
    /// Whether the question is hidden from respondents.
    #[serde(default)]
    pub hidden: bool,
    /// Optional free-text helper shown under the field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional placeholder rendered inside the empty field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Variant-specific fields and the `"type"` tag.
    #[serde(flatten)]
    pub kind: QuestionKind,
}

impl Question {
    /// The discriminant of this question's variant.
    pub fn question_type(&self) -> QuestionType {
        self.kind.tag()
    }
}

/// A question as it lives in the durable slot: the authored fields plus the
/// store-assigned identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredQuestion {
    /// Store-assigned identifier.
    pub id: QuestionId,
    /// ISO-8601 creation timestamp, assigned on create.
    pub created_at: String,
    /// The authored question.
    #[serde(flatten)]
    pub question: Question,
}
