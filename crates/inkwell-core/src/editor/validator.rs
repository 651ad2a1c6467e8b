//! Field validation rules.

use thiserror::Error;

use crate::domain::{Category, Field, FieldValue};

pub const TITLE_MIN_CHARS: usize = 5;
pub const CONTENT_MIN_CHARS: usize = 100;

/// A field-level validation failure. The display text is the message shown
/// beneath the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title must be at least 5 characters")]
    TitleTooShort,

    #[error("Content must be at least 100 characters")]
    ContentTooShort,

    #[error("At least one tag is required")]
    TagsMissing,
}

impl ValidationError {
    pub fn field(self) -> Field {
        match self {
            ValidationError::TitleTooShort => Field::Title,
            ValidationError::ContentTooShort => Field::Content,
            ValidationError::TagsMissing => Field::Tags,
        }
    }
}

/// Validate a single field value. `None` means valid.
pub fn validate(value: &FieldValue) -> Option<ValidationError> {
    match value {
        FieldValue::Title(title) => validate_title(title),
        FieldValue::Content(content) => validate_content(content),
        FieldValue::Tags(tags) => validate_tags(tags),
        FieldValue::Category(category) => validate_category(*category),
    }
}

pub fn validate_title(title: &str) -> Option<ValidationError> {
    (trimmed_len(title) < TITLE_MIN_CHARS).then_some(ValidationError::TitleTooShort)
}

pub fn validate_content(content: &str) -> Option<ValidationError> {
    (trimmed_len(content) < CONTENT_MIN_CHARS).then_some(ValidationError::ContentTooShort)
}

pub fn validate_tags(tags: &[String]) -> Option<ValidationError> {
    tags.is_empty().then_some(ValidationError::TagsMissing)
}

pub fn validate_category(_category: Category) -> Option<ValidationError> {
    None
}

fn trimmed_len(value: &str) -> usize {
    value.trim().chars().count()
}
