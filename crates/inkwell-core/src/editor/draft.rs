use chrono::{DateTime, SecondsFormat, Utc};

use super::FieldErrors;
use super::validator::{
    ValidationError, validate_category, validate_content, validate_tags, validate_title,
};
use crate::domain::{Category, Field, FieldMap, FieldValue, Post};

/// Working copy of a post that has not been published yet.
///
/// Errors are only recorded when a field is blurred, when an already
/// touched field changes again, or on submit. A first edit of an untouched
/// field never surfaces an error by itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    title: String,
    content: String,
    tags: Vec<String>,
    category: Category,
    touched: FieldMap<bool>,
    errors: FieldErrors,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched[field]
    }

    /// The error currently shown for `field`, if any.
    pub fn error(&self, field: Field) -> Option<ValidationError> {
        self.errors[field]
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Apply a value reported by a field widget.
    pub fn change(&mut self, value: FieldValue) {
        let field = value.field();
        let was_touched = self.touched.set(field, true);

        match value {
            FieldValue::Title(title) => self.title = title,
            FieldValue::Content(content) => self.content = content,
            FieldValue::Tags(tags) => self.tags = tags,
            FieldValue::Category(category) => self.category = category,
        }

        if was_touched {
            self.revalidate(field);
        }

        tracing::debug!(
            field = %field,
            was_touched,
            error = ?self.errors[field],
            "Draft field changed"
        );
    }

    /// The widget for `field` lost focus.
    pub fn blur(&mut self, field: Field) {
        self.touched.set(field, true);
        self.revalidate(field);
        tracing::debug!(field = %field, error = ?self.errors[field], "Draft field blurred");
    }

    /// Add a tag through the tag input. Blank labels and duplicates leave
    /// the tag list unchanged but still count as an edit.
    pub fn add_tag(&mut self, label: &str) {
        let label = label.trim();
        let mut tags = self.tags.clone();
        if !label.is_empty() && !tags.iter().any(|tag| tag == label) {
            tags.push(label.to_string());
        }
        self.change(FieldValue::Tags(tags));
    }

    /// Remove a tag through the tag input.
    pub fn remove_tag(&mut self, label: &str) {
        let label = label.trim();
        let tags = self
            .tags
            .iter()
            .filter(|tag| tag.as_str() != label)
            .cloned()
            .collect();
        self.change(FieldValue::Tags(tags));
    }

    /// Validate every field, replacing the whole error map.
    ///
    /// Returns `true` when the draft is ready to publish.
    pub fn validate_all(&mut self) -> bool {
        let errors = FieldErrors::from_fn(|field| self.check(field));
        self.errors = errors;
        self.errors.is_clean()
    }

    /// Build the post this draft describes.
    pub fn to_post(&self, created_at: DateTime<Utc>) -> Post {
        Post {
            id: None,
            title: self.title.clone(),
            content: self.content.clone(),
            author: None,
            date: None,
            category: self.category,
            tags: self.tags.clone(),
            timestamp: Some(created_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
            published: true,
        }
    }

    /// Back to the empty initial state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn revalidate(&mut self, field: Field) {
        let error = self.check(field);
        self.errors.set(field, error);
    }

    fn check(&self, field: Field) -> Option<ValidationError> {
        match field {
            Field::Title => validate_title(&self.title),
            Field::Content => validate_content(&self.content),
            Field::Tags => validate_tags(&self.tags),
            Field::Category => validate_category(self.category),
        }
    }
}
