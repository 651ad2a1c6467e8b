use std::fmt;

use super::ValidationError;
use crate::domain::{Field, FieldMap};

/// Current validation message per field. `None` means valid, or not yet
/// checked.
pub type FieldErrors = FieldMap<Option<ValidationError>>;

impl FieldMap<Option<ValidationError>> {
    pub fn is_clean(&self) -> bool {
        self.iter().all(|(_, error)| error.is_none())
    }

    /// Fields that currently carry an error, in form order.
    pub fn failures(&self) -> impl Iterator<Item = (Field, ValidationError)> + '_ {
        self.iter()
            .filter_map(|(field, error)| error.map(|error| (field, error)))
    }
}

impl fmt::Display for FieldMap<Option<ValidationError>> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, error) in self.failures() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {error}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_failures_in_form_order() {
        let mut errors = FieldErrors::default();
        errors.set(Field::Tags, Some(ValidationError::TagsMissing));
        errors.set(Field::Title, Some(ValidationError::TitleTooShort));

        assert!(!errors.is_clean());
        assert_eq!(
            errors.to_string(),
            "title: Title must be at least 5 characters; tags: At least one tag is required"
        );
    }
}
