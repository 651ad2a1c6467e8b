use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use super::Category;
use crate::error::DomainError;

/// The fields of the post editor form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Content,
    Tags,
    Category,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Title, Field::Content, Field::Tags, Field::Category];

    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Content => "content",
            Field::Tags => "tags",
            Field::Category => "category",
        }
    }

    const fn slot(self) -> usize {
        match self {
            Field::Title => 0,
            Field::Content => 1,
            Field::Tags => 2,
            Field::Category => 3,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Field::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::UnknownField(wanted.to_string()))
    }
}

/// A new value for one form field, as reported by its input widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Title(String),
    Content(String),
    Tags(Vec<String>),
    Category(Category),
}

impl FieldValue {
    pub fn field(&self) -> Field {
        match self {
            FieldValue::Title(_) => Field::Title,
            FieldValue::Content(_) => Field::Content,
            FieldValue::Tags(_) => Field::Tags,
            FieldValue::Category(_) => Field::Category,
        }
    }
}

/// Fixed-size map with one slot per [`Field`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap<T> {
    slots: [T; 4],
}

impl<T> FieldMap<T> {
    pub fn get(&self, field: Field) -> &T {
        &self.slots[field.slot()]
    }

    /// Store a value for `field`, returning the previous one.
    pub fn set(&mut self, field: Field, value: T) -> T {
        std::mem::replace(&mut self.slots[field.slot()], value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &T)> {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    /// Build a map by computing each slot from its field.
    pub fn from_fn(f: impl FnMut(Field) -> T) -> Self {
        Self {
            slots: Field::ALL.map(f),
        }
    }
}

impl<T> Index<Field> for FieldMap<T> {
    type Output = T;

    fn index(&self, field: Field) -> &T {
        self.get(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_map_slots_are_independent() {
        let mut touched: FieldMap<bool> = FieldMap::default();
        assert!(!touched.set(Field::Tags, true));

        assert!(touched[Field::Tags]);
        assert!(!touched[Field::Title]);
        assert!(!touched[Field::Content]);
        assert!(!touched[Field::Category]);
    }

    #[test]
    fn test_from_fn_visits_fields_in_order() {
        let names = FieldMap::from_fn(Field::name);
        let collected: Vec<_> = names.iter().map(|(_, name)| *name).collect();
        assert_eq!(collected, ["title", "content", "tags", "category"]);
    }

    #[test]
    fn test_unknown_field_name_is_rejected() {
        assert_eq!("Content".parse::<Field>().unwrap(), Field::Content);
        assert!(matches!(
            "author".parse::<Field>(),
            Err(DomainError::UnknownField(_))
        ));
    }

    #[test]
    fn test_value_knows_its_field() {
        assert_eq!(FieldValue::Tags(vec![]).field(), Field::Tags);
        assert_eq!(
            FieldValue::Category(Category::Travel).field(),
            Field::Category
        );
    }
}
