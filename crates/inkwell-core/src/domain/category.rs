use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Post category - one of a fixed set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    General,
    Technology,
    Lifestyle,
    Travel,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::General,
        Category::Technology,
        Category::Lifestyle,
        Category::Travel,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Technology => "technology",
            Category::Lifestyle => "lifestyle",
            Category::Travel => "travel",
        }
    }

    /// Human-facing label, as shown in the category picker.
    pub fn label(self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Technology => "Technology",
            Category::Lifestyle => "Lifestyle",
            Category::Travel => "Travel",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::UnknownCategory(wanted.to_string()))
    }
}
