use serde::{Deserialize, Serialize};

use super::Category;

/// Post entity - a published blog post.
///
/// Posts are never modified after they reach the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Assigned by whoever seeds the store. Posts published through the
    /// editor carry no id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Publication date as a calendar date, e.g. `2024-03-15`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    /// RFC 3339 creation instant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(rename = "isPublished", default = "default_published")]
    pub published: bool,
}

fn default_published() -> bool {
    true
}
