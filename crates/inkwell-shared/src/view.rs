//! Read-only view models built from domain state.

use serde::Serialize;

use inkwell_core::domain::{Category, Field, Post};
use inkwell_core::editor::Draft;

/// Characters of content shown before "Read more".
pub const PREVIEW_CHARS: usize = 200;

pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// One entry of the post list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostSummary {
    /// 1-based position in the list.
    pub position: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub title: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub category: Category,
    pub tags: Vec<String>,
    pub body: String,
    /// More content exists beyond `body`.
    pub truncated: bool,
    pub read_time_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    pub published: bool,
}

impl PostSummary {
    pub fn new(position: usize, post: &Post, words_per_minute: u32, expanded: bool) -> Self {
        let (body, truncated) = preview(&post.content, expanded);
        Self {
            position,
            id: post.id,
            title: post.title.clone(),
            author: post
                .author
                .clone()
                .unwrap_or_else(|| "Anonymous".to_string()),
            date: post.date.clone(),
            category: post.category,
            tags: post.tags.clone(),
            body,
            truncated,
            read_time_minutes: read_time_minutes(&post.content, words_per_minute),
            timestamp: post.timestamp.clone(),
            published: post.published,
        }
    }

    /// Collapsed summaries for the whole list, in store order.
    pub fn list(posts: &[Post], words_per_minute: u32) -> Vec<Self> {
        posts
            .iter()
            .enumerate()
            .map(|(index, post)| Self::new(index + 1, post, words_per_minute, false))
            .collect()
    }
}

/// Content shown for a post, and whether anything was cut off.
pub fn preview(content: &str, expanded: bool) -> (String, bool) {
    if expanded {
        return (content.to_string(), false);
    }
    match content.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => (format!("{}...", &content[..cut]), true),
        None => (content.to_string(), false),
    }
}

/// Estimated reading time, never less than one minute.
pub fn read_time_minutes(content: &str, words_per_minute: u32) -> u32 {
    let words = content.split_whitespace().count() as u32;
    words.div_ceil(words_per_minute.max(1)).max(1)
}

/// One form field as the editor should display it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub field: &'static str,
    pub value: String,
    pub touched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Snapshot of the draft for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftView {
    pub fields: Vec<FieldView>,
}

impl DraftView {
    pub fn new(draft: &Draft) -> Self {
        let fields = Field::ALL
            .into_iter()
            .map(|field| FieldView {
                field: field.name(),
                value: match field {
                    Field::Title => draft.title().to_string(),
                    Field::Content => draft.content().to_string(),
                    Field::Tags => draft.tags().join(", "),
                    Field::Category => draft.category().to_string(),
                },
                touched: draft.is_touched(field),
                error: draft.error(field).map(|e| e.to_string()),
            })
            .collect();
        Self { fields }
    }
}
