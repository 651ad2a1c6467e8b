//! Domain-level error types.

use thiserror::Error;

use crate::editor::FieldErrors;

/// Domain errors - business rule failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Submission rejected: {0}")]
    Rejected(FieldErrors),

    #[error("Unknown category: {0} (expected general, technology, lifestyle or travel)")]
    UnknownCategory(String),

    #[error("Unknown field: {0} (expected title, content, tags or category)")]
    UnknownField(String),
}
