//! # Inkwell Shared
//!
//! View models shared by every front end: post list summaries and
//! draft snapshots.

pub mod view;

pub use view::{DraftView, FieldView, PostSummary};
