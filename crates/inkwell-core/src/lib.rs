//! # Inkwell Core
//!
//! The domain layer of the Inkwell blog.
//! This crate contains the post model, the post editor state machine and
//! the ports it talks to. It has no infrastructure dependencies.

pub mod domain;
pub mod editor;
pub mod error;
pub mod ports;

pub use error::DomainError;
