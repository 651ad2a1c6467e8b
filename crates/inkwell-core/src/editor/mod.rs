//! The post editor: draft state, validation and publishing.

mod draft;
mod errors;
mod publish;
pub mod validator;

pub use draft::Draft;
pub use errors::FieldErrors;
pub use publish::PostEditor;
pub use validator::{ValidationError, validate};
