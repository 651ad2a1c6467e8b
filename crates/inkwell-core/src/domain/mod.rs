//! Domain entities - the core business objects.

mod category;
mod field;
mod post;

pub use category::Category;
pub use field::{Field, FieldMap, FieldValue};
pub use post::Post;
