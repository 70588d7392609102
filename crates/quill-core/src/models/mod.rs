//! Data models for Quill

mod category;
mod note;
mod template;

pub use category::{Category, CategoryId};
pub use note::{normalize_tag, normalize_tags, Note, NoteId, Status};
pub use template::Template;
