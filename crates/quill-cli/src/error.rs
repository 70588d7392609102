use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] quill_core::Error),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error("No note content provided")]
    EmptyContent,

    #[error("Edited note content cannot be empty")]
    EmptyEditedContent,

    #[error("Note ID cannot be empty")]
    EmptyNoteId,

    #[error("Search query cannot be empty")]
    EmptySearchQuery,

    #[error("Category cannot be empty")]
    EmptyCategory,

    #[error("Note not found for ID or prefix: {0}")]
    NoteNotFound(String),

    #[error("{0}")]
    AmbiguousNoteId(String),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("{0}")]
    AmbiguousCategory(String),

    #[error("Invalid due date '{0}'; expected YYYY-MM-DD")]
    InvalidDueDate(String),

    #[error("Pass --before or --after to pick the move target")]
    MoveTargetRequired,

    #[error("Editor command failed: {0}")]
    EditorFailed(String),

    #[error("Sharing is not supported here; set QUILL_SHARE_CMD to a handler command")]
    ShareUnsupported,

    #[error("Share command failed: {0}")]
    ShareFailed(String),
}
