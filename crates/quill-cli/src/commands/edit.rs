use std::path::Path;

use crate::cli::StatusArg;
use crate::commands::common::{
    capture_editor_input_with_initial, open_notebook, parse_due_arg, resolve_category_id,
    resolve_note_id,
};
use crate::error::CliError;

pub struct EditOptions {
    pub id: String,
    pub title: Option<String>,
    pub status: Option<StatusArg>,
    pub due: Option<String>,
    pub clear_due: bool,
    pub category: Option<String>,
    pub content: bool,
}

pub fn run_edit(options: EditOptions, db_path: &Path) -> Result<(), CliError> {
    let mut notebook = open_notebook(db_path)?;
    let note_id = resolve_note_id(&notebook, &options.id)?;
    let mut note = notebook
        .note(note_id)
        .cloned()
        .ok_or_else(|| CliError::NoteNotFound(options.id.trim().to_string()))?;

    let has_metadata_edit = options.title.is_some()
        || options.status.is_some()
        || options.due.is_some()
        || options.clear_due
        || options.category.is_some();

    if let Some(title) = options.title {
        note.title = title;
    }
    if let Some(status) = options.status {
        note.status = status.to_status();
    }
    if let Some(due) = options.due {
        note.due_date = Some(parse_due_arg(&due)?);
    }
    if options.clear_due {
        note.due_date = None;
    }
    if let Some(category) = options.category {
        note.category_id = resolve_category_id(&notebook, &category)?;
    }
    // A bare `edit` with no metadata flags opens the editor.
    if options.content || !has_metadata_edit {
        let edited = capture_editor_input_with_initial(&note.content)?
            .ok_or(CliError::EmptyEditedContent)?;
        if edited == note.content && !has_metadata_edit {
            println!("{note_id}");
            return Ok(());
        }
        note.content = edited;
    }

    notebook.update_note(note)?;
    println!("{note_id}");
    Ok(())
}
