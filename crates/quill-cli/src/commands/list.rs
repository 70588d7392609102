use std::path::Path;

use quill_core::filter::filter_notes;

use crate::commands::common::{
    build_filter, format_note_lines, note_to_list_item, open_notebook, NoteListItem,
};
use crate::error::CliError;

pub fn run_list(
    category: Option<&str>,
    tags: &[String],
    search: Option<&str>,
    as_json: bool,
    db_path: &Path,
) -> Result<(), CliError> {
    let notebook = open_notebook(db_path)?;
    let filter = build_filter(&notebook, category, tags, search)?;
    let notes = filter_notes(notebook.notes(), &filter);
    if as_json {
        let items: Vec<NoteListItem> = notes
            .into_iter()
            .map(|note| note_to_list_item(&notebook, note))
            .collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for line in format_note_lines(&notes) {
            println!("{line}");
        }
    }
    Ok(())
}
