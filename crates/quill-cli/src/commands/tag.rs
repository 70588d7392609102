use std::path::Path;

use serde::Serialize;

use quill_core::filter::collect_tags;

use crate::commands::common::{open_notebook, resolve_note_id};
use crate::error::CliError;

pub fn run_add(id: &str, tag: &str, db_path: &Path) -> Result<(), CliError> {
    let mut notebook = open_notebook(db_path)?;
    let note_id = resolve_note_id(&notebook, id)?;
    notebook.add_tag(note_id, tag)?;
    println!("{note_id}");
    Ok(())
}

pub fn run_remove(id: &str, tag: &str, db_path: &Path) -> Result<(), CliError> {
    let mut notebook = open_notebook(db_path)?;
    let note_id = resolve_note_id(&notebook, id)?;
    notebook.remove_tag(note_id, tag)?;
    println!("{note_id}");
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct TagListItem {
    pub name: String,
    pub notes: usize,
}

pub fn run_list(as_json: bool, db_path: &Path) -> Result<(), CliError> {
    let notebook = open_notebook(db_path)?;
    let items: Vec<TagListItem> = collect_tags(notebook.notes())
        .into_iter()
        .map(|(name, notes)| TagListItem { name, notes })
        .collect();
    if as_json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for item in &items {
            println!("{:<20}  {} note(s)", item.name, item.notes);
        }
    }
    Ok(())
}
