use std::path::Path;

use crate::commands::common::{open_notebook, resolve_note_id};
use crate::error::CliError;

pub fn run_delete(id: &str, db_path: &Path) -> Result<(), CliError> {
    let mut notebook = open_notebook(db_path)?;
    let note_id = resolve_note_id(&notebook, id)?;
    notebook.delete_note(note_id)?;
    println!("{note_id}");
    Ok(())
}
