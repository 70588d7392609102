use std::path::Path;

use quill_core::MoveTarget;

use crate::commands::common::{open_notebook, resolve_note_id};
use crate::error::CliError;

pub fn run_move(
    id: &str,
    before: Option<&str>,
    after: Option<&str>,
    db_path: &Path,
) -> Result<(), CliError> {
    let mut notebook = open_notebook(db_path)?;
    let note_id = resolve_note_id(&notebook, id)?;
    let target = match (before, after) {
        (Some(anchor), None) => MoveTarget::Before(resolve_note_id(&notebook, anchor)?),
        (None, Some(anchor)) => MoveTarget::After(resolve_note_id(&notebook, anchor)?),
        _ => return Err(CliError::MoveTargetRequired),
    };
    notebook.move_note(note_id, target)?;
    println!("{note_id}");
    Ok(())
}
