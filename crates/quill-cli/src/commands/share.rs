use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use quill_core::export::render_text_export;

use crate::commands::common::{open_notebook, resolve_note_id};
use crate::error::CliError;

/// Hand the note's plain-text rendering to the command named by
/// `QUILL_SHARE_CMD`. The payload file path is appended as the final
/// argument.
pub fn run_share(id: &str, db_path: &Path) -> Result<(), CliError> {
    let notebook = open_notebook(db_path)?;
    let note_id = resolve_note_id(&notebook, id)?;
    let note = notebook
        .note(note_id)
        .ok_or_else(|| CliError::NoteNotFound(id.trim().to_string()))?;
    let Some(handler) = share_command() else {
        return Err(CliError::ShareUnsupported);
    };

    let payload = render_text_export(note);
    let temp_path = create_temp_share_file_path();
    fs::write(&temp_path, payload)?;
    let launch_result = launch_share(&handler, &temp_path);
    let _ = fs::remove_file(&temp_path);
    launch_result?;
    println!("{note_id}");
    Ok(())
}

fn share_command() -> Option<String> {
    env::var("QUILL_SHARE_CMD")
        .ok()
        .filter(|value| !value.trim().is_empty())
}

fn launch_share(handler: &str, path: &Path) -> Result<(), CliError> {
    let mut parts = handler.split_whitespace();
    let Some(program) = parts.next() else {
        return Err(CliError::ShareFailed(format!(
            "`{handler}` could not be launched"
        )));
    };
    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|error| {
            CliError::ShareFailed(format!("`{handler}` could not be launched: {error}"))
        })?;
    if status.success() {
        Ok(())
    } else {
        Err(CliError::ShareFailed(format!(
            "`{handler}` exited with status {status}"
        )))
    }
}

fn create_temp_share_file_path() -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.subsec_nanos());
    env::temp_dir().join(format!("quill-share-{}-{nanos}.txt", std::process::id()))
}
