use std::fs;
use std::path::{Path, PathBuf};

use quill_core::export::{export_file_name, render_pdf_export, render_text_export, ExportFormat};

use crate::commands::common::{open_notebook, resolve_note_id};
use crate::error::CliError;

pub fn run_export(
    id: &str,
    format: ExportFormat,
    output: Option<&Path>,
    db_path: &Path,
) -> Result<(), CliError> {
    let notebook = open_notebook(db_path)?;
    let note_id = resolve_note_id(&notebook, id)?;
    let note = notebook
        .note(note_id)
        .ok_or_else(|| CliError::NoteNotFound(id.trim().to_string()))?;
    let bytes = match format {
        ExportFormat::Text => render_text_export(note).into_bytes(),
        ExportFormat::Pdf => render_pdf_export(note)?,
    };
    let path = output.map_or_else(
        || PathBuf::from(export_file_name(&note.title, format)),
        Path::to_path_buf,
    );
    fs::write(&path, bytes)?;
    println!("{}", path.display());
    Ok(())
}
