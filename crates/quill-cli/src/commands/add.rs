use std::path::Path;

use crate::cli::TemplateArg;
use crate::commands::common::{
    capture_editor_input, normalize_content, open_notebook, parse_due_arg, read_piped_stdin,
    resolve_category_id,
};
use crate::error::CliError;

pub struct AddOptions {
    pub category: String,
    pub template: Option<TemplateArg>,
    pub title: Option<String>,
    pub due: Option<String>,
    pub tags: Vec<String>,
    pub content: Vec<String>,
}

pub fn run_add(options: AddOptions, db_path: &Path) -> Result<(), CliError> {
    let mut notebook = open_notebook(db_path)?;
    let category_id = resolve_category_id(&notebook, &options.category)?;
    let template = options.template.map(TemplateArg::to_template);
    // Validate the date and gather content before the note exists, so a
    // failed editor session leaves nothing behind.
    let due_date = options.due.as_deref().map(parse_due_arg).transpose()?;
    let content = resolve_add_content(&options.content, template.is_some())?;

    let mut note = notebook.add_note(category_id, template)?;
    if let Some(title) = options.title {
        note.title = title;
    }
    note.due_date = due_date;
    note.tags = options.tags;
    if let Some(content) = content {
        note.content = content;
    }
    let id = note.id;
    notebook.update_note(note)?;
    println!("{id}");
    Ok(())
}

/// Positional arguments beat piped stdin; with neither, a template keeps its
/// seeded content and a blank note opens the editor.
fn resolve_add_content(parts: &[String], templated: bool) -> Result<Option<String>, CliError> {
    if let Some(content) = normalize_content(&parts.join(" ")) {
        return Ok(Some(content));
    }
    if let Some(content) = read_piped_stdin()? {
        return Ok(Some(content));
    }
    if templated {
        return Ok(None);
    }
    Ok(Some(capture_editor_input()?.ok_or(CliError::EmptyContent)?))
}
