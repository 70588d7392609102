use std::path::Path;

use crate::commands::common::{
    format_relative_time, now_ms, open_notebook, render_tags, resolve_note_id,
};
use crate::error::CliError;

pub fn run_show(id: &str, db_path: &Path) -> Result<(), CliError> {
    let notebook = open_notebook(db_path)?;
    let note_id = resolve_note_id(&notebook, id)?;
    let note = notebook
        .note(note_id)
        .ok_or_else(|| CliError::NoteNotFound(id.trim().to_string()))?;
    let category = notebook
        .category(note.category_id)
        .map_or_else(String::new, |category| category.name.clone());
    let due = note
        .due_date
        .map_or_else(|| "-".to_string(), |date| date.to_string());
    let tags = render_tags(note);
    let tags = if tags.is_empty() { "-".to_string() } else { tags };

    println!("ID:       {}", note.id);
    println!("Title:    {}", note.title);
    println!("Category: {category}");
    println!("Status:   {}", note.status.label());
    println!("Due:      {due}");
    println!("Tags:     {tags}");
    println!(
        "Created:  {}",
        format_relative_time(note.created_at, now_ms())
    );
    println!();
    println!("{}", note.content);
    Ok(())
}
