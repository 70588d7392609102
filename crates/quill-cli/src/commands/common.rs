//! Helpers shared across command modules

use std::env;
use std::fs;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use quill_core::export::strip_html_tags;
use quill_core::filter::NoteFilter;
use quill_core::models::{CategoryId, Note, NoteId};
use quill_core::store::{KeyValueStore, SqliteStore};
use quill_core::Notebook;

use crate::error::CliError;

const SHORT_ID_CHARS: usize = 13;

/// Open the notebook stored at `path`, creating the file on first use.
pub fn open_notebook(path: &Path) -> Result<Notebook<SqliteStore>, CliError> {
    tracing::debug!("opening notebook at {}", path.display());
    let store = SqliteStore::open(path)?;
    Ok(Notebook::load(store)?)
}

/// Resolve the notebook path: CLI flag, then `QUILL_DB_PATH`, then the
/// platform data directory.
pub fn resolve_db_path(cli_path: Option<PathBuf>) -> PathBuf {
    cli_path
        .or_else(|| env::var("QUILL_DB_PATH").ok().map(PathBuf::from))
        .unwrap_or_else(default_db_path)
}

fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("quill")
        .join("notebook.db")
}

pub fn normalize_note_identifier(raw: &str) -> Result<String, CliError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CliError::EmptyNoteId);
    }
    Ok(trimmed.to_string())
}

pub fn normalize_search_query(raw: &str) -> Result<String, CliError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CliError::EmptySearchQuery);
    }
    Ok(trimmed.to_string())
}

pub fn normalize_content(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Resolve a full note ID or a unique ID prefix against the notebook.
pub fn resolve_note_id<S: KeyValueStore>(
    notebook: &Notebook<S>,
    query: &str,
) -> Result<NoteId, CliError> {
    let query = normalize_note_identifier(query)?;
    if let Ok(id) = query.parse::<NoteId>() {
        if notebook.note(id).is_some() {
            return Ok(id);
        }
    }
    let matches: Vec<NoteId> = notebook
        .notes()
        .iter()
        .filter(|note| note.id.as_str().starts_with(&query))
        .map(|note| note.id)
        .collect();
    match matches.len() {
        0 => Err(CliError::NoteNotFound(query)),
        1 => Ok(matches[0]),
        _ => {
            let options = matches
                .iter()
                .take(3)
                .map(|id| short_id(&id.as_str()))
                .collect::<Vec<_>>()
                .join(", ");
            Err(CliError::AmbiguousNoteId(format!(
                "ID prefix '{query}' is ambiguous; matches: {options}"
            )))
        }
    }
}

/// Resolve a category by name (case-insensitive), full ID, or unique ID
/// prefix.
pub fn resolve_category_id<S: KeyValueStore>(
    notebook: &Notebook<S>,
    query: &str,
) -> Result<CategoryId, CliError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(CliError::EmptyCategory);
    }
    if let Some(category) = notebook.category_by_name(trimmed) {
        return Ok(category.id);
    }
    if let Ok(id) = trimmed.parse::<CategoryId>() {
        if notebook.category(id).is_some() {
            return Ok(id);
        }
    }
    let matches: Vec<CategoryId> = notebook
        .categories()
        .iter()
        .filter(|category| category.id.as_str().starts_with(trimmed))
        .map(|category| category.id)
        .collect();
    match matches.len() {
        0 => Err(CliError::CategoryNotFound(trimmed.to_string())),
        1 => Ok(matches[0]),
        _ => {
            let options = matches
                .iter()
                .take(3)
                .map(|id| short_id(&id.as_str()))
                .collect::<Vec<_>>()
                .join(", ");
            Err(CliError::AmbiguousCategory(format!(
                "Category '{trimmed}' is ambiguous; matches: {options}"
            )))
        }
    }
}

/// Build a note filter from CLI selectors, resolving the category reference.
pub fn build_filter<S: KeyValueStore>(
    notebook: &Notebook<S>,
    category: Option<&str>,
    tags: &[String],
    search: Option<&str>,
) -> Result<NoteFilter, CliError> {
    let category = match category {
        Some(raw) => Some(resolve_category_id(notebook, raw)?),
        None => None,
    };
    Ok(NoteFilter {
        category,
        search: search.unwrap_or_default().to_string(),
        tags: tags.to_vec(),
    })
}

pub fn parse_due_arg(raw: &str) -> Result<NaiveDate, CliError> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| CliError::InvalidDueDate(trimmed.to_string()))
}

pub fn short_id(id: &str) -> String {
    id.chars().take(SHORT_ID_CHARS).collect()
}

/// One aligned line per note: short ID, title, status, due date, content
/// preview, tags.
pub fn format_note_lines(notes: &[&Note]) -> Vec<String> {
    notes
        .iter()
        .map(|note| {
            let short = short_id(&note.id.as_str());
            let title = truncate_chars(&note.title, 28);
            let status = note.status.label();
            let due = note
                .due_date
                .map_or_else(|| "-".to_string(), |date| date.to_string());
            let preview = note_preview(note, 40);
            let tags = render_tags(note);
            if tags.is_empty() {
                format!("{short:<13}  {title:<28}  {status:<11}  {due:<10}  {preview}")
            } else {
                format!("{short:<13}  {title:<28}  {status:<11}  {due:<10}  {preview:<40}  {tags}")
            }
        })
        .collect()
}

/// First line of the note text with markup stripped, truncated for display.
pub fn note_preview(note: &Note, max_chars: usize) -> String {
    let text = strip_html_tags(&note.content);
    let first_line = text.lines().next().unwrap_or_default();
    truncate_chars(first_line, max_chars)
}

pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    let visible = max_chars.saturating_sub(3);
    let mut truncated: String = collapsed.chars().take(visible).collect();
    truncated.push_str("...");
    truncated
}

pub fn render_tags(note: &Note) -> String {
    let mut tags: Vec<String> = note.tags.iter().map(|tag| format!("#{tag}")).collect();
    tags.sort();
    tags.join(" ")
}

#[derive(Debug, Serialize)]
pub struct NoteListItem {
    pub id: String,
    pub title: String,
    pub preview: String,
    pub category: String,
    pub status: String,
    pub color: String,
    pub due_date: Option<String>,
    pub tags: Vec<String>,
    pub created_at: i64,
}

pub fn note_to_list_item<S: KeyValueStore>(notebook: &Notebook<S>, note: &Note) -> NoteListItem {
    NoteListItem {
        id: note.id.as_str(),
        title: note.title.clone(),
        preview: note_preview(note, 80),
        category: notebook
            .category(note.category_id)
            .map_or_else(String::new, |category| category.name.clone()),
        status: note.status.label().to_string(),
        color: note.status.color().to_string(),
        due_date: note.due_date.map(|date| date.to_string()),
        tags: note.tags.clone(),
        created_at: note.created_at,
    }
}

pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn format_relative_time(timestamp_ms: i64, now_ms: i64) -> String {
    let seconds = (now_ms - timestamp_ms) / 1000;
    if seconds < 60 {
        return "just now".to_string();
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours}h ago");
    }
    let days = hours / 24;
    if days < 7 {
        return format!("{days}d ago");
    }
    let weeks = days / 7;
    if weeks < 5 {
        return format!("{weeks}w ago");
    }
    let months = days / 30;
    if months < 12 {
        return format!("{months}mo ago");
    }
    let years = days / 365;
    format!("{years}y ago")
}

/// Resolve note content from positional arguments, piped stdin, or the
/// editor, in that order.
pub fn resolve_note_content(parts: &[String]) -> Result<String, CliError> {
    if let Some(content) = normalize_content(&parts.join(" ")) {
        return Ok(content);
    }
    if let Some(content) = read_piped_stdin()? {
        return Ok(content);
    }
    capture_editor_input()?.ok_or(CliError::EmptyContent)
}

pub fn read_piped_stdin() -> Result<Option<String>, CliError> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }
    let mut buffer = String::new();
    stdin.read_to_string(&mut buffer)?;
    Ok(normalize_content(&buffer))
}

pub fn capture_editor_input() -> Result<Option<String>, CliError> {
    capture_editor_input_with_initial("")
}

/// Write `initial` to a temp file, run the editor on it, and read the result
/// back. The temp file is removed even when the editor fails.
pub fn capture_editor_input_with_initial(initial: &str) -> Result<Option<String>, CliError> {
    let editor = preferred_editor();
    let temp_path = create_temp_note_file_path();
    fs::write(&temp_path, initial)?;
    let launch_result = launch_editor(&editor, &temp_path);
    let content = fs::read_to_string(&temp_path).unwrap_or_default();
    let _ = fs::remove_file(&temp_path);
    launch_result?;
    Ok(normalize_content(&content))
}

fn launch_editor(editor: &str, path: &Path) -> Result<(), CliError> {
    let outcome = Command::new(editor).arg(path).status();
    let status = match outcome {
        Ok(status) => status,
        // The whole value may be a command line like "code --wait"; retry
        // with it split into program and arguments.
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            let mut parts = editor.split_whitespace();
            let Some(program) = parts.next() else {
                return Err(CliError::EditorFailed(format!(
                    "`{editor}` could not be launched"
                )));
            };
            Command::new(program)
                .args(parts)
                .arg(path)
                .status()
                .map_err(|error| {
                    CliError::EditorFailed(format!("`{editor}` could not be launched: {error}"))
                })?
        }
        Err(error) => {
            return Err(CliError::EditorFailed(format!(
                "`{editor}` could not be launched: {error}"
            )));
        }
    };
    if status.success() {
        Ok(())
    } else {
        Err(CliError::EditorFailed(format!(
            "`{editor}` exited with status {status}"
        )))
    }
}

pub fn preferred_editor() -> String {
    env::var("VISUAL")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .or_else(|| env::var("EDITOR").ok().filter(|value| !value.trim().is_empty()))
        .unwrap_or_else(default_editor)
}

pub fn default_editor() -> String {
    if cfg!(target_os = "windows") {
        "notepad".to_string()
    } else {
        "vi".to_string()
    }
}

fn create_temp_note_file_path() -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.subsec_nanos());
    env::temp_dir().join(format!("quill-note-{}-{nanos}.html", std::process::id()))
}
