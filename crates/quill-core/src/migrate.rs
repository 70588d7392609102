//! Decoding stored notebook state
//!
//! The store holds two JSON blobs with no version field, so the shape is
//! detected from the data itself. Two older shapes are accepted as read-only
//! migration sources: a nested one where notes live inside their category,
//! and a flat one where categories are bare names and notes reference them
//! by name. Both are normalized into the current flat model on load; the
//! next save writes the current shape.

use crate::error::Result;
use crate::models::{normalize_tags, Category, CategoryId, Note, NoteId, Status};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

/// Decode the stored blobs into the normalized flat state
///
/// `None` means the key was absent (first run): the collection defaults to
/// empty. Unparseable JSON is an error, not a silent reset.
pub fn decode_state(
    categories_json: Option<&str>,
    notes_json: Option<&str>,
) -> Result<(Vec<Category>, Vec<Note>)> {
    let categories_blob = match categories_json {
        None => CategoriesBlob::Current(Vec::new()),
        Some(raw) if raw.trim().is_empty() || raw.trim() == "null" => {
            CategoriesBlob::Current(Vec::new())
        }
        Some(raw) => serde_json::from_str(raw)?,
    };
    let notes_blob = match notes_json {
        None => NotesBlob::Current(Vec::new()),
        Some(raw) if raw.trim().is_empty() || raw.trim() == "null" => {
            NotesBlob::Current(Vec::new())
        }
        Some(raw) => serde_json::from_str(raw)?,
    };

    let mut categories: Vec<Category> = Vec::new();
    let mut notes: Vec<Note> = Vec::new();

    match categories_blob {
        CategoriesBlob::Current(list) => categories = list,
        CategoriesBlob::Nested(list) => {
            tracing::info!(
                categories = list.len(),
                "migrating nested category shape to flat state"
            );
            for legacy in list {
                let category = Category::new(legacy.name);
                for note in legacy.notes {
                    notes.push(convert_legacy_note(note, category.id));
                }
                categories.push(category);
            }
        }
        CategoriesBlob::Names(names) => {
            tracing::info!(
                categories = names.len(),
                "migrating name-list category shape to flat state"
            );
            categories = names.into_iter().map(Category::new).collect();
        }
    }

    match notes_blob {
        NotesBlob::Current(list) => notes.extend(list),
        NotesBlob::LegacyFlat(list) => {
            tracing::info!(notes = list.len(), "migrating name-keyed notes to flat state");
            for legacy in list {
                let category_id = category_id_for_name(&mut categories, &legacy.category);
                notes.push(convert_legacy_note(legacy.note, category_id));
            }
        }
    }

    Ok((categories, notes))
}

/// The categories blob in any shape ever written
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CategoriesBlob {
    /// Current shape: flat list of id/name records
    Current(Vec<Category>),
    /// Nested legacy shape: notes embedded in their category
    Nested(Vec<LegacyNestedCategory>),
    /// Oldest legacy shape: bare name strings
    Names(Vec<String>),
}

/// The notes blob in any shape ever written
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NotesBlob {
    /// Current shape: notes referencing their category by id
    Current(Vec<Note>),
    /// Legacy shape: notes referencing their category by name
    LegacyFlat(Vec<LegacyFlatNote>),
}

#[derive(Debug, Deserialize)]
struct LegacyNestedCategory {
    name: String,
    #[serde(default)]
    notes: Vec<LegacyNote>,
}

#[derive(Debug, Deserialize)]
struct LegacyFlatNote {
    category: String,
    #[serde(flatten)]
    note: LegacyNote,
}

/// Fields shared by both legacy note shapes
///
/// Legacy ids are numeric wall-clock values and are discarded; migrated
/// notes get fresh ids. A stored `color` field, when present, is ignored
/// since color is derived from status.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyNote {
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    due_date: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    created_at: Option<LegacyTimestamp>,
}

/// Legacy timestamps appear both as Unix milliseconds and ISO-8601 strings
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LegacyTimestamp {
    Millis(i64),
    Iso(String),
}

impl LegacyTimestamp {
    fn into_millis(self) -> i64 {
        match self {
            Self::Millis(ms) => ms,
            Self::Iso(raw) => chrono::DateTime::parse_from_rfc3339(&raw)
                .map_or_else(|_| Utc::now().timestamp_millis(), |dt| dt.timestamp_millis()),
        }
    }
}

fn convert_legacy_note(legacy: LegacyNote, category_id: CategoryId) -> Note {
    Note {
        id: NoteId::new(),
        title: legacy.title,
        content: legacy.content,
        category_id,
        status: legacy
            .status
            .as_deref()
            .and_then(Status::parse_loose)
            .unwrap_or_default(),
        due_date: legacy.due_date.as_deref().and_then(parse_due_date),
        tags: normalize_tags(legacy.tags),
        created_at: legacy
            .created_at
            .map_or_else(|| Utc::now().timestamp_millis(), LegacyTimestamp::into_millis),
    }
}

/// Empty due dates were stored as `""`; anything unparseable is dropped
fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn category_id_for_name(categories: &mut Vec<Category>, name: &str) -> CategoryId {
    let trimmed = name.trim();
    if let Some(existing) = categories
        .iter()
        .find(|c| c.name.trim().to_lowercase() == trimmed.to_lowercase())
    {
        return existing.id;
    }
    tracing::warn!(
        category = trimmed,
        "note references a category missing from the stored list; creating it"
    );
    let category = Category::new(trimmed);
    let id = category.id;
    categories.push(category);
    id
}
