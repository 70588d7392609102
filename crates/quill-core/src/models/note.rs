//! Note model

use super::category::CategoryId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A unique identifier for a note, using UUID v7 (time-sortable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteId(Uuid);

impl NoteId {
    /// Create a new unique note ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Workflow status of a note
///
/// Serialized in camelCase to match the stored JSON dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Status {
    #[default]
    Pending,
    InProgress,
    Completed,
    OnHold,
}

impl Status {
    /// All statuses in workflow order
    pub const ALL: [Self; 4] = [Self::Pending, Self::InProgress, Self::Completed, Self::OnHold];

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::OnHold => "On Hold",
        }
    }

    /// Display color as a hex string. Derived from the status, never stored.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Pending => "#FFA500",
            Self::InProgress => "#4169E1",
            Self::Completed => "#32CD32",
            Self::OnHold => "#FF6347",
        }
    }

    /// Parse a status from loose user or legacy input
    ///
    /// Accepts the serialized camelCase form as well as spaced, dashed, and
    /// capitalized spellings ("In Progress", "on-hold", "ON HOLD").
    #[must_use]
    pub fn parse_loose(s: &str) -> Option<Self> {
        match s
            .trim()
            .to_lowercase()
            .replace([' ', '-', '_'], "")
            .as_str()
        {
            "pending" => Some(Self::Pending),
            "inprogress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            "onhold" => Some(Self::OnHold),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A note in the system
///
/// Content is a rich-text HTML fragment; the core treats it as opaque except
/// when exporting. Field names serialize in camelCase to match the stored
/// JSON dialect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique identifier
    pub id: NoteId,
    /// Display title
    pub title: String,
    /// Rich text content as an HTML fragment
    pub content: String,
    /// Owning category
    pub category_id: CategoryId,
    /// Workflow status
    pub status: Status,
    /// Optional due date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Normalized tags (trimmed, lowercase, no duplicates)
    #[serde(default)]
    pub tags: Vec<String>,
    /// Creation timestamp (Unix ms)
    pub created_at: i64,
}

impl Note {
    /// Create a blank note in the given category
    #[must_use]
    pub fn new(category_id: CategoryId) -> Self {
        Self {
            id: NoteId::new(),
            title: "New Note".to_string(),
            content: String::new(),
            category_id,
            status: Status::Pending,
            due_date: None,
            tags: Vec::new(),
            created_at: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Check whether the note carries the given tag (input is normalized)
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = normalize_tag(tag);
        self.tags.iter().any(|t| *t == tag)
    }
}

/// Normalize a tag for storage and comparison
///
/// Tags are trimmed and lowercased. An empty result means the input was not
/// a usable tag.
#[must_use]
pub fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

/// Normalize a tag list: trim, lowercase, drop empties, dedupe preserving
/// first-seen order
#[must_use]
pub fn normalize_tags(tags: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::new();
    for tag in tags {
        let tag = normalize_tag(&tag);
        if !tag.is_empty() && !normalized.contains(&tag) {
            normalized.push(tag);
        }
    }
    normalized
}
