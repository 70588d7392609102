//! Note filtering and search
//!
//! Every list surface derives from the same engine: category scope,
//! case-insensitive substring search over title and content, and tag
//! matching compose with AND. Results keep backing-array order.

use crate::models::{normalize_tag, CategoryId, Note, NoteId};
use crate::notebook::MoveTarget;
use std::collections::BTreeMap;

/// Filter state for the note list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    /// Category scope; `None` means all categories
    pub category: Option<CategoryId>,
    /// Case-insensitive substring matched against title and content
    pub search: String,
    /// Tags the note must all carry
    pub tags: Vec<String>,
}

impl NoteFilter {
    /// Filter scoped to a single category
    #[must_use]
    pub fn for_category(category: CategoryId) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }

    /// True when no criterion is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.search.trim().is_empty() && self.tags.is_empty()
    }
}

/// Select the notes matching every criterion, preserving their order
#[must_use]
pub fn filter_notes<'a>(notes: &'a [Note], filter: &NoteFilter) -> Vec<&'a Note> {
    let query = filter.search.trim().to_lowercase();
    let tags: Vec<String> = filter
        .tags
        .iter()
        .map(|t| normalize_tag(t))
        .filter(|t| !t.is_empty())
        .collect();

    notes
        .iter()
        .filter(|note| filter.category.map_or(true, |id| note.category_id == id))
        .filter(|note| {
            query.is_empty()
                || note.title.to_lowercase().contains(&query)
                || note.content.to_lowercase().contains(&query)
        })
        .filter(|note| tags.iter().all(|tag| note.tags.iter().any(|t| t == tag)))
        .collect()
}

/// All tags in use, sorted by name, with the number of notes carrying each
#[must_use]
pub fn collect_tags(notes: &[Note]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for note in notes {
        for tag in &note.tags {
            *counts.entry(tag.clone()).or_insert(0) += 1;
        }
    }
    counts.into_iter().collect()
}

/// Translate a drag between two positions of a filtered view into an
/// id-pair move on the backing collection
///
/// The dragged note lands adjacent to the note shown at `hover_index`,
/// which is what the gesture means even when hidden notes sit between the
/// two in the backing order. Identical or out-of-range indices resolve to
/// no move.
#[must_use]
pub fn resolve_view_move(
    visible: &[NoteId],
    drag_index: usize,
    hover_index: usize,
) -> Option<(NoteId, MoveTarget)> {
    if drag_index == hover_index {
        return None;
    }
    let dragged = *visible.get(drag_index)?;
    let target = *visible.get(hover_index)?;
    if drag_index < hover_index {
        Some((dragged, MoveTarget::After(target)))
    } else {
        Some((dragged, MoveTarget::Before(target)))
    }
}
