//! The notebook repository
//!
//! Owns the in-memory category and note collections and a key-value store
//! they persist to. Every mutation updates memory first, then writes the
//! affected collection back as a JSON blob under its fixed key. A failed
//! write surfaces as an error; the in-memory state remains the source of
//! truth for the session.

use crate::error::{Error, Result};
use crate::migrate;
use crate::models::{normalize_tag, normalize_tags, Category, CategoryId, Note, NoteId, Template};
use crate::store::{KeyValueStore, CATEGORIES_KEY, NOTES_KEY};

/// Where a moved note lands relative to another note
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTarget {
    /// Immediately before the given note
    Before(NoteId),
    /// Immediately after the given note
    After(NoteId),
}

/// In-memory notebook state with write-through persistence
pub struct Notebook<S: KeyValueStore> {
    categories: Vec<Category>,
    notes: Vec<Note>,
    store: S,
}

impl<S: KeyValueStore> Notebook<S> {
    /// Load notebook state from the store
    ///
    /// Absent keys yield an empty notebook; legacy blob shapes are migrated
    /// in memory and rewritten in the current shape on the next save.
    /// Unparseable blobs are an error rather than a silent reset.
    pub fn load(store: S) -> Result<Self> {
        let categories_json = store.get(CATEGORIES_KEY)?;
        let notes_json = store.get(NOTES_KEY)?;
        let (categories, notes) =
            migrate::decode_state(categories_json.as_deref(), notes_json.as_deref())?;
        tracing::debug!(
            categories = categories.len(),
            notes = notes.len(),
            "notebook loaded"
        );
        Ok(Self {
            categories,
            notes,
            store,
        })
    }

    /// All categories in creation order
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All notes in display order
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Look up a note by id
    #[must_use]
    pub fn note(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Look up a category by id
    #[must_use]
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Look up a category by name, case-insensitively
    #[must_use]
    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        let lowered = name.trim().to_lowercase();
        self.categories
            .iter()
            .find(|c| c.name.to_lowercase() == lowered)
    }

    /// Consume the notebook, returning the underlying store
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Create a category with the given name
    ///
    /// Names are trimmed and must be non-empty and unique among categories
    /// (case-insensitive).
    pub fn add_category(&mut self, name: &str) -> Result<CategoryId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidInput("category name cannot be empty".into()));
        }
        let lowered = name.to_lowercase();
        if self.categories.iter().any(|c| c.name.to_lowercase() == lowered) {
            return Err(Error::InvalidInput(format!(
                "category '{name}' already exists"
            )));
        }
        let category = Category::new(name);
        let id = category.id;
        self.categories.push(category);
        self.save_categories()?;
        tracing::debug!(%id, name, "category added");
        Ok(id)
    }

    /// Delete a category and every note in it
    ///
    /// Returns the number of notes removed by the cascade.
    pub fn delete_category(&mut self, id: CategoryId) -> Result<usize> {
        let position = self
            .categories
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| Error::NotFound(format!("category {id}")))?;
        self.categories.remove(position);
        let before = self.notes.len();
        self.notes.retain(|n| n.category_id != id);
        let cascaded = before - self.notes.len();
        self.save_categories()?;
        self.save_notes()?;
        tracing::info!(%id, cascaded, "category deleted");
        Ok(cascaded)
    }

    /// Create a note in the given category, optionally seeded from a template
    ///
    /// New notes default to the title "New Note", empty content, and pending
    /// status. Returns the created note.
    pub fn add_note(&mut self, category_id: CategoryId, template: Option<Template>) -> Result<Note> {
        if self.category(category_id).is_none() {
            return Err(Error::NotFound(format!("category {category_id}")));
        }
        let mut note = Note::new(category_id);
        if let Some(template) = template {
            note.title = template.title().to_string();
            note.content = template.content().to_string();
        }
        self.notes.push(note.clone());
        self.save_notes()?;
        tracing::debug!(id = %note.id, "note added");
        Ok(note)
    }

    /// Replace a note wholesale, keyed by its id
    ///
    /// The note's category must exist; tags are normalized on the way in.
    pub fn update_note(&mut self, note: Note) -> Result<()> {
        if self.category(note.category_id).is_none() {
            return Err(Error::InvalidInput(format!(
                "category {} does not exist",
                note.category_id
            )));
        }
        let position = self
            .notes
            .iter()
            .position(|n| n.id == note.id)
            .ok_or_else(|| Error::NotFound(format!("note {}", note.id)))?;
        let mut note = note;
        note.tags = normalize_tags(note.tags);
        self.notes[position] = note;
        self.save_notes()?;
        Ok(())
    }

    /// Delete a note, returning it
    pub fn delete_note(&mut self, id: NoteId) -> Result<Note> {
        let position = self
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| Error::NotFound(format!("note {id}")))?;
        let note = self.notes.remove(position);
        self.save_notes()?;
        tracing::debug!(%id, "note deleted");
        Ok(note)
    }

    /// Move a note so it sits immediately before or after another note
    ///
    /// Reordering is a permutation of the collection: nothing is added or
    /// removed. Moving a note relative to itself is a no-op.
    pub fn move_note(&mut self, id: NoteId, target: MoveTarget) -> Result<()> {
        let from = self
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| Error::NotFound(format!("note {id}")))?;
        let target_id = match target {
            MoveTarget::Before(t) | MoveTarget::After(t) => t,
        };
        if target_id == id {
            return Ok(());
        }
        let note = self.notes.remove(from);
        let Some(anchor) = self.notes.iter().position(|n| n.id == target_id) else {
            self.notes.insert(from, note);
            return Err(Error::NotFound(format!("note {target_id}")));
        };
        let to = match target {
            MoveTarget::Before(_) => anchor,
            MoveTarget::After(_) => anchor + 1,
        };
        self.notes.insert(to, note);
        self.save_notes()?;
        Ok(())
    }

    /// Add a tag to a note
    ///
    /// The tag is normalized; empty and already-present tags are rejected.
    pub fn add_tag(&mut self, id: NoteId, tag: &str) -> Result<()> {
        let tag = normalize_tag(tag);
        if tag.is_empty() {
            return Err(Error::InvalidInput("tag cannot be empty".into()));
        }
        let note = self.note_mut(id)?;
        if note.tags.contains(&tag) {
            return Err(Error::InvalidInput(format!(
                "tag '{tag}' is already present"
            )));
        }
        note.tags.push(tag);
        self.save_notes()?;
        Ok(())
    }

    /// Remove a tag from a note
    pub fn remove_tag(&mut self, id: NoteId, tag: &str) -> Result<()> {
        let tag = normalize_tag(tag);
        let note = self.note_mut(id)?;
        let Some(position) = note.tags.iter().position(|t| *t == tag) else {
            return Err(Error::InvalidInput(format!("tag '{tag}' is not present")));
        };
        note.tags.remove(position);
        self.save_notes()?;
        Ok(())
    }

    /// Replace a note's tag set (normalized, order-preserving dedupe)
    pub fn set_tags(&mut self, id: NoteId, tags: Vec<String>) -> Result<()> {
        let tags = normalize_tags(tags);
        let note = self.note_mut(id)?;
        note.tags = tags;
        self.save_notes()?;
        Ok(())
    }

    fn note_mut(&mut self, id: NoteId) -> Result<&mut Note> {
        self.notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| Error::NotFound(format!("note {id}")))
    }

    fn save_categories(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.categories)?;
        self.store.set(CATEGORIES_KEY, &json)
    }

    fn save_notes(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.notes)?;
        self.store.set(NOTES_KEY, &json)
    }
}
