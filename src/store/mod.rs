//! NoteStore — in-memory note storage
//!
//! Holds the sole authoritative copy of note state behind a single RwLock.
//! Absence is reported as `Option`/`bool` here; the service layer decides
//! what counts as an error. State is volatile by design and lost on restart.

use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashSet;
use uuid::Uuid;

use crate::models::{CreateNoteInput, Note, UpdateNoteInput};

/// In-memory note store guarded by a single lock.
///
/// Callers always receive owned clones; nothing returned here aliases the
/// locked collection.
pub struct NoteStore {
    notes: RwLock<Vec<Note>>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self {
            notes: RwLock::new(Vec::new()),
        }
    }

    /// All live notes, in insertion order. Callers that need ordering
    /// use `search`.
    pub fn list_all(&self) -> Vec<Note> {
        self.notes.read().clone()
    }

    pub fn get_by_id(&self, id: Uuid) -> Option<Note> {
        self.notes.read().iter().find(|note| note.id == id).cloned()
    }

    /// Create a note with a fresh id and matching created/updated timestamps.
    pub fn create(&self, input: CreateNoteInput) -> Note {
        let now = Utc::now();

        let note = Note {
            id: Uuid::new_v4(),
            title: input.title,
            content: input.content,
            tags: normalize_tags(input.tags),
            created_at: now,
            updated_at: now,
        };

        self.notes.write().push(note.clone());
        note
    }

    /// Partially update a note. Fields present in `input` replace the
    /// existing values; absent fields are kept. `updated_at` is refreshed
    /// whether or not anything changed. Returns `None` if no note has `id`.
    pub fn update(&self, id: Uuid, input: UpdateNoteInput) -> Option<Note> {
        let mut notes = self.notes.write();
        let note = notes.iter_mut().find(|note| note.id == id)?;

        if let Some(title) = input.title {
            note.title = title;
        }
        if let Some(content) = input.content {
            note.content = content;
        }
        if let Some(tags) = input.tags {
            note.tags = normalize_tags(tags);
        }
        note.updated_at = Utc::now();

        Some(note.clone())
    }

    /// Remove the note with `id`. Returns whether a note was actually
    /// removed; a missing id is not an error at this layer.
    pub fn delete(&self, id: Uuid) -> bool {
        let mut notes = self.notes.write();
        let initial_len = notes.len();
        notes.retain(|note| note.id != id);
        notes.len() < initial_len
    }

    /// Filter notes by free text and/or tags, newest-updated first.
    ///
    /// Text matches case-insensitively against title or content. Every tag
    /// in `filter_tags` must be present on the note (intersection, not
    /// union). Both filters compose with AND; no filters returns all notes.
    pub fn search(&self, search_text: Option<&str>, filter_tags: &[String]) -> Vec<Note> {
        let notes = self.notes.read();
        let lower_search = search_text.map(|text| text.to_lowercase());

        let mut results: Vec<Note> = notes
            .iter()
            .filter(|note| {
                if let Some(lower) = &lower_search {
                    if !note.title.to_lowercase().contains(lower)
                        && !note.content.to_lowercase().contains(lower)
                    {
                        return false;
                    }
                }
                filter_tags.iter().all(|tag| note.tags.contains(tag))
            })
            .cloned()
            .collect();

        results.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        results
    }

    /// Every tag across all live notes, deduplicated and sorted.
    pub fn all_tags(&self) -> Vec<String> {
        let notes = self.notes.read();

        let mut tags: Vec<String> = notes
            .iter()
            .flat_map(|note| note.tags.iter().cloned())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        tags.sort();
        tags
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop empty tags and deduplicate, keeping first-occurrence order.
fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    tags.into_iter()
        .filter(|tag| !tag.is_empty() && seen.insert(tag.clone()))
        .collect()
}
