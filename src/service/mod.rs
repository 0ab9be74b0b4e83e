//! Notes service — the access façade over the store.
//!
//! Translates the store's `Option`/`bool` absence signals into a
//! `NotesError::NotFound` the controllers can map to a 404 without knowing
//! store internals. Holds no state of its own.

use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{CreateNoteInput, Note, UpdateNoteInput};
use crate::store::NoteStore;

#[derive(Debug, Error)]
pub enum NotesError {
    #[error("Note not found: {0}")]
    NotFound(Uuid),
}

#[derive(Clone)]
pub struct NotesService {
    store: Arc<NoteStore>,
}

impl NotesService {
    pub fn new(store: Arc<NoteStore>) -> Self {
        Self { store }
    }

    pub fn list(&self, search_text: Option<&str>, filter_tags: &[String]) -> Vec<Note> {
        self.store.search(search_text, filter_tags)
    }

    pub fn create(&self, input: CreateNoteInput) -> Note {
        self.store.create(input)
    }

    pub fn update(&self, id: Uuid, input: UpdateNoteInput) -> Result<Note, NotesError> {
        self.store.update(id, input).ok_or(NotesError::NotFound(id))
    }

    pub fn delete(&self, id: Uuid) -> Result<(), NotesError> {
        if self.store.delete(id) {
            Ok(())
        } else {
            Err(NotesError::NotFound(id))
        }
    }

    pub fn tags(&self) -> Vec<String> {
        self.store.all_tags()
    }
}
