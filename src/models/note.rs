use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Note - a single user-authored item with title, content, and tags
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to create a note
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Request to partially update a note.
///
/// Field presence governs replacement: an explicit `"tags": []` clears the
/// tag set, while an omitted `tags` field leaves it unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Validated create payload. Title and content are trimmed and non-empty;
/// tag entries are trimmed (the store handles empty-tag filtering and dedup).
#[derive(Debug, Clone)]
pub struct CreateNoteInput {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

/// Validated partial-update payload
#[derive(Debug, Clone, Default)]
pub struct UpdateNoteInput {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl CreateNoteRequest {
    pub fn validate(self) -> Result<CreateNoteInput, Vec<String>> {
        let mut errors = Vec::new();

        let title = self.title.trim().to_string();
        if title.is_empty() {
            errors.push("Title is required".to_string());
        }

        let content = self.content.trim().to_string();
        if content.is_empty() {
            errors.push("Content is required".to_string());
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let tags = self.tags.into_iter().map(|t| t.trim().to_string()).collect();

        Ok(CreateNoteInput { title, content, tags })
    }
}

impl UpdateNoteRequest {
    pub fn validate(self) -> Result<UpdateNoteInput, Vec<String>> {
        let mut errors = Vec::new();

        let title = self.title.map(|t| t.trim().to_string());
        if matches!(title.as_deref(), Some("")) {
            errors.push("Title is required".to_string());
        }

        let content = self.content.map(|c| c.trim().to_string());
        if matches!(content.as_deref(), Some("")) {
            errors.push("Content is required".to_string());
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let tags = self
            .tags
            .map(|tags| tags.into_iter().map(|t| t.trim().to_string()).collect());

        Ok(UpdateNoteInput { title, content, tags })
    }
}
