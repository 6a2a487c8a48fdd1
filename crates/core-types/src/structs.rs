use crate::error::CoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single persisted note, as stored in the `notes` table and returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Assigned by the storage layer at creation; never changes afterwards.
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful update, so it is never earlier than `created_at`.
    pub updated_at: DateTime<Utc>,
}

/// A validated payload for creating a note. Both fields are guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    title: String,
    content: String,
}

impl NewNote {
    /// Builds a `NewNote` from raw request fields.
    ///
    /// An empty string counts as missing, so `Some("")` is rejected the same way as `None`.
    pub fn from_fields(title: Option<String>, content: Option<String>) -> Result<Self, CoreError> {
        match (present(title), present(content)) {
            (Some(title), Some(content)) => Ok(Self { title, content }),
            _ => Err(CoreError::MissingRequiredFields),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_parts(self) -> (String, String) {
        (self.title, self.content)
    }
}

/// A validated partial update. At least one field is set; unset fields are left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteChanges {
    title: Option<String>,
    content: Option<String>,
}

impl NoteChanges {
    /// Builds a `NoteChanges` from raw request fields.
    ///
    /// Empty strings are dropped rather than written, which means a field can't be
    /// cleared through an update.
    pub fn from_fields(title: Option<String>, content: Option<String>) -> Result<Self, CoreError> {
        let changes = Self {
            title: present(title),
            content: present(content),
        };
        if changes.title.is_none() && changes.content.is_none() {
            return Err(CoreError::EmptyUpdate);
        }
        Ok(changes)
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Applies the supplied fields to `note` and stamps `updated_at`.
    pub fn apply(self, note: &mut Note, now: DateTime<Utc>) {
        if let Some(title) = self.title {
            note.title = title;
        }
        if let Some(content) = self.content {
            note.content = content;
        }
        note.updated_at = now;
    }
}

fn present(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}
