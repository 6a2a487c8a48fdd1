use crate::store::{parse_id, NoteStore};
use crate::DbError;
use async_trait::async_trait;
use chrono::Utc;
use core_types::{NewNote, Note, NoteChanges};
use tokio::sync::RwLock;
use uuid::Uuid;

/// A process-local `NoteStore`. Contents are lost when the process exits.
///
/// Ids are validated exactly as `NoteRepository` validates them, so the HTTP
/// layer behaves the same against either store.
#[derive(Debug, Default)]
pub struct InMemoryNoteStore {
    // Insertion order doubles as creation order.
    notes: RwLock<Vec<Note>>,
}

impl InMemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteStore for InMemoryNoteStore {
    async fn find_all(&self) -> Result<Vec<Note>, DbError> {
        Ok(self.notes.read().await.clone())
    }

    async fn insert(&self, note: NewNote) -> Result<Note, DbError> {
        let now = Utc::now();
        let (title, content) = note.into_parts();
        let note = Note {
            id: Uuid::new_v4(),
            title,
            content,
            created_at: now,
            updated_at: now,
        };
        self.notes.write().await.push(note.clone());
        Ok(note)
    }

    async fn update_by_id(&self, id: &str, changes: NoteChanges) -> Result<Option<Note>, DbError> {
        let id = parse_id(id)?;
        let mut notes = self.notes.write().await;

        let Some(note) = notes.iter_mut().find(|note| note.id == id) else {
            return Ok(None);
        };
        let now = Utc::now().max(note.created_at);
        changes.apply(note, now);
        Ok(Some(note.clone()))
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<Note>, DbError> {
        let id = parse_id(id)?;
        let mut notes = self.notes.write().await;

        let Some(index) = notes.iter().position(|note| note.id == id) else {
            return Ok(None);
        };
        Ok(Some(notes.remove(index)))
    }
}
