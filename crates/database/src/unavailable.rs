use crate::store::NoteStore;
use crate::DbError;
use async_trait::async_trait;
use core_types::{NewNote, Note, NoteChanges};

/// A `NoteStore` for when no connection pool could be built at all, e.g. an
/// unparseable connection string. Every operation fails with the original reason,
/// so the service keeps answering with storage errors instead of exiting.
#[derive(Debug, Clone)]
pub struct UnavailableNoteStore {
    reason: String,
}

impl UnavailableNoteStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn error(&self) -> DbError {
        DbError::Unavailable(self.reason.clone())
    }
}

#[async_trait]
impl NoteStore for UnavailableNoteStore {
    async fn find_all(&self) -> Result<Vec<Note>, DbError> {
        Err(self.error())
    }

    async fn insert(&self, _note: NewNote) -> Result<Note, DbError> {
        Err(self.error())
    }

    async fn update_by_id(
        &self,
        _id: &str,
        _changes: NoteChanges,
    ) -> Result<Option<Note>, DbError> {
        Err(self.error())
    }

    async fn delete_by_id(&self, _id: &str) -> Result<Option<Note>, DbError> {
        Err(self.error())
    }
}
