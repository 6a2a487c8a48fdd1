use crate::error::DbError;
use async_trait::async_trait;
use core_types::{NewNote, Note, NoteChanges};
use uuid::Uuid;

/// The storage contract the HTTP layer is written against.
///
/// `Ok(None)` from the by-id operations means no note has that id; every `Err`
/// is an infrastructure failure (including an id the store cannot parse).
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Every note, oldest first.
    async fn find_all(&self) -> Result<Vec<Note>, DbError>;

    /// Persists a note, assigning its id and both timestamps.
    async fn insert(&self, note: NewNote) -> Result<Note, DbError>;

    /// Overwrites only the supplied fields and refreshes `updated_at`.
    async fn update_by_id(&self, id: &str, changes: NoteChanges) -> Result<Option<Note>, DbError>;

    /// Removes the note and returns it as it was before deletion.
    async fn delete_by_id(&self, id: &str) -> Result<Option<Note>, DbError>;
}

pub(crate) fn parse_id(id: &str) -> Result<Uuid, DbError> {
    Uuid::parse_str(id).map_err(|_| DbError::InvalidId(id.to_string()))
}
