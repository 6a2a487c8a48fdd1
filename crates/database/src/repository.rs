use crate::store::{parse_id, NoteStore};
use crate::DbError;
use async_trait::async_trait;
use chrono::Utc;
use core_types::{NewNote, Note, NoteChanges};
use sqlx::postgres::PgPool;
use uuid::Uuid;

/// The `NoteRepository` provides a high-level, application-specific interface
/// to the `notes` table. It encapsulates all SQL queries and data access logic.
#[derive(Debug, Clone)]
pub struct NoteRepository {
    pool: PgPool,
}

impl NoteRepository {
    /// Creates a new `NoteRepository` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl NoteStore for NoteRepository {
    async fn find_all(&self) -> Result<Vec<Note>, DbError> {
        let notes = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, title, content, created_at, updated_at
            FROM notes
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(notes)
    }

    async fn insert(&self, note: NewNote) -> Result<Note, DbError> {
        let now = Utc::now();
        let (title, content) = note.into_parts();

        let note = sqlx::query_as::<_, Note>(
            r#"
            INSERT INTO notes (id, title, content, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            RETURNING id, title, content, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(title)
        .bind(content)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(note_id = %note.id, "Inserted note.");
        Ok(note)
    }

    async fn update_by_id(&self, id: &str, changes: NoteChanges) -> Result<Option<Note>, DbError> {
        let id = parse_id(id)?;

        // COALESCE leaves a column alone when its change is NULL.
        let note = sqlx::query_as::<_, Note>(
            r#"
            UPDATE notes
            SET title = COALESCE($2, title),
                content = COALESCE($3, content),
                updated_at = GREATEST($4, created_at)
            WHERE id = $1
            RETURNING id, title, content, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(changes.title())
        .bind(changes.content())
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(note)
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<Note>, DbError> {
        let id = parse_id(id)?;

        let note = sqlx::query_as::<_, Note>(
            "DELETE FROM notes WHERE id = $1 RETURNING id, title, content, created_at, updated_at",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(note)
    }
}
