use crate::error::{AppError, Operation};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use core_types::{NewNote, Note, NoteChanges};
use serde::Deserialize;
use std::sync::Arc;

/// The body accepted by both `POST /notes` and `PUT /notes/:id`.
#[derive(Debug, Default, Deserialize)]
pub struct NotePayload {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// A request without a JSON content type is read as an empty object, so it
/// fails field validation instead of being rejected as unparseable.
fn read_payload(
    payload: Result<Json<NotePayload>, JsonRejection>,
) -> Result<NotePayload, AppError> {
    match payload {
        Ok(Json(payload)) => Ok(payload),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(NotePayload::default()),
        Err(rejection) => Err(AppError::Body(rejection)),
    }
}

/// # GET /notes
pub async fn list_notes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Note>>, AppError> {
    let notes = state
        .notes
        .find_all()
        .await
        .map_err(AppError::storage(Operation::List))?;
    Ok(Json(notes))
}

/// # POST /notes
/// Both `title` and `content` must be present and non-empty.
pub async fn create_note(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NotePayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Note>), AppError> {
    let payload = read_payload(payload)?;
    let new_note = NewNote::from_fields(payload.title, payload.content)?;

    let note = state
        .notes
        .insert(new_note)
        .await
        .map_err(AppError::storage(Operation::Create))?;

    tracing::info!(note_id = %note.id, "Created note.");
    Ok((StatusCode::CREATED, Json(note)))
}

/// # PUT /notes/:id
/// Only the supplied fields are overwritten.
pub async fn update_note(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NotePayload>, JsonRejection>,
) -> Result<Json<Note>, AppError> {
    let payload = read_payload(payload)?;
    let changes = NoteChanges::from_fields(payload.title, payload.content)?;

    let note = state
        .notes
        .update_by_id(&id, changes)
        .await
        .map_err(AppError::storage(Operation::Update))?
        .ok_or(AppError::NotFound)?;

    Ok(Json(note))
}

/// # DELETE /notes/:id
pub async fn delete_note(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<&'static str, AppError> {
    let note = state
        .notes
        .delete_by_id(&id)
        .await
        .map_err(AppError::storage(Operation::Delete))?
        .ok_or(AppError::NotFound)?;

    tracing::info!(note_id = %note.id, "Deleted note.");
    Ok("Note deleted successfully.")
}
