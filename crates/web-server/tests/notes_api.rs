mod common;

use axum::body::Bytes;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use core_types::Note;
use database::NoteStore;
use serde_json::json;
use std::time::Duration;
use uuid::Uuid;

#[tokio::test]
async fn test_health_check() {
    let (_store, server) = common::setup_test_app();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "OK");
}

#[tokio::test]
async fn test_list_starts_empty() {
    let (_store, server) = common::setup_test_app();

    let response = server.get("/notes").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let notes: Vec<Note> = response.json();
    assert!(notes.is_empty());
}

#[tokio::test]
async fn test_create_then_list_round_trip() {
    let (_store, server) = common::setup_test_app();

    let response = server
        .post("/notes")
        .json(&json!({ "title": "T", "content": "C" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let created: Note = response.json();
    assert_eq!(created.title, "T");
    assert_eq!(created.content, "C");
    assert_eq!(created.created_at, created.updated_at);

    let notes: Vec<Note> = server.get("/notes").await.json();
    assert_eq!(notes, vec![created]);
}

#[tokio::test]
async fn test_note_json_uses_camel_case() {
    let (_store, server) = common::setup_test_app();

    let body: serde_json::Value = server
        .post("/notes")
        .json(&json!({ "title": "T", "content": "C" }))
        .await
        .json();

    for key in ["id", "title", "content", "createdAt", "updatedAt"] {
        assert!(body.get(key).is_some(), "missing key {key} in {body}");
    }
    assert!(body.get("created_at").is_none());
}

#[tokio::test]
async fn test_create_requires_title_and_content() {
    let (store, server) = common::setup_test_app();

    for body in [
        json!({ "title": "T" }),
        json!({ "content": "C" }),
        json!({ "title": "", "content": "C" }),
        json!({}),
    ] {
        let response = server.post("/notes").json(&body).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(response.text(), "Title and content are required.");
    }

    assert!(store.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_without_json_content_type_is_a_validation_error() {
    let (_store, server) = common::setup_test_app();

    let response = server.post("/notes").text("title=T&content=C").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "Title and content are required.");
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let (_store, server) = common::setup_test_app();

    let response = server
        .post("/notes")
        .bytes(Bytes::from_static(b"{\"title\":"))
        .content_type("application/json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_partial_update_preserves_untouched_fields() {
    let (_store, server) = common::setup_test_app();
    let created: Note = server
        .post("/notes")
        .json(&json!({ "title": "A", "content": "B" }))
        .await
        .json();
    tokio::time::sleep(Duration::from_millis(5)).await;

    let response = server
        .put(&format!("/notes/{}", created.id))
        .json(&json!({ "content": "B2" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let updated: Note = response.json();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "A");
    assert_eq!(updated.content, "B2");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);
}

#[tokio::test]
async fn test_update_requires_a_field() {
    let (_store, server) = common::setup_test_app();
    let created: Note = server
        .post("/notes")
        .json(&json!({ "title": "A", "content": "B" }))
        .await
        .json();

    let response = server
        .put(&format!("/notes/{}", created.id))
        .json(&json!({}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "Title or content must be provided for update.");
}

#[tokio::test]
async fn test_update_unknown_note_is_not_found() {
    let (_store, server) = common::setup_test_app();

    let response = server
        .put(&format!("/notes/{}", Uuid::new_v4()))
        .json(&json!({ "title": "x" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "Note not found.");
}

#[tokio::test]
async fn test_delete_twice() {
    let (_store, server) = common::setup_test_app();
    let created: Note = server
        .post("/notes")
        .json(&json!({ "title": "T", "content": "C" }))
        .await
        .json();
    let path = format!("/notes/{}", created.id);

    let first = server.delete(&path).await;
    assert_eq!(first.status_code(), StatusCode::OK);
    assert_eq!(first.text(), "Note deleted successfully.");

    let second = server.delete(&path).await;
    assert_eq!(second.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(second.text(), "Note not found.");
}

#[tokio::test]
async fn test_malformed_id_is_a_storage_error() {
    let (_store, server) = common::setup_test_app();

    let response = server.delete("/notes/not-a-uuid").await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "Error deleting note.");

    let response = server
        .put("/notes/not-a-uuid")
        .json(&json!({ "title": "x" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "Error updating note.");
}

#[tokio::test]
async fn test_storage_failures_map_to_fixed_messages() {
    let server = common::unavailable_server();
    let id = Uuid::new_v4();

    let list = server.get("/notes").await;
    assert_eq!(list.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(list.text(), "Error fetching notes.");

    let create = server
        .post("/notes")
        .json(&json!({ "title": "T", "content": "C" }))
        .await;
    assert_eq!(create.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(create.text(), "Error creating note.");

    let update = server
        .put(&format!("/notes/{id}"))
        .json(&json!({ "title": "T" }))
        .await;
    assert_eq!(update.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(update.text(), "Error updating note.");

    let delete = server.delete(&format!("/notes/{id}")).await;
    assert_eq!(delete.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(delete.text(), "Error deleting note.");
}

#[tokio::test]
async fn test_validation_runs_before_storage() {
    let server = common::unavailable_server();

    let response = server.post("/notes").json(&json!({ "title": "T" })).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let (_store, server) = common::setup_test_app();

    let response = server
        .get("/notes")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("http://example.com"),
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.headers().get("access-control-allow-origin"),
        Some(&HeaderValue::from_static("*"))
    );
}

#[tokio::test]
async fn test_groceries_scenario() {
    let (_store, server) = common::setup_test_app();

    let response = server
        .post("/notes")
        .json(&json!({ "title": "Groceries", "content": "Milk, eggs" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let created: Note = response.json();
    let path = format!("/notes/{}", created.id);

    let notes: Vec<Note> = server.get("/notes").await.json();
    assert!(notes.iter().any(|note| note.id == created.id));

    let response = server
        .put(&path)
        .json(&json!({ "content": "Milk, eggs, bread" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let updated: Note = response.json();
    assert_eq!(updated.title, "Groceries");
    assert_eq!(updated.content, "Milk, eggs, bread");

    assert_eq!(server.delete(&path).await.status_code(), StatusCode::OK);
    assert_eq!(server.delete(&path).await.status_code(), StatusCode::NOT_FOUND);
}
