use axum_test::TestServer;
use database::{InMemoryNoteStore, NoteStore, UnavailableNoteStore};
use std::sync::Arc;
use web_server::{router, AppState};

/// A router backed by a fresh in-memory store, plus a handle to that store.
pub fn setup_test_app() -> (Arc<InMemoryNoteStore>, TestServer) {
    let store = Arc::new(InMemoryNoteStore::new());
    let server = server_for(store.clone());
    (store, server)
}

pub fn server_for(notes: Arc<dyn NoteStore>) -> TestServer {
    let app = router(Arc::new(AppState::new(notes)));
    TestServer::new(app).unwrap()
}

/// A router whose every storage call fails as if the database were unreachable.
pub fn unavailable_server() -> TestServer {
    server_for(Arc::new(UnavailableNoteStore::new("database is unreachable")))
}
