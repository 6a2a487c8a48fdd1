//! # Notekeeper Database Crate
//!
//! This crate is the storage side of the notes service. It owns every persisted
//! note; the HTTP layer only ever reaches notes through the `NoteStore` trait.
//!
//! ## Architectural Principles
//!
//! - **Adapter:** All SQL lives here. Callers see `Note`, `NewNote` and
//!   `NoteChanges` from `core-types`, never rows or queries.
//! - **Explicit outcomes:** By-id operations return `Result<Option<Note>, DbError>`,
//!   so "not found" and "storage failed" are different values, not exceptions.
//! - **Asynchronous & Pooled:** All operations are asynchronous, and the PostgreSQL
//!   implementation shares a single connection pool (`PgPool`).
//!
//! ## Public API
//!
//! - `connect` / `connect_lazy`: build the connection pool from `DatabaseSettings`.
//! - `run_migrations`: creates the `notes` table if it does not exist yet.
//! - `NoteStore`: the storage contract.
//! - `NoteRepository`: the PostgreSQL implementation.
//! - `InMemoryNoteStore`: a process-local implementation.
//! - `UnavailableNoteStore`: stands in when no pool could be built; every call fails.
//! - `DbError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod memory;
pub mod repository;
pub mod store;
pub mod unavailable;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, connect_lazy, run_migrations};
pub use error::DbError;
pub use memory::InMemoryNoteStore;
pub use repository::NoteRepository;
pub use store::NoteStore;
pub use unavailable::UnavailableNoteStore;
