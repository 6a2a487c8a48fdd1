use axum::{
    extract::DefaultBodyLimit,
    routing::{get, put},
    Router,
};
use configuration::{DatabaseSettings, ServerSettings};
use database::{NoteRepository, NoteStore, UnavailableNoteStore};
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer, ExposeHeaders},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// Request bodies above this size are rejected before reaching a handler.
const BODY_LIMIT_BYTES: usize = 100 * 1024;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub notes: Arc<dyn NoteStore>,
}

impl AppState {
    pub fn new(notes: Arc<dyn NoteStore>) -> Self {
        Self { notes }
    }
}

/// Builds the router with every route and middleware layer attached.
pub fn router(state: Arc<AppState>) -> Router {
    // Cross-origin requests are allowed from anywhere.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any())
        .expose_headers(ExposeHeaders::any());

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route(
            "/notes",
            get(handlers::list_notes).post(handlers::create_note),
        )
        .route(
            "/notes/:id",
            put(handlers::update_note).delete(handlers::delete_note),
        )
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
}

/// Opens the PostgreSQL note store.
///
/// Startup never fails here. An unreachable database is logged and a lazily
/// connecting pool is used instead; a connection string that can't even be
/// parsed is logged and replaced by an `UnavailableNoteStore`. Either way
/// individual requests fail with storage errors until the database is fixed.
pub async fn connect_store(settings: &DatabaseSettings) -> Arc<dyn NoteStore> {
    let pool = match database::connect(settings).await {
        Ok(pool) => {
            tracing::info!("Connected to the database.");
            if let Err(e) = database::run_migrations(&pool).await {
                tracing::error!(error = %e, "Failed to apply database migrations.");
            }
            pool
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to connect to the database.");
            match database::connect_lazy(settings) {
                Ok(pool) => pool,
                Err(e) => {
                    tracing::error!(
                        error = %e,
                        "Database settings are unusable; serving without storage."
                    );
                    return Arc::new(UnavailableNoteStore::new(e.to_string()));
                }
            }
        }
    };

    Arc::new(NoteRepository::new(pool))
}

/// Binds the listener and serves the note API until the process is stopped.
pub async fn run_server(
    server: &ServerSettings,
    notes: Arc<dyn NoteStore>,
) -> anyhow::Result<()> {
    let app = router(Arc::new(AppState::new(notes)));

    let listener = tokio::net::TcpListener::bind(server.bind_address()).await?;
    tracing::info!("Server is running on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
