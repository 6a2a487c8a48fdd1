use crate::error::DbError;
use configuration::DatabaseSettings;
use sqlx::{postgres::PgPoolOptions, PgPool};

fn pool_options(settings: &DatabaseSettings) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout())
}

/// Establishes a connection pool to the PostgreSQL database.
///
/// At least one connection is opened before this returns, so an unreachable
/// server is reported here rather than on the first query.
pub async fn connect(settings: &DatabaseSettings) -> Result<PgPool, DbError> {
    let pool = pool_options(settings).connect(&settings.url).await?;
    Ok(pool)
}

/// Creates a pool that opens connections on first use.
///
/// Only the connection string is checked here; the server is not contacted.
pub fn connect_lazy(settings: &DatabaseSettings) -> Result<PgPool, DbError> {
    pool_options(settings)
        .connect_lazy(&settings.url)
        .map_err(|e| DbError::ConnectionConfigError(e.to_string()))
}

/// Applies the embedded migrations in `./migrations`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DbError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
