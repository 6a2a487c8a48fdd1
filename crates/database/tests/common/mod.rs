use configuration::DatabaseSettings;
use database::NoteRepository;
use std::env;
use testcontainers_modules::{
    postgres::Postgres,
    testcontainers::{runners::AsyncRunner, ContainerAsync},
};

/// Points the tests at an existing database instead of starting a container.
const DATABASE_URL_VAR: &str = "NOTEKEEPER_TEST_DATABASE_URL";

/// A migrated PostgreSQL database for one test. The container, if any, is
/// removed when this is dropped.
pub struct TestDatabase {
    pub repo: NoteRepository,
    _container: Option<ContainerAsync<Postgres>>,
}

impl TestDatabase {
    /// Returns `None` when neither `NOTEKEEPER_TEST_DATABASE_URL` is set nor a
    /// container runtime is available, so the calling test can skip itself.
    pub async fn start() -> Option<Self> {
        let (url, container) = match env::var(DATABASE_URL_VAR) {
            Ok(url) => (url, None),
            Err(_) => match Postgres::default().start().await {
                Ok(container) => {
                    let host = container.get_host().await.unwrap();
                    let port = container.get_host_port_ipv4(5432).await.unwrap();
                    let url = format!("postgres://postgres:postgres@{host}:{port}/postgres");
                    (url, Some(container))
                }
                Err(e) => {
                    eprintln!("skipping PostgreSQL test, no container runtime: {e}");
                    return None;
                }
            },
        };

        let settings = DatabaseSettings {
            url,
            max_connections: 5,
            acquire_timeout_secs: 30,
        };
        let pool = database::connect(&settings).await.unwrap();
        database::run_migrations(&pool).await.unwrap();

        Some(Self {
            repo: NoteRepository::new(pool),
            _container: container,
        })
    }
}
