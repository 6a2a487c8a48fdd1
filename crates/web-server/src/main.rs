// This main function is the entry point when running `cargo run -p web-server`.
// It serves the note API with whatever the environment configures.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let settings = configuration::load_settings()?;
    let _log_guard = configuration::init_tracing(&settings.logging)?;

    let store = web_server::connect_store(&settings.database).await;
    web_server::run_server(&settings.server, store).await
}
