use clap::{Parser, Subcommand};
use configuration::{ServeArgs, Settings};
use database::{InMemoryNoteStore, NoteStore};
use std::sync::Arc;

/// The main entry point for the Notekeeper service.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file, if there is one.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let mut settings = configuration::load_settings()?;
    let _log_guard = configuration::init_tracing(&settings.logging)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Serve(args) => {
            args.apply(&mut settings);
            handle_serve(&args, &settings).await
        }
        Commands::Migrate => handle_migrate(&settings).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A small HTTP service for creating, listing, updating and deleting notes.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the notes HTTP API.
    Serve(ServeArgs),
    /// Create the notes table in the configured database, then exit.
    Migrate,
}

// ==============================================================================
// Command Logic
// ==============================================================================

async fn handle_serve(args: &ServeArgs, settings: &Settings) -> anyhow::Result<()> {
    let store: Arc<dyn NoteStore> = if args.in_memory {
        tracing::warn!("Using the in-memory note store; notes are lost on exit.");
        Arc::new(InMemoryNoteStore::new())
    } else {
        web_server::connect_store(&settings.database).await
    };

    web_server::run_server(&settings.server, store).await
}

async fn handle_migrate(settings: &Settings) -> anyhow::Result<()> {
    let pool = database::connect(&settings.database).await?;
    database::run_migrations(&pool).await?;
    tracing::info!("Database migrations applied.");
    Ok(())
}
