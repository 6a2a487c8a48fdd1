// Declare the modules that make up this crate.
#[cfg(feature = "clap")]
pub mod cli;
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
#[cfg(feature = "clap")]
pub use cli::ServeArgs;
pub use error::ConfigError;
pub use logging::init_tracing;
pub use settings::{DatabaseSettings, LogSettings, ServerSettings, Settings};

/// Loads the application configuration.
///
/// This function is the primary entry point for this crate. It layers the built-in
/// defaults, the optional `notekeeper.toml` file and the environment, deserializes the
/// result into our strongly-typed `Settings` struct, and validates it.
pub fn load_settings() -> Result<Settings, ConfigError> {
    Settings::load()
}
