use crate::settings::Settings;

/// Command-line overrides for the HTTP service.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ServeArgs {
    /// Address to bind, overriding `server.host`.
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on, overriding `server.port` and `PORT`.
    #[arg(long)]
    pub port: Option<u16>,

    /// Keep notes in process memory instead of PostgreSQL.
    #[arg(long)]
    pub in_memory: bool,
}

impl ServeArgs {
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(host) = &self.host {
            settings.server.host = host.clone();
        }
        if let Some(port) = self.port {
            settings.server.port = port;
        }
    }
}
