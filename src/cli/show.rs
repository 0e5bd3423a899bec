use clap::Subcommand;
use sheets_manager::Result;
use sheets_manager::config::Config;
use std::path::Path;
use tracing::info;

#[derive(Subcommand, Debug)]
pub enum ShowResource {
    /// Show configuration and credentials paths
    Paths,
}

impl ShowResource {
    pub async fn execute(&self, credentials: &Path) -> Result<()> {
        match self {
            ShowResource::Paths => show_paths(credentials),
        }
    }
}

fn show_paths(credentials: &Path) -> Result<()> {
    let config_path = Config::config_file()?;

    info!(path = ?config_path, "Config path");
    info!(path = ?credentials, exists = credentials.exists(), "Credentials path");

    Ok(())
}
