mod auth;
mod demo;
mod info;
mod show;

use clap::{Parser, Subcommand};
use sheets_manager::Result;
use sheets_manager::config::{Config, ensure_credentials_exist};
use sheets_manager::sheets::{HubConnector, Session};
use std::path::{Path, PathBuf};

pub use show::ShowResource;

#[derive(Parser, Debug)]
#[command(name = "sheets-manager")]
#[command(about = "Create and format Google Sheets with a service account", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Service account key file, overriding GOOGLE_CREDENTIALS_PATH and the config file
    #[arg(long, global = true, value_name = "PATH")]
    pub credentials: Option<PathBuf>,

    /// Defaults to `demo`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        let config = Config::load()?;
        let credentials = self
            .credentials
            .clone()
            .unwrap_or_else(|| config.credentials_path());

        match &self.command {
            None | Some(Commands::Demo) => demo::execute(&credentials).await,
            Some(Commands::Info { spreadsheet_id }) => {
                info::execute(&credentials, spreadsheet_id).await
            }
            Some(Commands::Auth) => auth::execute(&credentials).await,
            Some(Commands::Show { resource }) => resource.execute(&credentials).await,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a sample test results spreadsheet
    Demo,
    /// Print sheet titles, ids and sizes of a spreadsheet as JSON
    Info { spreadsheet_id: String },
    /// Verify the service account credentials
    Auth,
    Show {
        #[command(subcommand)]
        resource: ShowResource,
    },
}

/// Open a session, failing before any network call if the key file is missing.
fn open_session(credentials: &Path) -> Result<Session<HubConnector>> {
    ensure_credentials_exist(credentials)?;
    Ok(Session::new(credentials, HubConnector))
}
