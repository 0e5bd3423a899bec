use super::open_session;
use sheets_manager::Result;
use std::path::Path;
use tracing::info;

pub async fn execute(credentials: &Path) -> Result<()> {
    let session = open_session(credentials)?;
    session.connect().await?;

    info!(path = ?session.credentials_path(), "Google Sheets authentication verified");

    Ok(())
}
