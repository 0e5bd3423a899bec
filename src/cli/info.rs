use super::open_session;
use sheets_manager::Result;
use std::path::Path;

pub async fn execute(credentials: &Path, spreadsheet_id: &str) -> Result<()> {
    let session = open_session(credentials)?;
    let info = session.get_spreadsheet_info(spreadsheet_id).await?;

    println!("{}", serde_json::to_string_pretty(&info)?);

    Ok(())
}
