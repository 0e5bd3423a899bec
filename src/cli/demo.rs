use super::open_session;
use indicatif::ProgressStyle;
use serde_json::Value;
use sheets_manager::sheets::GridBounds;
use sheets_manager::{AppError, Result};
use std::path::Path;
use tracing::{Span, info, instrument};
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TITLE: &str = "Test Results Report";
const SHEET_NAMES: [&str; 2] = ["API Tests", "UI Tests"];
const STATUSES: [&str; 4] = ["PASSED", "FAILED", "SKIPPED", "BLOCKED"];
const STEPS: u64 = 7;

fn row(cells: &[&str]) -> Vec<Value> {
    cells.iter().map(|cell| Value::from(*cell)).collect()
}

#[instrument(name = "Demo", skip_all)]
pub async fn execute(credentials: &Path) -> Result<()> {
    let span = Span::current();
    span.pb_set_style(
        &ProgressStyle::with_template(
            "[{elapsed_precise}] {bar:40.cyan/blue} {pos:>2}/{len:2} {msg}",
        )
        .map_err(|e| AppError::Other(e.into()))?,
    );
    span.pb_set_length(STEPS);

    let session = open_session(credentials)?;

    span.pb_set_message("Creating spreadsheet");
    let spreadsheet = session.create_spreadsheet(TITLE, &SHEET_NAMES).await?;
    let id = spreadsheet.spreadsheet_id.as_str();
    span.pb_inc(1);

    span.pb_set_message("Writing header");
    let headers = vec![row(&[
        "Test Case",
        "Status",
        "Duration",
        "Error Message",
        "Executed By",
    ])];
    session.write_data(id, "API Tests!A1:E1", headers).await?;
    span.pb_inc(1);

    span.pb_set_message("Writing results");
    let executed_by = "automation@example.com";
    let results = vec![
        row(&["Login API Test", "PASSED", "1.2s", "", executed_by]),
        row(&["Get User Data", "FAILED", "0.8s", "Timeout error", executed_by]),
        row(&["Create Order", "PASSED", "2.1s", "", executed_by]),
    ];
    session.write_data(id, "API Tests!A2:E4", results).await?;
    span.pb_inc(1);

    span.pb_set_message("Looking up sheet");
    let info = session.get_spreadsheet_info(id).await?;
    let sheet_id = info
        .sheet(SHEET_NAMES[0])
        .map(|sheet| sheet.sheet_id)
        .ok_or_else(|| AppError::Sheets(format!("Sheet '{}' not found", SHEET_NAMES[0])))?;
    span.pb_inc(1);

    span.pb_set_message("Formatting header");
    session.format_header_row(id, sheet_id).await?;
    span.pb_inc(1);

    // Status column (B) below the header
    span.pb_set_message("Adding status dropdown");
    let status_column = GridBounds {
        start_row: 1,
        end_row: 1000,
        start_column: 1,
        end_column: 2,
    };
    session
        .add_dropdown_validation(id, sheet_id, status_column, &STATUSES)
        .await?;
    span.pb_inc(1);

    span.pb_set_message("Resizing columns");
    session.auto_resize_columns(id, sheet_id, 0, 5).await?;
    span.pb_inc(1);

    info!(url = %spreadsheet.url, "Demo spreadsheet ready");

    Ok(())
}
