use super::formatting::{
    auto_resize_columns_rule, dropdown_validation_rule, freeze_header_rule, header_format_rule,
    sized_sheet,
};
use super::types::{CreatedSpreadsheet, GridBounds, SpreadsheetInfo, edit_url};
use super::{Connector, HubConnector, SpreadsheetService, ValueInputOption, auth};
use crate::config::ensure_credentials_exist;
use crate::error::{AppError, Result};
use google_sheets4::api::{
    BatchUpdateSpreadsheetRequest, BatchUpdateSpreadsheetResponse, Request, Spreadsheet,
    SpreadsheetProperties, UpdateValuesResponse, ValueRange,
};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::sync::OnceCell;
use tracing::{debug, info, instrument};

pub const DEFAULT_SHEET_NAMES: &[&str] = &["Sheet1"];

/// A connection to the spreadsheet service, authorized on first use.
pub struct Session<C: Connector = HubConnector> {
    credentials_path: PathBuf,
    connector: C,
    service: OnceCell<C::Service>,
}

impl<C: Connector + Sync> Session<C> {
    pub fn new(credentials_path: impl Into<PathBuf>, connector: C) -> Self {
        Self {
            credentials_path: credentials_path.into(),
            connector,
            service: OnceCell::new(),
        }
    }

    pub fn credentials_path(&self) -> &Path {
        &self.credentials_path
    }

    /// Authorize against the service. Later calls reuse the first connection.
    pub async fn connect(&self) -> Result<()> {
        self.service().await.map(|_| ())
    }

    async fn service(&self) -> Result<&C::Service> {
        self.service
            .get_or_try_init(|| async {
                ensure_credentials_exist(&self.credentials_path)?;
                let key = auth::read_key(&self.credentials_path).await?;
                self.connector.connect(key).await
            })
            .await
    }

    #[instrument(name = "Creating spreadsheet", skip(self, sheet_names))]
    pub async fn create_spreadsheet<S: AsRef<str>>(
        &self,
        title: &str,
        sheet_names: &[S],
    ) -> Result<CreatedSpreadsheet> {
        let spreadsheet = Spreadsheet {
            properties: Some(SpreadsheetProperties {
                title: Some(title.to_string()),
                ..Default::default()
            }),
            sheets: Some(
                sheet_names
                    .iter()
                    .map(|name| sized_sheet(name.as_ref()))
                    .collect(),
            ),
            ..Default::default()
        };

        let result = self.service().await?.create(spreadsheet).await?;

        let spreadsheet_id = result
            .spreadsheet_id
            .ok_or_else(|| AppError::Sheets("Created spreadsheet has empty ID".to_string()))?;
        let url = edit_url(&spreadsheet_id);

        info!(%spreadsheet_id, %url, "Created spreadsheet");

        Ok(CreatedSpreadsheet {
            spreadsheet_id,
            url,
        })
    }

    /// Overwrite `range` with `values`, parsed as if typed by a user.
    #[instrument(name = "Writing data", skip(self, values))]
    pub async fn write_data(
        &self,
        spreadsheet_id: &str,
        range: &str,
        values: Vec<Vec<Value>>,
    ) -> Result<UpdateValuesResponse> {
        let rows = values.len();
        let value_range = ValueRange {
            major_dimension: Some("ROWS".to_string()),
            range: Some(range.to_string()),
            values: Some(values),
        };

        let response = self
            .service()
            .await?
            .update_values(
                spreadsheet_id,
                range,
                value_range,
                ValueInputOption::UserEntered,
            )
            .await?;

        info!(rows, range, "Wrote rows");

        Ok(response)
    }

    /// Bold and shade the first row, then freeze it.
    #[instrument(name = "Formatting header row", skip(self))]
    pub async fn format_header_row(
        &self,
        spreadsheet_id: &str,
        sheet_id: i32,
    ) -> Result<BatchUpdateSpreadsheetResponse> {
        let requests = vec![header_format_rule(sheet_id), freeze_header_rule(sheet_id)];
        let response = self.batch_update(spreadsheet_id, requests).await?;

        info!("Formatted header row");

        Ok(response)
    }

    #[instrument(name = "Auto-resizing columns", skip(self))]
    pub async fn auto_resize_columns(
        &self,
        spreadsheet_id: &str,
        sheet_id: i32,
        start_column: i32,
        end_column: i32,
    ) -> Result<BatchUpdateSpreadsheetResponse> {
        let request = auto_resize_columns_rule(sheet_id, start_column, end_column);
        let response = self.batch_update(spreadsheet_id, vec![request]).await?;

        info!("Auto-resized columns");

        Ok(response)
    }

    #[instrument(name = "Adding dropdown validation", skip(self, allowed_values))]
    pub async fn add_dropdown_validation<S: AsRef<str>>(
        &self,
        spreadsheet_id: &str,
        sheet_id: i32,
        bounds: GridBounds,
        allowed_values: &[S],
    ) -> Result<BatchUpdateSpreadsheetResponse> {
        let request = dropdown_validation_rule(sheet_id, bounds, allowed_values);
        let response = self.batch_update(spreadsheet_id, vec![request]).await?;

        info!(values = allowed_values.len(), "Added dropdown validation");

        Ok(response)
    }

    #[instrument(name = "Fetching spreadsheet info", skip(self))]
    pub async fn get_spreadsheet_info(&self, spreadsheet_id: &str) -> Result<SpreadsheetInfo> {
        let spreadsheet = self.service().await?.get(spreadsheet_id).await?;
        let info = SpreadsheetInfo::from_spreadsheet(spreadsheet_id, spreadsheet);

        debug!(sheets = info.sheets.len(), "Fetched spreadsheet info");

        Ok(info)
    }

    /// Send `requests` to the service in a single batch.
    pub async fn batch_update(
        &self,
        spreadsheet_id: &str,
        requests: Vec<Request>,
    ) -> Result<BatchUpdateSpreadsheetResponse> {
        let batch_update = BatchUpdateSpreadsheetRequest {
            requests: Some(requests),
            ..Default::default()
        };

        self.service()
            .await?
            .batch_update(spreadsheet_id, batch_update)
            .await
    }
}
