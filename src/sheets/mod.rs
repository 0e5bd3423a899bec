mod auth;
mod client;
mod formatting;
mod session;
mod types;

pub use client::{HubConnector, SheetsHub};
pub use session::{DEFAULT_SHEET_NAMES, Session};
pub use types::{CreatedSpreadsheet, GridBounds, SheetInfo, SpreadsheetInfo, edit_url};

use crate::error::Result;
use async_trait::async_trait;
use google_sheets4::api::{
    BatchUpdateSpreadsheetRequest, BatchUpdateSpreadsheetResponse, Spreadsheet,
    UpdateValuesResponse, ValueRange,
};
use yup_oauth2::ServiceAccountKey;

/// How the service interprets values written to a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueInputOption {
    /// Stored exactly as given
    Raw,
    /// Parsed as if typed into the UI (numbers, dates, formulas)
    UserEntered,
}

impl ValueInputOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueInputOption::Raw => "RAW",
            ValueInputOption::UserEntered => "USER_ENTERED",
        }
    }
}

/// The remote calls a session makes. One method per API endpoint.
#[async_trait]
pub trait SpreadsheetService {
    async fn create(&self, spreadsheet: Spreadsheet) -> Result<Spreadsheet>;

    async fn update_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        value_range: ValueRange,
        input: ValueInputOption,
    ) -> Result<UpdateValuesResponse>;

    async fn batch_update(
        &self,
        spreadsheet_id: &str,
        request: BatchUpdateSpreadsheetRequest,
    ) -> Result<BatchUpdateSpreadsheetResponse>;

    async fn get(&self, spreadsheet_id: &str) -> Result<Spreadsheet>;
}

/// Builds an authorized [`SpreadsheetService`] from a service account key.
#[async_trait]
pub trait Connector {
    type Service: SpreadsheetService + Send + Sync;

    async fn connect(&self, key: ServiceAccountKey) -> Result<Self::Service>;
}
