use super::{Connector, SpreadsheetService, ValueInputOption};
use crate::error::{AppError, Result};
use crate::sheets::auth::create_and_verify_authenticator;
use async_trait::async_trait;
use google_sheets4::api::{
    BatchUpdateSpreadsheetRequest, BatchUpdateSpreadsheetResponse, Scope, Sheets, Spreadsheet,
    UpdateValuesResponse, ValueRange,
};
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use tracing::instrument;
use yup_oauth2::ServiceAccountKey;

// Full read/write access to spreadsheets
pub(crate) const AUTH_SCOPE: Scope = Scope::Spreadsheet;

/// Connects to the real Google Sheets API.
#[derive(Debug, Default, Clone, Copy)]
pub struct HubConnector;

#[async_trait]
impl Connector for HubConnector {
    type Service = SheetsHub;

    #[instrument(name = "Authenticating to Google Sheets", skip_all)]
    async fn connect(&self, key: ServiceAccountKey) -> Result<SheetsHub> {
        let auth = create_and_verify_authenticator(key).await?;

        let connector = hyper_rustls::HttpsConnectorBuilder::new()
            .with_native_roots()?
            .https_or_http()
            .enable_http1()
            .build();

        let client = Client::builder(hyper_util::rt::TokioExecutor::new()).build(connector);

        Ok(SheetsHub {
            hub: Sheets::new(client, auth),
        })
    }
}

pub struct SheetsHub {
    hub: Sheets<HttpsConnector<HttpConnector>>,
}

#[async_trait]
impl SpreadsheetService for SheetsHub {
    #[instrument(name = "Creating spreadsheet", skip_all)]
    async fn create(&self, spreadsheet: Spreadsheet) -> Result<Spreadsheet> {
        let (_, result) = self
            .hub
            .spreadsheets()
            .create(spreadsheet)
            .add_scope(AUTH_SCOPE)
            .doit()
            .await
            .map_err(|e| AppError::Sheets(format!("Failed to create spreadsheet: {}", e)))?;

        Ok(result)
    }

    #[instrument(name = "Writing values", skip(self, value_range))]
    async fn update_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        value_range: ValueRange,
        input: ValueInputOption,
    ) -> Result<UpdateValuesResponse> {
        let (_, response) = self
            .hub
            .spreadsheets()
            .values_update(value_range, spreadsheet_id, range)
            .value_input_option(input.as_str())
            .add_scope(AUTH_SCOPE)
            .doit()
            .await
            .map_err(|e| AppError::Sheets(format!("Failed to write '{}': {}", range, e)))?;

        Ok(response)
    }

    #[instrument(name = "Applying batch update", skip(self, request))]
    async fn batch_update(
        &self,
        spreadsheet_id: &str,
        request: BatchUpdateSpreadsheetRequest,
    ) -> Result<BatchUpdateSpreadsheetResponse> {
        let (_, response) = self
            .hub
            .spreadsheets()
            .batch_update(request, spreadsheet_id)
            .add_scope(AUTH_SCOPE)
            .doit()
            .await
            .map_err(|e| AppError::Sheets(format!("Failed to apply batch update: {}", e)))?;

        Ok(response)
    }

    #[instrument(name = "Fetching spreadsheet", skip(self))]
    async fn get(&self, spreadsheet_id: &str) -> Result<Spreadsheet> {
        let (_, spreadsheet) = self
            .hub
            .spreadsheets()
            .get(spreadsheet_id)
            .include_grid_data(false)
            .add_scope(AUTH_SCOPE)
            .doit()
            .await
            .map_err(|e| AppError::Sheets(format!("Failed to get spreadsheet: {}", e)))?;

        Ok(spreadsheet)
    }
}
