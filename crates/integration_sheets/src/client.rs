//! Google Sheets values client
//!
//! HTTP client for the spreadsheet `values.get` endpoint, authenticated via
//! [`AccessTokenProvider`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    auth::{AccessTokenProvider, ServiceAccountKey},
    error::SheetsError,
    models::SheetTable,
};

/// Sheets client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetsConfig {
    /// Sheets API base URL (default: <https://sheets.googleapis.com>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Identifier of the spreadsheet holding the weather rows
    pub spreadsheet_id: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://sheets.googleapis.com".to_string()
}

const fn default_timeout() -> u64 {
    30
}

/// Spreadsheet client trait for fetching cell ranges
#[async_trait]
pub trait SpreadsheetClient: Send + Sync {
    /// Fetch a range of cells
    ///
    /// Returns `Ok(None)` when the range holds no data at all (the API omits
    /// the `values` field in that case).
    async fn fetch_range(&self, range: &str) -> Result<Option<SheetTable>, SheetsError>;

    /// Check if the service is reachable and the credentials are accepted
    async fn is_available(&self) -> bool;
}

/// Google Sheets HTTP client implementation
#[derive(Debug)]
pub struct GoogleSheetsClient {
    client: Client,
    config: SheetsConfig,
    tokens: AccessTokenProvider,
}

impl GoogleSheetsClient {
    /// Create a new Sheets client for the given configuration and key
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: SheetsConfig, key: ServiceAccountKey) -> Result<Self, SheetsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SheetsError::ConnectionFailed(e.to_string()))?;
        let tokens = AccessTokenProvider::new(key, client.clone());

        Ok(Self {
            client,
            config,
            tokens,
        })
    }

    /// Build the `values.get` URL for a range
    fn build_values_url(&self, range: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.config.base_url, self.config.spreadsheet_id, range
        )
    }
}

#[async_trait]
impl SpreadsheetClient for GoogleSheetsClient {
    #[instrument(skip(self))]
    async fn fetch_range(&self, range: &str) -> Result<Option<SheetTable>, SheetsError> {
        let token = self.tokens.bearer_token().await?;
        let url = self.build_values_url(range);

        debug!(url = %url, "fetching sheet range");

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| SheetsError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(SheetsError::AuthFailed(format!("HTTP {status}")));
        }
        if status.is_server_error() {
            return Err(SheetsError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(SheetsError::RequestFailed(format!("HTTP {status}")));
        }

        let table: SheetTable = response
            .json()
            .await
            .map_err(|e| SheetsError::ParseError(e.to_string()))?;

        if table.is_empty() {
            debug!(range = %table.range, "range holds no data");
            return Ok(None);
        }

        Ok(Some(table))
    }

    async fn is_available(&self) -> bool {
        self.tokens.bearer_token().await.is_ok()
    }
}
