//! Sheets adapter - Implements WeatherTablePort using integration_sheets

use std::sync::Arc;

use application::{error::ApplicationError, ports::WeatherTablePort};
use async_trait::async_trait;
use domain::WeatherRow;
use integration_sheets::{SheetTable, SheetsError, SpreadsheetClient};
use tracing::{debug, instrument};

/// Range holding the weather rows; the first row is the header
pub const WEATHER_RANGE: &str = "city!A1:Q";

/// Adapter exposing a spreadsheet range as the weather table port
pub struct SheetsAdapter {
    client: Arc<dyn SpreadsheetClient>,
    range: String,
}

impl std::fmt::Debug for SheetsAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetsAdapter")
            .field("range", &self.range)
            .finish_non_exhaustive()
    }
}

impl SheetsAdapter {
    /// Create an adapter reading the default weather range
    pub fn new(client: Arc<dyn SpreadsheetClient>) -> Self {
        Self::with_range(client, WEATHER_RANGE)
    }

    /// Create an adapter reading a specific range
    pub fn with_range(client: Arc<dyn SpreadsheetClient>, range: impl Into<String>) -> Self {
        Self {
            client,
            range: range.into(),
        }
    }

    /// Map a sheets error to an application error
    fn map_error(err: SheetsError) -> ApplicationError {
        match err {
            SheetsError::AuthFailed(e) | SheetsError::InvalidKey(e) => {
                ApplicationError::NotAuthorized(e)
            },
            SheetsError::ConnectionFailed(e)
            | SheetsError::RequestFailed(e)
            | SheetsError::ServiceUnavailable(e) => ApplicationError::TableSource(e),
            SheetsError::ParseError(e) => ApplicationError::Internal(e),
        }
    }

    /// Convert a fetched table into rows, the first row defining the columns
    fn table_to_rows(table: &SheetTable) -> Vec<WeatherRow> {
        table.header().map_or_else(Vec::new, |header| {
            table
                .data_rows()
                .iter()
                .map(|values| WeatherRow::from_cells(header, values.clone()))
                .collect()
        })
    }
}

#[async_trait]
impl WeatherTablePort for SheetsAdapter {
    #[instrument(skip(self), fields(range = %self.range))]
    async fn fetch_rows(&self) -> Result<Vec<WeatherRow>, ApplicationError> {
        let table = self
            .client
            .fetch_range(&self.range)
            .await
            .map_err(Self::map_error)?;

        // An absent range and a header-only range both yield zero rows
        let rows = table.as_ref().map_or_else(Vec::new, Self::table_to_rows);

        debug!(rows = rows.len(), "sheet rows fetched");
        Ok(rows)
    }

    async fn is_available(&self) -> bool {
        self.client.is_available().await
    }
}
