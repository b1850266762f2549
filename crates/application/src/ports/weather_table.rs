//! Weather table port
//!
//! Defines the interface for fetching dashboard rows from the remote sheet.

use async_trait::async_trait;
use domain::WeatherRow;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the tabular weather data source
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherTablePort: Send + Sync {
    /// Fetch every data row of the weather range
    ///
    /// The first sheet row is the header and defines the column names; it is
    /// not returned. A range with no data yields an empty vector.
    async fn fetch_rows(&self) -> Result<Vec<WeatherRow>, ApplicationError>;

    /// Check if the data source is reachable and the credentials work
    async fn is_available(&self) -> bool;
}
