//! Google Sheets API response models

use serde::{Deserialize, Serialize};

/// Response of the spreadsheet `values.get` endpoint
///
/// The API omits the `values` field entirely when the requested range holds
/// no data, and omits trailing empty cells within each row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetTable {
    /// Range the values cover, as echoed by the API
    pub range: String,

    /// Row-major (`ROWS`) or column-major (`COLUMNS`)
    #[serde(rename = "majorDimension")]
    pub major_dimension: String,

    /// Cell values; `None` when the range is empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<Vec<String>>>,
}

impl SheetTable {
    /// Whether the table carries no values at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.as_ref().is_none_or(Vec::is_empty)
    }

    /// The header row, when present
    #[must_use]
    pub fn header(&self) -> Option<&[String]> {
        self.values
            .as_ref()
            .and_then(|rows| rows.first())
            .map(Vec::as_slice)
    }

    /// The data rows following the header
    #[must_use]
    pub fn data_rows(&self) -> &[Vec<String>] {
        self.values
            .as_ref()
            .and_then(|rows| rows.get(1..))
            .unwrap_or(&[])
    }
}
