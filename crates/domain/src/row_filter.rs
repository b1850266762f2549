//! Row filtering
//!
//! Selects the rows a dashboard view shows: exact match on the state code,
//! case-insensitive substring match on the city name. Rows keep their
//! original sheet order.

use serde::{Deserialize, Serialize};

use crate::entities::WeatherRow;

/// User-supplied view criteria
///
/// # Examples
///
/// ```
/// use domain::row_filter::RowSelection;
///
/// let selection = RowSelection::new("SP", "cam");
/// assert_eq!(selection.region, "SP");
/// assert_eq!(selection.city_query, "cam");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowSelection {
    /// State code the region column must equal exactly
    pub region: String,
    /// Substring the city column must contain, case-insensitively;
    /// empty matches every city
    pub city_query: String,
}

impl RowSelection {
    /// Create a selection
    pub fn new(region: impl Into<String>, city_query: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            city_query: city_query.into(),
        }
    }
}

/// Filter rows by a selection, preserving original order
///
/// Returns an empty vector when nothing matches or `rows` is empty.
#[must_use]
pub fn filter_rows<'a>(rows: &'a [WeatherRow], selection: &RowSelection) -> Vec<&'a WeatherRow> {
    let query = selection.city_query.to_lowercase();
    rows.iter()
        .filter(|row| row.region() == selection.region)
        .filter(|row| row.city().to_lowercase().contains(&query))
        .collect()
}

/// Unique region codes in encounter order
///
/// Empty region cells are skipped; they would render as a blank selector
/// entry.
#[must_use]
pub fn regions(rows: &[WeatherRow]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for row in rows {
        let region = row.region();
        if !region.is_empty() && !seen.iter().any(|known| known == region) {
            seen.push(region.to_string());
        }
    }
    seen
}
