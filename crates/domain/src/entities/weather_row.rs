//! Weather row entity
//!
//! One row of the source sheet: a mapping from column name to raw string
//! value, one per city-per-day observation. All values arrive as strings,
//! possibly carrying unit suffixes (`°C`, `%`, `km`, `km/h`) and decimal
//! commas.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Column names of the source sheet.
///
/// The first fetched row is the header and must carry exactly these names;
/// they define the columns for every subsequent row.
pub mod columns {
    /// Two-letter state code (unidade federativa)
    pub const REGION: &str = "UF";
    /// City name
    pub const CITY: &str = "Cidade";
    /// Free-text weather description
    pub const DESCRIPTION: &str = "Descrição";
    /// Current temperature
    pub const TEMPERATURE: &str = "Temperatura";
    /// Perceived temperature
    pub const FEELS_LIKE: &str = "Sensação Térmica";
    /// Daily maximum temperature
    pub const MAX_TEMPERATURE: &str = "Máxima";
    /// Daily minimum temperature
    pub const MIN_TEMPERATURE: &str = "Mínima";
    /// Rain probability percentage
    pub const RAIN_PROBABILITY: &str = "Possibilidade de chuva";
    /// Relative humidity percentage
    pub const HUMIDITY: &str = "Umidade";
    /// Visibility distance
    pub const VISIBILITY: &str = "Visibilidade";
    /// Sunrise time
    pub const SUNRISE: &str = "Nascer do sol";
    /// Sunset time (the sheet header carries no accent)
    pub const SUNSET: &str = "Por do sol";
    /// Wind speed
    pub const WIND_SPEED: &str = "Velocidade dos ventos";
    /// Wind direction
    pub const WIND_DIRECTION: &str = "Direção dos ventos";
    /// Optional rain-alert flag
    pub const RAIN_ALERT: &str = "Alerta de chuva";
}

/// A single city-per-day observation keyed by column name
///
/// Cells the source omits (trailing empty cells are not transmitted) are
/// absent from the map; [`WeatherRow::get`] reads them as `""` so downstream
/// formatting treats missing and empty cells identically.
///
/// # Examples
///
/// ```
/// use domain::entities::{WeatherRow, columns};
///
/// let header = vec!["UF".to_string(), "Cidade".to_string()];
/// let row = WeatherRow::from_cells(&header, vec!["SP".to_string(), "Campinas".to_string()]);
///
/// assert_eq!(row.region(), "SP");
/// assert_eq!(row.get(columns::CITY), "Campinas");
/// assert_eq!(row.get(columns::HUMIDITY), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherRow {
    cells: HashMap<String, String>,
}

impl WeatherRow {
    /// Create an empty row
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row by zipping a header row with one data row
    ///
    /// Values beyond the header length are dropped; header columns without a
    /// value stay absent.
    #[must_use]
    pub fn from_cells(header: &[String], values: Vec<String>) -> Self {
        let cells = header.iter().cloned().zip(values).collect();
        Self { cells }
    }

    /// Set a single cell, consuming and returning the row
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.cells.insert(column.into(), value.into());
        self
    }

    /// Read a cell by column name; absent cells read as `""`
    #[must_use]
    pub fn get(&self, column: &str) -> &str {
        self.cells.get(column).map_or("", String::as_str)
    }

    /// State code cell
    #[must_use]
    pub fn region(&self) -> &str {
        self.get(columns::REGION)
    }

    /// City name cell
    #[must_use]
    pub fn city(&self) -> &str {
        self.get(columns::CITY)
    }

    /// Number of populated cells
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the row has no populated cells
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> Vec<String> {
        vec![
            columns::REGION.to_string(),
            columns::CITY.to_string(),
            columns::TEMPERATURE.to_string(),
            columns::RAIN_ALERT.to_string(),
        ]
    }

    #[test]
    fn from_cells_zips_header_and_values() {
        let row = WeatherRow::from_cells(
            &header(),
            vec![
                "SP".to_string(),
                "Campinas".to_string(),
                "23,5°C".to_string(),
                "alerta".to_string(),
            ],
        );

        assert_eq!(row.region(), "SP");
        assert_eq!(row.city(), "Campinas");
        assert_eq!(row.get(columns::TEMPERATURE), "23,5°C");
        assert_eq!(row.get(columns::RAIN_ALERT), "alerta");
        assert_eq!(row.len(), 4);
    }

    #[test]
    fn ragged_row_leaves_trailing_cells_absent() {
        let row = WeatherRow::from_cells(&header(), vec!["RJ".to_string(), "Niterói".to_string()]);

        assert_eq!(row.region(), "RJ");
        assert_eq!(row.city(), "Niterói");
        assert_eq!(row.get(columns::TEMPERATURE), "");
        assert_eq!(row.get(columns::RAIN_ALERT), "");
        assert_eq!(row.len(), 2);
    }

    #[test]
    fn extra_values_beyond_header_are_dropped() {
        let row = WeatherRow::from_cells(
            &[columns::REGION.to_string()],
            vec!["MG".to_string(), "ignored".to_string()],
        );

        assert_eq!(row.region(), "MG");
        assert_eq!(row.len(), 1);
    }

    #[test]
    fn unknown_column_reads_empty() {
        let row = WeatherRow::new().with(columns::CITY, "Santos");
        assert_eq!(row.get("Pressão"), "");
    }

    #[test]
    fn with_overwrites_existing_cell() {
        let row = WeatherRow::new()
            .with(columns::CITY, "Santos")
            .with(columns::CITY, "Sorocaba");
        assert_eq!(row.city(), "Sorocaba");
    }

    #[test]
    fn empty_row_reports_empty() {
        let row = WeatherRow::new();
        assert!(row.is_empty());
        assert_eq!(row.len(), 0);
        assert_eq!(row.region(), "");
    }

    #[test]
    fn serialization_round_trip() {
        let row = WeatherRow::new()
            .with(columns::REGION, "SP")
            .with(columns::CITY, "Campinas");

        let json = serde_json::to_string(&row).expect("serialize");
        let parsed: WeatherRow = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(row, parsed);
    }

    #[test]
    fn clone_preserves_cells() {
        let row = WeatherRow::new().with(columns::CITY, "Campinas");
        #[allow(clippy::redundant_clone)]
        let cloned = row.clone();
        assert_eq!(row, cloned);
    }
}
