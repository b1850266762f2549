//! Dashboard view models
//!
//! Display-ready representations of sheet rows. Every numeric cell is
//! normalized and formatted here so templates only interpolate strings.
//!
//! Rounding policy per field:
//! - temperatures, rain probability, humidity: whole numbers (`24°C`, `45%`)
//! - visibility: two decimals, no space (`10.00km`)
//! - wind speed: two decimals with a space (`12.50 km/h`)
//! - sunrise, sunset, wind direction: raw cell text

use domain::{SkyCondition, WeatherRow, columns, normalize, normalize_probability};
use serde::{Deserialize, Serialize};

/// Rain-alert line of a card
///
/// Built from the optional alert column. The line is highlighted when the
/// cell reads `alerta` (any casing); any other non-empty text renders as a
/// plain informational line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RainAlert {
    /// Trimmed alert cell text
    pub message: String,
    /// Whether the line is rendered highlighted
    pub active: bool,
}

impl RainAlert {
    /// Build from the alert cell; empty or whitespace cells carry no alert
    #[must_use]
    pub fn from_cell(cell: &str) -> Option<Self> {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            active: trimmed.eq_ignore_ascii_case("alerta"),
            message: trimmed.to_string(),
        })
    }
}

/// One formatted dashboard card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityCard {
    /// City name
    pub city: String,
    /// State code
    pub region: String,
    /// Pictograph for the description
    pub emoji: String,
    /// Raw weather description
    pub description: String,
    /// Current temperature, whole degrees
    pub temperature: String,
    /// Perceived temperature, whole degrees
    pub feels_like: String,
    /// Daily maximum, whole degrees
    pub max_temperature: String,
    /// Daily minimum, whole degrees
    pub min_temperature: String,
    /// Rain probability, whole percent, clamped to 100
    pub rain_probability: String,
    /// Relative humidity, whole percent
    pub humidity: String,
    /// Visibility distance, two decimals
    pub visibility: String,
    /// Sunrise time as given by the sheet
    pub sunrise: String,
    /// Sunset time as given by the sheet
    pub sunset: String,
    /// Wind speed, two decimals
    pub wind_speed: String,
    /// Wind direction as given by the sheet
    pub wind_direction: String,
    /// Optional alert line
    pub rain_alert: Option<RainAlert>,
}

impl CityCard {
    /// Format a sheet row into a display-ready card
    #[must_use]
    pub fn from_row(row: &WeatherRow) -> Self {
        let condition = SkyCondition::classify(row.get(columns::DESCRIPTION));
        Self {
            city: row.city().to_string(),
            region: row.region().to_string(),
            emoji: condition.emoji().to_string(),
            description: row.get(columns::DESCRIPTION).to_string(),
            temperature: degrees(row.get(columns::TEMPERATURE)),
            feels_like: degrees(row.get(columns::FEELS_LIKE)),
            max_temperature: degrees(row.get(columns::MAX_TEMPERATURE)),
            min_temperature: degrees(row.get(columns::MIN_TEMPERATURE)),
            rain_probability: percent_clamped(row.get(columns::RAIN_PROBABILITY)),
            humidity: percent(row.get(columns::HUMIDITY)),
            visibility: kilometers(row.get(columns::VISIBILITY)),
            sunrise: row.get(columns::SUNRISE).to_string(),
            sunset: row.get(columns::SUNSET).to_string(),
            wind_speed: speed(row.get(columns::WIND_SPEED)),
            wind_direction: row.get(columns::WIND_DIRECTION).to_string(),
            rain_alert: RainAlert::from_cell(row.get(columns::RAIN_ALERT)),
        }
    }
}

/// The assembled forecast page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastView {
    /// Unique state codes in sheet order
    pub regions: Vec<String>,
    /// Region the cards are filtered to; `None` when the sheet is empty
    pub selected_region: Option<String>,
    /// City substring the cards are filtered by
    pub city_query: String,
    /// Formatted cards in sheet order
    pub cards: Vec<CityCard>,
}

impl ForecastView {
    /// Whether the sheet returned any rows at all
    #[must_use]
    pub fn has_data(&self) -> bool {
        !self.regions.is_empty()
    }
}

fn degrees(raw: &str) -> String {
    format!("{}°C", whole(normalize(raw)))
}

fn percent(raw: &str) -> String {
    format!("{}%", whole(normalize(raw)))
}

fn percent_clamped(raw: &str) -> String {
    format!("{}%", whole(normalize_probability(raw)))
}

fn kilometers(raw: &str) -> String {
    format!("{:.2}km", normalize(raw))
}

fn speed(raw: &str) -> String {
    format!("{:.2} km/h", normalize(raw))
}

// Sheet readings stay far inside i64 range.
#[allow(clippy::cast_possible_truncation)]
fn whole(value: f64) -> i64 {
    value.round() as i64
}
