//! Dashboard configuration.

use serde::{Deserialize, Serialize};

/// Range holding the weather rows; first row is the header
pub(super) const DEFAULT_RANGE: &str = "city!A1:Q";

/// Dashboard configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Cell range the weather rows are read from
    #[serde(default = "default_range")]
    pub range: String,

    /// Title shown on the forecast page
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_range() -> String {
    DEFAULT_RANGE.to_string()
}

fn default_title() -> String {
    "TempPad - Clima de Hoje".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            range: default_range(),
            title: default_title(),
        }
    }
}
