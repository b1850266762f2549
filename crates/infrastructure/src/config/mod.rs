//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `dashboard`: sheet range and page title
//! - `credentials`: service-account key location
//!
//! The Sheets client settings (`SheetsConfig`) come from the
//! `integration_sheets` crate and are embedded as the `sheets` section.

mod credentials;
mod dashboard;
mod server;

use integration_sheets::SheetsConfig;
use serde::{Deserialize, Serialize};

pub use credentials::CredentialsConfig;
pub use dashboard::DashboardConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Sheets client configuration
    #[serde(default = "default_sheets")]
    pub sheets: SheetsConfig,

    /// Dashboard configuration
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Service-account credential location
    #[serde(default)]
    pub credentials: CredentialsConfig,
}

/// The spreadsheet id has no usable default; startup validates it
fn default_sheets() -> SheetsConfig {
    SheetsConfig {
        base_url: "https://sheets.googleapis.com".to_string(),
        spreadsheet_id: String::new(),
        timeout_secs: 30,
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            sheets: default_sheets(),
            dashboard: DashboardConfig::default(),
            credentials: CredentialsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// Defaults first, then an optional `config.toml`, then environment
    /// variables prefixed `TEMPPAD` (e.g. `TEMPPAD_SERVER__PORT`,
    /// `TEMPPAD_SHEETS__SPREADSHEET_ID`).
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("sheets.spreadsheet_id", "")?
            .set_default("dashboard.range", dashboard::DEFAULT_RANGE)?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables
            .add_source(env_source());

        let config = builder.build()?;
        config.try_deserialize()
    }
}

/// Environment override source
///
/// Sections are separated by a double underscore so that multi-word keys
/// like `spreadsheet_id` survive the split: `TEMPPAD_SHEETS__SPREADSHEET_ID`
/// maps to `sheets.spreadsheet_id`, `TEMPPAD_CREDENTIALS__KEY_JSON` to
/// `credentials.key_json`.
fn env_source() -> config::Environment {
    config::Environment::with_prefix("TEMPPAD")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
