//! Service-account credential location.

use integration_sheets::{ServiceAccountKey, SheetsError};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Where the service-account key comes from
///
/// Either a JSON key file on disk (`key_file`) or the key-file JSON passed
/// inline (`key_json`, e.g. `TEMPPAD_CREDENTIALS__KEY_JSON`). The inline
/// variant is held in [`SecretString`] and never serialized or logged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Path to the JSON key file
    #[serde(default)]
    pub key_file: Option<String>,

    /// Key-file JSON passed inline (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub key_json: Option<SecretString>,
}

impl CredentialsConfig {
    /// Whether any credential source is configured
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.key_file.is_some() || self.key_json.is_some()
    }

    /// Load the service-account key from the configured source
    ///
    /// The inline JSON takes precedence over the file path.
    pub fn load_key(&self) -> Result<ServiceAccountKey, SheetsError> {
        if let Some(raw) = &self.key_json {
            return ServiceAccountKey::from_json(raw.expose_secret());
        }
        if let Some(path) = &self.key_file {
            return ServiceAccountKey::from_file(std::path::Path::new(path));
        }
        Err(SheetsError::InvalidKey(
            "no service-account key configured (set credentials.key_file or key_json)".to_string(),
        ))
    }
}
