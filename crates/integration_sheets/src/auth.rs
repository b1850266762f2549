//! Service-account authentication
//!
//! Implements the Google JWT-bearer grant: sign an RS256 assertion with the
//! service-account private key, exchange it at the token endpoint, and cache
//! the access token until shortly before it expires.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use parking_lot::Mutex;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::SheetsError;

/// OAuth scope required for spreadsheet access
pub const SPREADSHEET_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";

/// JWT-bearer grant type identifier
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Assertion lifetime in seconds; Google caps assertions at one hour
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// A cached token within this window of its expiry is refreshed
const REFRESH_MARGIN_SECS: i64 = 60;

fn default_token_uri() -> String {
    "https://oauth2.googleapis.com/token".to_string()
}

/// Service-account key material
///
/// Matches the JSON key file Google issues for a service account. Key files
/// passed through environment variables often carry the private key with
/// literal `\n` escapes; those are normalized before PEM parsing. The key is
/// held in [`SecretString`] and never logged.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    /// Google Cloud project the account belongs to
    #[serde(default)]
    pub project_id: String,

    /// Identifier of this key within the service account
    #[serde(default)]
    pub private_key_id: String,

    /// PEM-encoded RSA private key
    pub private_key: SecretString,

    /// Service-account email, used as the assertion issuer
    pub client_email: String,

    /// Endpoint the signed assertion is exchanged at
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

impl ServiceAccountKey {
    /// Parse a key from the JSON key-file format
    pub fn from_json(raw: &str) -> Result<Self, SheetsError> {
        serde_json::from_str(raw).map_err(|e| SheetsError::InvalidKey(e.to_string()))
    }

    /// Load a key from a JSON key file on disk
    pub fn from_file(path: &std::path::Path) -> Result<Self, SheetsError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            SheetsError::InvalidKey(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json(&raw)
    }

    /// Build the signing key, normalizing literal `\n` escapes to newlines
    fn encoding_key(&self) -> Result<EncodingKey, SheetsError> {
        let pem = self.private_key.expose_secret().replace("\\n", "\n");
        EncodingKey::from_rsa_pem(pem.as_bytes())
            .map_err(|e| SheetsError::InvalidKey(e.to_string()))
    }

    /// Sign a one-hour JWT-bearer assertion for the spreadsheet scope
    fn sign_assertion(&self, now: DateTime<Utc>) -> Result<String, SheetsError> {
        let issued_at = now.timestamp();
        let claims = AssertionClaims {
            iss: &self.client_email,
            scope: SPREADSHEET_SCOPE,
            aud: &self.token_uri,
            iat: issued_at,
            exp: issued_at + ASSERTION_LIFETIME_SECS,
        };

        jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &self.encoding_key()?)
            .map_err(|e| SheetsError::InvalidKey(e.to_string()))
    }
}

/// Claim set of the JWT-bearer assertion
#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

/// Token endpoint response
#[derive(Debug, Clone, Deserialize)]
struct AccessTokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        self.expires_at - Duration::seconds(REFRESH_MARGIN_SECS) > now
    }
}

/// Provider of bearer tokens for the Sheets API
///
/// Tokens are cached and reused until they come within
/// [`REFRESH_MARGIN_SECS`] of expiry.
pub struct AccessTokenProvider {
    key: ServiceAccountKey,
    client: Client,
    cached: Mutex<Option<CachedToken>>,
}

impl fmt::Debug for AccessTokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessTokenProvider")
            .field("client_email", &self.key.client_email)
            .field("token_uri", &self.key.token_uri)
            .finish_non_exhaustive()
    }
}

impl AccessTokenProvider {
    /// Create a provider for the given key, reusing an existing HTTP client
    pub fn new(key: ServiceAccountKey, client: Client) -> Self {
        Self {
            key,
            client,
            cached: Mutex::new(None),
        }
    }

    /// Get a bearer token, reusing the cached one while it is fresh
    #[instrument(skip(self))]
    pub async fn bearer_token(&self) -> Result<String, SheetsError> {
        let now = Utc::now();
        {
            let cached = self.cached.lock();
            if let Some(token) = cached.as_ref() {
                if token.is_fresh(now) {
                    return Ok(token.access_token.clone());
                }
            }
        }

        let token = self.request_token(now).await?;
        let access_token = token.access_token.clone();
        *self.cached.lock() = Some(token);
        Ok(access_token)
    }

    /// Exchange a fresh assertion at the token endpoint
    async fn request_token(&self, now: DateTime<Utc>) -> Result<CachedToken, SheetsError> {
        let assertion = self.key.sign_assertion(now)?;

        debug!(token_uri = %self.key.token_uri, "requesting access token");

        let response = self
            .client
            .post(&self.key.token_uri)
            .form(&[
                ("grant_type", JWT_BEARER_GRANT),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SheetsError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::BAD_REQUEST
            || status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            let body = response.text().await.unwrap_or_default();
            return Err(SheetsError::AuthFailed(format!("HTTP {status}: {body}")));
        }
        if status.is_server_error() {
            return Err(SheetsError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(SheetsError::RequestFailed(format!("HTTP {status}")));
        }

        let token: AccessTokenResponse = response
            .json()
            .await
            .map_err(|e| SheetsError::ParseError(e.to_string()))?;

        Ok(CachedToken {
            access_token: token.access_token,
            expires_at: now + Duration::seconds(token.expires_in),
        })
    }
}
