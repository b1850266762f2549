//! Sheets client errors

use thiserror::Error;

/// Errors raised by the Sheets client and its token provider
#[derive(Debug, Error)]
pub enum SheetsError {
    /// Connection to the service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Credentials were rejected
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// Service-account key material is malformed
    #[error("Invalid service-account key: {0}")]
    InvalidKey(String),

    /// Failed to parse a response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}
