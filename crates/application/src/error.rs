//! Application-level errors

use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Remote table source failed (network or service trouble)
    #[error("Table source error: {0}")]
    TableSource(String),

    /// Credentials were rejected by the data source
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApplicationError::TableSource(_))
    }
}
