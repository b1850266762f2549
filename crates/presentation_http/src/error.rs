//! API error handling
//!
//! Maps application errors to HTTP statuses and renders them as HTML. The
//! public message is a fixed phrase per status; the underlying cause is kept
//! for logging only and never reaches the page.

use application::ApplicationError;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use infrastructure::TemplateError;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// The upstream data source failed or rejected our credentials
    #[error("Bad gateway: {0}")]
    BadGateway(String),

    /// Anything that went wrong on our side
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for the error
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadGateway(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Fixed message shown on the rendered error page
    #[must_use]
    pub const fn public_message(&self) -> &'static str {
        match self {
            Self::BadGateway(_) => "Não foi possível carregar os dados da planilha.",
            Self::Internal(_) => "Ocorreu um erro interno.",
        }
    }
}

impl IntoResponse for ApiError {
    /// Fallback plain page, used when the template engine itself failed
    fn into_response(self) -> Response {
        let status = self.status();
        let body = format!(
            "<!DOCTYPE html><html lang=\"pt-BR\"><head><meta charset=\"UTF-8\">\
             <title>Erro - TempPad</title></head><body><h2>Erro {}</h2><p>{}</p>\
             <p><a href=\"/\">Voltar para a previsão</a></p></body></html>",
            status.as_u16(),
            self.public_message()
        );
        (status, Html(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::TableSource(msg) | ApplicationError::NotAuthorized(msg) => {
                Self::BadGateway(msg)
            },
            ApplicationError::Configuration(msg) | ApplicationError::Internal(msg) => {
                Self::Internal(msg)
            },
        }
    }
}

impl From<TemplateError> for ApiError {
    fn from(err: TemplateError) -> Self {
        Self::Internal(err.to_string())
    }
}
