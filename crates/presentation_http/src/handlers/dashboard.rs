//! Forecast page handler
//!
//! The sidebar widgets of the original dashboard arrive here as query
//! parameters: `uf` selects the region, `cidade` filters city names.

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::error;

use crate::{error::ApiError, state::AppState};

/// Query parameters of the forecast page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastQuery {
    /// Selected state code; defaults to the first region in the sheet
    pub uf: Option<String>,
    /// City-name substring filter
    pub cidade: Option<String>,
}

/// Render the forecast page for the requested selection
pub async fn forecast(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> Result<Response, ApiError> {
    let city_query = query.cidade.unwrap_or_default();

    match state.dashboard.forecast(query.uf.as_deref(), &city_query).await {
        Ok(view) => {
            let page = state.templates.render_forecast(&state.title, &view)?;
            Ok(Html(page).into_response())
        },
        Err(err) => {
            error!(error = %err, "forecast fetch failed");
            let api: ApiError = err.into();
            let page = state
                .templates
                .render_error(api.status().as_u16(), api.public_message())?;
            Ok((api.status(), Html(page)).into_response())
        },
    }
}
