//! Static page handlers

use axum::{
    extract::State,
    response::Html,
};

use crate::{error::ApiError, state::AppState};

/// About page
pub async fn about(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    Ok(Html(state.templates.render_about()?))
}

/// Learn-more page
pub async fn learn_more(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    Ok(Html(state.templates.render_learn_more()?))
}
