//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Dashboard pages
        .route("/", get(handlers::dashboard::forecast))
        .route("/sobre", get(handlers::pages::about))
        .route("/saiba-mais", get(handlers::pages::learn_more))
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Attach state
        .with_state(state)
}
