//! TempPad HTTP presentation layer
//!
//! Serves the dashboard pages over axum: the forecast page driven by query
//! parameters, the two static pages and the health probes.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
