//! Application state shared across handlers

use std::sync::Arc;

use application::DashboardService;
use infrastructure::TemplateEngine;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Dashboard service building the forecast view
    pub dashboard: Arc<DashboardService>,
    /// Template engine rendering the pages
    pub templates: TemplateEngine,
    /// Title shown on the forecast page
    pub title: String,
}
