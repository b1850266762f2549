//! Infrastructure layer - Adapters for external systems
//!
//! Implements the ports defined in the application layer over the Sheets
//! client, loads the application configuration, and renders the dashboard
//! HTML through the embedded template engine.

pub mod adapters;
pub mod config;
pub mod templates;

pub use adapters::SheetsAdapter;
pub use config::{AppConfig, CredentialsConfig, DashboardConfig, ServerConfig};
pub use templates::{TemplateContext, TemplateEngine, TemplateError};
