//! Application layer - Use cases and orchestration
//!
//! Contains the dashboard use case, port definitions, and view models.
//! Orchestrates domain objects and infrastructure adapters.

pub mod error;
pub mod ports;
pub mod services;
pub mod views;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
pub use views::{CityCard, ForecastView, RainAlert};
