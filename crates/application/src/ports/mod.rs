//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod weather_table;

#[cfg(test)]
pub use weather_table::MockWeatherTablePort;
pub use weather_table::WeatherTablePort;
