//! Domain entities - Objects with identity and lifecycle

mod weather_row;

pub use weather_row::{WeatherRow, columns};
