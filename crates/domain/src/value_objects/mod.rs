//! Value Objects - Immutable, identity-less domain primitives

mod reading;
mod sky_condition;

pub use reading::{normalize, normalize_probability};
pub use sky_condition::SkyCondition;
