//! Numeric reading normalization
//!
//! Sheet cells carry numbers as localized strings: unit suffixes (`°C`, `%`,
//! `km`, `km/h`) and decimal commas. [`normalize`] turns them back into
//! plain floats.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::{normalize, normalize_probability};
//!
//! assert_eq!(normalize("23,5°C"), 23.5);
//! assert_eq!(normalize("abc"), 0.0);
//! assert_eq!(normalize_probability("150%"), 100.0);
//! ```

/// Known unit suffixes, longest first so `km/h` wins over `km`.
const UNIT_SUFFIXES: [&str; 4] = ["°C", "km/h", "km", "%"];

/// Maximum rain probability after clamping
const PROBABILITY_CAP: f64 = 100.0;

/// Parse a localized reading into a float
///
/// Strips one known unit suffix and surrounding whitespace, replaces decimal
/// commas with points, then parses. Unparseable input falls back to `0.0`
/// with no error signaled; the source sheet relies on that policy.
#[must_use]
pub fn normalize(raw: &str) -> f64 {
    let mut value = raw.trim();
    for suffix in UNIT_SUFFIXES {
        if let Some(stripped) = value.strip_suffix(suffix) {
            value = stripped.trim_end();
            break;
        }
    }
    value.replace(',', ".").parse().unwrap_or(0.0)
}

/// Parse a rain-probability reading, clamped to at most 100
#[must_use]
pub fn normalize_probability(raw: &str) -> f64 {
    normalize(raw).min(PROBABILITY_CAP)
}
