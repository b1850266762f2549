//! Sky condition classification
//!
//! Maps the free-text weather description of a row to a closed set of
//! pictographic categories. Matching is case-insensitive substring search
//! over an ordered rule table; the first matching phrase wins and unmatched
//! descriptions fall back to [`SkyCondition::PartlyCloudy`].

use serde::{Deserialize, Serialize};

/// Pictographic weather category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkyCondition {
    /// Clear sky
    Clear,
    /// Few or scattered clouds (also the fallback category)
    PartlyCloudy,
    /// Overcast or heavy clouds
    Cloudy,
    /// Light rain
    LightRain,
    /// Rain
    Rain,
    /// Thunderstorm
    Thunderstorm,
    /// Snow
    Snow,
    /// Fog or mist
    Fog,
    /// Drizzle
    Drizzle,
}

/// Ordered phrase rules, evaluated top to bottom; first match wins.
///
/// Order is load-bearing: `chuva leve` must precede `chuva`, and
/// `nuvens carregadas` stays after `nublado` as in the source table.
const RULES: &[(&[&str], SkyCondition)] = &[
    (&["céu limpo"], SkyCondition::Clear),
    (&["poucas nuvens", "nuvens dispersas"], SkyCondition::PartlyCloudy),
    (&["nublado"], SkyCondition::Cloudy),
    (&["chuva leve"], SkyCondition::LightRain),
    (&["chuva"], SkyCondition::Rain),
    (&["trovoada"], SkyCondition::Thunderstorm),
    (&["neve"], SkyCondition::Snow),
    (&["névoa", "neblina"], SkyCondition::Fog),
    (&["nuvens carregadas"], SkyCondition::Cloudy),
    (&["garoa"], SkyCondition::Drizzle),
];

impl SkyCondition {
    /// Classify a free-text weather description
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::value_objects::SkyCondition;
    ///
    /// assert_eq!(SkyCondition::classify("céu limpo"), SkyCondition::Clear);
    /// assert_eq!(SkyCondition::classify("chuva leve"), SkyCondition::LightRain);
    /// assert_eq!(
    ///     SkyCondition::classify("tempestade de poeira"),
    ///     SkyCondition::PartlyCloudy,
    /// );
    /// ```
    #[must_use]
    pub fn classify(description: &str) -> Self {
        let normalized = description.to_lowercase();
        for (phrases, condition) in RULES {
            if phrases.iter().any(|phrase| normalized.contains(phrase)) {
                return *condition;
            }
        }
        Self::PartlyCloudy
    }

    /// Get an emoji representation of the sky condition
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Clear => "☀️",
            Self::PartlyCloudy => "⛅",
            Self::Cloudy => "☁️",
            Self::LightRain => "🌦️",
            Self::Rain | Self::Drizzle => "🌧️",
            Self::Thunderstorm => "⛈️",
            Self::Snow => "🌨️",
            Self::Fog => "🌫️",
        }
    }

    /// Get a human-readable label for the sky condition
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Clear => "céu limpo",
            Self::PartlyCloudy => "parcialmente nublado",
            Self::Cloudy => "nublado",
            Self::LightRain => "chuva leve",
            Self::Rain => "chuva",
            Self::Thunderstorm => "trovoada",
            Self::Snow => "neve",
            Self::Fog => "névoa",
            Self::Drizzle => "garoa",
        }
    }
}

impl std::fmt::Display for SkyCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.emoji())
    }
}
