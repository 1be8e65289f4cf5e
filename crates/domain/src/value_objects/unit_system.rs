//! Unit system value object
//!
//! The provider is queried in the requested system and reports temperature
//! natively in it. Wind speed is scaled from metres per second to km/h for
//! metric requests. Precipitation volumes are millimetres in both systems.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::UnitSystem;
//!
//! let unit = UnitSystem::resolve(Some("imperial"));
//! assert_eq!(unit, UnitSystem::Imperial);
//! assert_eq!(unit.profile().wind_speed_unit, "mph");
//!
//! // Anything unrecognized falls back to metric
//! assert_eq!(UnitSystem::resolve(Some("kelvin")), UnitSystem::Metric);
//! assert_eq!(UnitSystem::resolve(None), UnitSystem::Metric);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Measurement system requested by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Celsius, km/h, millimetres
    #[default]
    Metric,
    /// Fahrenheit, mph, millimetres
    Imperial,
}

/// Unit labels and wind conversion for one unit system
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitProfile {
    /// Temperature unit label
    pub temperature_unit: &'static str,
    /// Wind speed unit label
    pub wind_speed_unit: &'static str,
    /// Precipitation unit label
    pub precipitation_unit: &'static str,
    /// Multiplier applied to the provider's wind speed
    #[serde(skip)]
    pub wind_speed_scale: f64,
}

impl UnitProfile {
    /// Convert a provider wind speed into the profile's wind unit
    #[must_use]
    pub fn scale_wind_speed(&self, provider_value: f64) -> f64 {
        provider_value * self.wind_speed_scale
    }
}

const METRIC_PROFILE: UnitProfile = UnitProfile {
    temperature_unit: "°C",
    wind_speed_unit: "km/h",
    precipitation_unit: "mm",
    wind_speed_scale: 3.6,
};

const IMPERIAL_PROFILE: UnitProfile = UnitProfile {
    temperature_unit: "°F",
    wind_speed_unit: "mph",
    precipitation_unit: "mm",
    wind_speed_scale: 1.0,
};

impl UnitSystem {
    /// Resolve an optional request token, defaulting to metric
    #[must_use]
    pub fn resolve(token: Option<&str>) -> Self {
        token.and_then(|t| t.parse().ok()).unwrap_or_default()
    }

    /// Token used on the wire, both towards the client and the provider
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }

    /// Conversion profile for this system
    #[must_use]
    pub const fn profile(self) -> UnitProfile {
        match self {
            Self::Metric => METRIC_PROFILE,
            Self::Imperial => IMPERIAL_PROFILE,
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" => Ok(Self::Metric),
            "imperial" => Ok(Self::Imperial),
            _ => Err(DomainError::InvalidUnitSystem(s.to_string())),
        }
    }
}
