//! Weather provider port
//!
//! Defines the raw observations the pipeline consumes and the two sequential
//! provider calls that produce them.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::value_objects::{GeoLocation, UnitSystem};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Current-weather payload as reported by the provider
///
/// Numeric fields are optional so that the normalizer, not the transport,
/// decides what a usable observation is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawObservation {
    /// Latitude of the resolved place
    pub latitude: Option<f64>,
    /// Longitude of the resolved place
    pub longitude: Option<f64>,
    /// Ambient temperature in the requested unit system
    pub temperature: Option<f64>,
    /// Relative humidity in percent
    pub humidity: Option<f64>,
    /// Wind speed in the provider's base unit (m/s metric, mph imperial)
    pub wind_speed: Option<f64>,
    /// Free-text condition, e.g. "Clouds"
    pub condition: Option<String>,
    /// Precipitation over the last hour
    pub precipitation_last_hour: Option<f64>,
    /// Observation instant
    pub observed_at: Option<DateTime<Utc>>,
    /// Resolved place name
    pub place_name: Option<String>,
    /// ISO country code
    pub country_code: Option<String>,
    /// Shift from UTC of the place, in seconds
    pub utc_offset_secs: Option<i32>,
}

/// One forecast sample
#[derive(Debug, Clone, PartialEq)]
pub struct RawForecastPoint {
    /// Sample instant
    pub instant: DateTime<Utc>,
    /// Temperature
    pub temperature: f64,
    /// Maximum temperature reported for the sample
    pub temperature_max: f64,
    /// Minimum temperature reported for the sample
    pub temperature_min: f64,
    /// Free-text condition
    pub condition: Option<String>,
}

/// Ordered forecast series for one location
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawForecast {
    /// Samples in provider order (typically every 3 hours)
    pub points: Vec<RawForecastPoint>,
    /// Shift from UTC of the location, in seconds
    pub utc_offset_secs: Option<i32>,
}

/// Port for the weather provider
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherProviderPort: Send + Sync {
    /// Whether a provider credential is available
    fn is_configured(&self) -> bool;

    /// Current conditions for a free-text location
    async fn current_conditions(
        &self,
        location: &str,
        unit: UnitSystem,
    ) -> Result<RawObservation, ApplicationError>;

    /// Forecast series for coordinates
    async fn forecast(
        &self,
        location: &GeoLocation,
        unit: UnitSystem,
    ) -> Result<RawForecast, ApplicationError>;
}
