//! Forecast orchestration
//!
//! One request runs two provider calls in sequence: current conditions by
//! location text, then the forecast series for the coordinates that call
//! resolved. A failing second call degrades the response to empty hourly and
//! daily sections instead of failing it.

use std::fmt;
use std::sync::Arc;

use domain::entities::ForecastComposite;
use domain::value_objects::{DayGrouping, UnitSystem, utc_offset};
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{RawForecast, WeatherProviderPort};
use crate::services::current_conditions::{extract_coordinates, normalize_current};
use crate::services::forecast_aggregation::{bucketize_hourly, summarize_daily};

/// Assembles the forecast composite for a location
#[derive(Clone)]
pub struct ForecastService {
    provider: Arc<dyn WeatherProviderPort>,
    grouping: DayGrouping,
}

impl fmt::Debug for ForecastService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForecastService")
            .field("grouping", &self.grouping)
            .finish_non_exhaustive()
    }
}

impl ForecastService {
    /// Create a service grouping days by weekday name
    pub fn new(provider: Arc<dyn WeatherProviderPort>) -> Self {
        Self {
            provider,
            grouping: DayGrouping::default(),
        }
    }

    /// Use a different day grouping
    #[must_use]
    pub const fn with_grouping(mut self, grouping: DayGrouping) -> Self {
        self.grouping = grouping;
        self
    }

    /// Day grouping in effect
    pub const fn grouping(&self) -> DayGrouping {
        self.grouping
    }

    /// Whether the underlying provider can be called at all
    pub fn is_configured(&self) -> bool {
        self.provider.is_configured()
    }

    /// Build the composite for `location` in `unit`
    ///
    /// # Errors
    ///
    /// `InvalidInput` for blank locations, `Configuration` when no credential
    /// is set, and whatever the current-conditions call or its normalization
    /// fails with. Forecast-call failures are not errors.
    #[instrument(skip(self), fields(grouping = ?self.grouping))]
    pub async fn forecast(
        &self,
        location: &str,
        unit: UnitSystem,
    ) -> Result<ForecastComposite, ApplicationError> {
        let location = location.trim();
        if location.is_empty() {
            return Err(ApplicationError::InvalidInput(
                "Location parameter is required".to_string(),
            ));
        }
        if !self.provider.is_configured() {
            return Err(ApplicationError::Configuration(
                "weather provider credential is not set".to_string(),
            ));
        }

        let observation = self.provider.current_conditions(location, unit).await?;
        let current = normalize_current(&observation, unit)?;
        let coordinates = extract_coordinates(&observation)?;

        let series = match self.provider.forecast(&coordinates, unit).await {
            Ok(series) => series,
            Err(e) => {
                warn!(error = %e, %coordinates, "Forecast call failed, serving current conditions only");
                RawForecast::default()
            },
        };

        let offset = utc_offset(series.utc_offset_secs.or(observation.utc_offset_secs));
        let hourly_by_day = bucketize_hourly(&series.points, offset, self.grouping);
        let daily = summarize_daily(&series.points, offset, self.grouping);

        debug!(
            samples = series.points.len(),
            days = hourly_by_day.len(),
            "Aggregated forecast series"
        );
        info!(city = %current.city, %unit, "Forecast assembled");

        Ok(ForecastComposite {
            current,
            hourly_by_day,
            daily,
            unit,
            units: unit.profile(),
        })
    }
}
