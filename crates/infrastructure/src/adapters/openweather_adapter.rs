//! OpenWeatherMap adapter - Implements `WeatherProviderPort` and `GeocodingPort`

use application::error::ApplicationError;
use application::ports::{
    GeocodingPort, RawForecast, RawForecastPoint, RawObservation, WeatherProviderPort,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::entities::LocationSuggestion;
use domain::value_objects::{GeoLocation, UnitSystem};
use integration_openweather::{
    CurrentWeatherResponse, ForecastResponse, GeocodingCandidate, OpenWeatherClient,
    OpenWeatherError,
};
use tracing::{debug, instrument};

use crate::config::WeatherConfig;

/// Adapter for the OpenWeatherMap API
#[derive(Debug, Clone)]
pub struct OpenWeatherAdapter {
    client: OpenWeatherClient,
}

impl OpenWeatherAdapter {
    /// Create an adapter from the weather configuration section
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: &WeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherClient::new(config.to_client_config())
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration error to application error
    fn map_error(err: OpenWeatherError) -> ApplicationError {
        match err {
            OpenWeatherError::MissingApiKey => {
                ApplicationError::Configuration("Weather API is not configured".into())
            },
            OpenWeatherError::Unauthorized => {
                ApplicationError::NotAuthorized("Invalid API key".into())
            },
            OpenWeatherError::NotFound => ApplicationError::NotFound("Location not found".into()),
            OpenWeatherError::RateLimitExceeded => {
                ApplicationError::ExternalService("rate limit exceeded".into())
            },
            OpenWeatherError::ServiceUnavailable(e)
            | OpenWeatherError::RequestFailed(e)
            | OpenWeatherError::ConnectionFailed(e) => ApplicationError::ExternalService(e),
            OpenWeatherError::ParseError(e) => ApplicationError::MalformedPayload(e),
        }
    }

    fn to_observation(response: CurrentWeatherResponse) -> RawObservation {
        let condition = response.primary_condition().map(str::to_string);
        let main = response.main.unwrap_or_default();

        RawObservation {
            latitude: response.coord.map(|c| c.lat),
            longitude: response.coord.map(|c| c.lon),
            temperature: main.temp,
            humidity: main.humidity,
            wind_speed: response.wind.and_then(|w| w.speed),
            condition,
            precipitation_last_hour: response.rain.and_then(|r| r.last_hour),
            observed_at: response.dt.and_then(|dt| DateTime::<Utc>::from_timestamp(dt, 0)),
            place_name: response.name,
            country_code: response.sys.and_then(|s| s.country),
            utc_offset_secs: response.timezone,
        }
    }

    fn to_forecast(response: ForecastResponse) -> Result<RawForecast, ApplicationError> {
        let points = response
            .list
            .iter()
            .map(|sample| {
                let instant = DateTime::<Utc>::from_timestamp(sample.dt, 0).ok_or_else(|| {
                    ApplicationError::MalformedPayload(format!(
                        "forecast instant out of range: {}",
                        sample.dt
                    ))
                })?;
                Ok(RawForecastPoint {
                    instant,
                    temperature: sample.main.temp,
                    temperature_max: sample.main.temp_max,
                    temperature_min: sample.main.temp_min,
                    condition: sample.primary_condition().map(str::to_string),
                })
            })
            .collect::<Result<Vec<_>, ApplicationError>>()?;

        Ok(RawForecast {
            points,
            utc_offset_secs: response.city.and_then(|c| c.timezone),
        })
    }

    fn to_suggestion(candidate: GeocodingCandidate) -> LocationSuggestion {
        LocationSuggestion {
            name: candidate.name,
            country: candidate.country,
            state: candidate.state.filter(|s| !s.is_empty()),
            lat: candidate.lat,
            lon: candidate.lon,
        }
    }
}

#[async_trait]
impl WeatherProviderPort for OpenWeatherAdapter {
    fn is_configured(&self) -> bool {
        self.client.is_configured()
    }

    #[instrument(skip(self))]
    async fn current_conditions(
        &self,
        location: &str,
        unit: UnitSystem,
    ) -> Result<RawObservation, ApplicationError> {
        let response = self
            .client
            .current_by_name(location, unit.as_str())
            .await
            .map_err(Self::map_error)?;
        debug!(place = ?response.name, "Current conditions received");
        Ok(Self::to_observation(response))
    }

    #[instrument(skip(self, coordinates), fields(coordinates = %coordinates))]
    async fn forecast(
        &self,
        coordinates: &GeoLocation,
        unit: UnitSystem,
    ) -> Result<RawForecast, ApplicationError> {
        let response = self
            .client
            .forecast_by_coordinates(coordinates.latitude(), coordinates.longitude(), unit.as_str())
            .await
            .map_err(Self::map_error)?;
        debug!(samples = response.list.len(), "Forecast series received");
        Self::to_forecast(response)
    }
}

#[async_trait]
impl GeocodingPort for OpenWeatherAdapter {
    fn is_configured(&self) -> bool {
        self.client.is_configured()
    }

    #[instrument(skip(self))]
    async fn search(
        &self,
        query: &str,
        limit: u8,
    ) -> Result<Vec<LocationSuggestion>, ApplicationError> {
        match self.client.geocode(query, limit).await {
            Ok(candidates) => Ok(candidates.into_iter().map(Self::to_suggestion).collect()),
            Err(OpenWeatherError::NotFound) => Ok(Vec::new()),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}
