//! Application state shared across handlers

use std::sync::Arc;

use application::{
    ForecastService, GeocodingPort, LocationSearchService, SuggestionDebouncer, SuggestionUpdate,
    WeatherProviderPort,
};
use infrastructure::AppConfig;
use tokio::sync::mpsc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Current conditions plus forecast aggregation
    pub forecast_service: Arc<ForecastService>,
    /// Location suggestions
    pub location_search: Arc<LocationSearchService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Wire both services from their ports, applying the weather settings
    pub fn new(
        config: AppConfig,
        provider: Arc<dyn WeatherProviderPort>,
        geocoding: Arc<dyn GeocodingPort>,
    ) -> Self {
        let forecast_service =
            ForecastService::new(provider).with_grouping(config.weather.day_grouping);
        let location_search =
            LocationSearchService::new(geocoding).with_limit(config.weather.geocoding_limit);

        Self {
            forecast_service: Arc::new(forecast_service),
            location_search: Arc::new(location_search),
            config: Arc::new(config),
        }
    }

    /// Debounced suggestion lookup using the configured quiet period
    pub fn suggestion_debouncer(
        &self,
    ) -> (SuggestionDebouncer, mpsc::Receiver<SuggestionUpdate>) {
        SuggestionDebouncer::new(
            LocationSearchService::clone(&self.location_search),
            self.config.weather.suggestion_debounce(),
        )
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("forecast_service", &self.forecast_service)
            .field("location_search", &self.location_search)
            .field("environment", &self.config.environment)
            .finish_non_exhaustive()
    }
}
