//! Weather provider configuration.

use std::time::Duration;

use domain::value_objects::DayGrouping;
use integration_openweather::OpenWeatherConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Weather provider configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Provider credential (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Candidates requested per location search
    #[serde(default = "default_geocoding_limit")]
    pub geocoding_limit: u8,

    /// How forecast samples are grouped into days
    #[serde(default)]
    pub day_grouping: DayGrouping,

    /// Quiet period before a suggestion lookup fires, in milliseconds
    #[serde(default = "default_suggestion_debounce_ms")]
    pub suggestion_debounce_ms: u64,
}

impl std::fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("base_url", &self.base_url)
            .field(
                "api_key",
                &if self.api_key.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("timeout_secs", &self.timeout_secs)
            .field("geocoding_limit", &self.geocoding_limit)
            .field("day_grouping", &self.day_grouping)
            .field("suggestion_debounce_ms", &self.suggestion_debounce_ms)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

const fn default_timeout() -> u64 {
    10
}

const fn default_geocoding_limit() -> u8 {
    5
}

const fn default_suggestion_debounce_ms() -> u64 {
    500
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout(),
            geocoding_limit: default_geocoding_limit(),
            day_grouping: DayGrouping::default(),
            suggestion_debounce_ms: default_suggestion_debounce_ms(),
        }
    }
}

impl WeatherConfig {
    /// Whether a non-blank credential is present
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().trim().is_empty())
    }

    /// Fill the credential from a fallback source when none is configured
    pub fn apply_fallback_api_key(&mut self, value: Option<String>) {
        if self.has_api_key() {
            return;
        }
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            self.api_key = Some(SecretString::from(value));
        }
    }

    #[must_use]
    pub const fn suggestion_debounce(&self) -> Duration {
        Duration::from_millis(self.suggestion_debounce_ms)
    }

    /// Client configuration for the OpenWeatherMap integration
    #[must_use]
    pub fn to_client_config(&self) -> OpenWeatherConfig {
        OpenWeatherConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            timeout_secs: self.timeout_secs,
            geocoding_limit: self.geocoding_limit,
        }
    }
}
