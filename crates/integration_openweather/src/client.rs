//! OpenWeatherMap client
//!
//! HTTP client for the current-weather, forecast and direct-geocoding
//! endpoints. The credential travels as the `appid` query parameter; it is
//! never logged and request errors are stripped of their URL before they are
//! turned into strings.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::{
    CurrentWeatherResponse, ForecastResponse, GeocodingCandidate, ProviderErrorBody,
};

const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";
const FORECAST_PATH: &str = "/data/2.5/forecast";
const GEOCODING_PATH: &str = "/geo/1.0/direct";

/// OpenWeatherMap client errors
#[derive(Debug, Error)]
pub enum OpenWeatherError {
    /// No credential configured
    #[error("API key is not configured")]
    MissingApiKey,

    /// Provider rejected the credential (HTTP 401)
    #[error("API key was rejected")]
    Unauthorized,

    /// Provider does not know the requested place (HTTP 404)
    #[error("Location not found")]
    NotFound,

    /// Rate limit exceeded (HTTP 429)
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Provider answered with a server error
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Provider answered with another unexpected status, or the request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Connection to the provider failed or timed out
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Response body could not be decoded
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// OpenWeatherMap client configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct OpenWeatherConfig {
    /// API base URL (default: <https://api.openweathermap.org>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Provider credential
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum geocoding candidates per query (default: 5)
    #[serde(default = "default_geocoding_limit")]
    pub geocoding_limit: u8,
}

impl std::fmt::Debug for OpenWeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .field("geocoding_limit", &self.geocoding_limit)
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

impl Default for OpenWeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout(),
            geocoding_limit: default_geocoding_limit(),
        }
    }
}

impl OpenWeatherConfig {
    /// Configuration with a credential and default endpoints
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(SecretString::from(api_key.into())),
            ..Self::default()
        }
    }

    /// Whether a non-blank credential is present
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().trim().is_empty())
    }
}

/// OpenWeatherMap HTTP client
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Client,
    config: OpenWeatherConfig,
}

impl OpenWeatherClient {
    /// Create a client from configuration
    ///
    /// A missing credential is not an error here; calls fail with
    /// [`OpenWeatherError::MissingApiKey`] instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: OpenWeatherConfig) -> Result<Self, OpenWeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OpenWeatherError::ConnectionFailed(e.without_url().to_string()))?;

        Ok(Self { client, config })
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.config.has_api_key()
    }

    #[must_use]
    pub const fn geocoding_limit(&self) -> u8 {
        self.config.geocoding_limit
    }

    /// Current conditions for a free-text place name
    ///
    /// `units` is the provider's unit token, `metric` or `imperial`.
    ///
    /// # Errors
    ///
    /// See [`OpenWeatherError`]; an unknown place yields `NotFound`.
    #[instrument(skip(self))]
    pub async fn current_by_name(
        &self,
        location: &str,
        units: &str,
    ) -> Result<CurrentWeatherResponse, OpenWeatherError> {
        self.get_json(
            CURRENT_WEATHER_PATH,
            &[("q", location.to_string()), ("units", units.to_string())],
        )
        .await
    }

    /// Forecast series for coordinates
    ///
    /// # Errors
    ///
    /// See [`OpenWeatherError`].
    #[instrument(skip(self))]
    pub async fn forecast_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
        units: &str,
    ) -> Result<ForecastResponse, OpenWeatherError> {
        self.get_json(
            FORECAST_PATH,
            &[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("units", units.to_string()),
            ],
        )
        .await
    }

    /// Up to `limit` places matching `query`
    ///
    /// # Errors
    ///
    /// See [`OpenWeatherError`].
    #[instrument(skip(self))]
    pub async fn geocode(
        &self,
        query: &str,
        limit: u8,
    ) -> Result<Vec<GeocodingCandidate>, OpenWeatherError> {
        self.get_json(
            GEOCODING_PATH,
            &[("q", query.to_string()), ("limit", limit.to_string())],
        )
        .await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, OpenWeatherError> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or(OpenWeatherError::MissingApiKey)?;

        let url = format!("{}{path}", self.config.base_url.trim_end_matches('/'));
        debug!(endpoint = path, "Calling OpenWeatherMap");

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("appid", api_key.expose_secret())])
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                if e.is_connect() || e.is_timeout() {
                    OpenWeatherError::ConnectionFailed(e.to_string())
                } else {
                    OpenWeatherError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body: ProviderErrorBody = response.json().await.unwrap_or_default();
            warn!(
                endpoint = path,
                %status,
                message = body.message.as_deref().unwrap_or(""),
                "OpenWeatherMap returned an error status"
            );
            return Err(Self::status_error(status));
        }

        response
            .json()
            .await
            .map_err(|e| OpenWeatherError::ParseError(e.without_url().to_string()))
    }

    fn status_error(status: StatusCode) -> OpenWeatherError {
        match status {
            StatusCode::NOT_FOUND => OpenWeatherError::NotFound,
            StatusCode::UNAUTHORIZED => OpenWeatherError::Unauthorized,
            StatusCode::TOO_MANY_REQUESTS => OpenWeatherError::RateLimitExceeded,
            s if s.is_server_error() => OpenWeatherError::ServiceUnavailable(format!("HTTP {s}")),
            s => OpenWeatherError::RequestFailed(format!("HTTP {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = OpenWeatherConfig::default();
        assert_eq!(config.base_url, "https://api.openweathermap.org");
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.geocoding_limit, 5);
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = OpenWeatherConfig::with_api_key("super-secret-key");
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("super-secret-key"));
    }

    #[test]
    fn api_key_is_not_serialized() {
        let config = OpenWeatherConfig::with_api_key("super-secret-key");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("super-secret-key"));
        assert!(!json.contains("api_key"));
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: OpenWeatherConfig =
            serde_json::from_str(r#"{"api_key": "abc", "timeout_secs": 3}"#).unwrap();
        assert!(config.has_api_key());
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.geocoding_limit, 5);
    }

    #[test]
    fn blank_api_key_is_not_configured() {
        let client = OpenWeatherClient::new(OpenWeatherConfig::with_api_key("   ")).unwrap();
        assert!(!client.is_configured());

        let client = OpenWeatherClient::new(OpenWeatherConfig::default()).unwrap();
        assert!(!client.is_configured());

        let client = OpenWeatherClient::new(OpenWeatherConfig::with_api_key("k")).unwrap();
        assert!(client.is_configured());
    }

    #[test]
    fn status_mapping() {
        assert!(matches!(
            OpenWeatherClient::status_error(StatusCode::NOT_FOUND),
            OpenWeatherError::NotFound
        ));
        assert!(matches!(
            OpenWeatherClient::status_error(StatusCode::UNAUTHORIZED),
            OpenWeatherError::Unauthorized
        ));
        assert!(matches!(
            OpenWeatherClient::status_error(StatusCode::TOO_MANY_REQUESTS),
            OpenWeatherError::RateLimitExceeded
        ));
        assert!(matches!(
            OpenWeatherClient::status_error(StatusCode::BAD_GATEWAY),
            OpenWeatherError::ServiceUnavailable(_)
        ));
        assert!(matches!(
            OpenWeatherClient::status_error(StatusCode::BAD_REQUEST),
            OpenWeatherError::RequestFailed(_)
        ));
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        let config = OpenWeatherConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            ..OpenWeatherConfig::default()
        };
        let client = OpenWeatherClient::new(config).unwrap();
        let err = client.current_by_name("Paris", "metric").await.unwrap_err();
        assert!(matches!(err, OpenWeatherError::MissingApiKey));
    }
}
