//! OpenWeatherMap API response models
//!
//! Only the fields the forecast pipeline reads are modelled. Everything the
//! provider may omit is optional so that a sparse payload still decodes and
//! the caller decides what is required.

use serde::{Deserialize, Serialize};

/// Response of `/data/2.5/weather`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CurrentWeatherResponse {
    /// Resolved coordinates
    pub coord: Option<Coordinates>,
    /// Condition groups, most relevant first
    #[serde(default)]
    pub weather: Vec<ConditionGroup>,
    /// Temperature and humidity block
    pub main: Option<MainReadings>,
    /// Wind block
    pub wind: Option<Wind>,
    /// Rain volume, absent when dry
    pub rain: Option<PrecipitationVolume>,
    /// Observation instant, unix seconds
    pub dt: Option<i64>,
    /// Shift from UTC in seconds
    pub timezone: Option<i32>,
    /// Resolved place name
    pub name: Option<String>,
    /// System block carrying the country code
    pub sys: Option<SystemInfo>,
}

impl CurrentWeatherResponse {
    /// Headline condition text, e.g. "Clouds"
    #[must_use]
    pub fn primary_condition(&self) -> Option<&str> {
        primary_condition(&self.weather)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// One entry of the `weather` array
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConditionGroup {
    /// Group name such as "Rain" or "Clouds"
    pub main: String,
    /// Longer text such as "light rain"
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct MainReadings {
    pub temp: Option<f64>,
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    pub humidity: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Wind {
    /// m/s for metric, mph for imperial
    pub speed: Option<f64>,
}

/// Rain volume in millimetres, whatever `units` was requested
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct PrecipitationVolume {
    #[serde(rename = "1h")]
    pub last_hour: Option<f64>,
    #[serde(rename = "3h")]
    pub last_three_hours: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SystemInfo {
    pub country: Option<String>,
}

/// Response of `/data/2.5/forecast`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ForecastResponse {
    /// Samples in chronological order, usually every three hours
    #[serde(default)]
    pub list: Vec<ForecastSample>,
    pub city: Option<CityInfo>,
}

/// One forecast sample
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastSample {
    /// Sample instant, unix seconds
    pub dt: i64,
    pub main: ForecastReadings,
    #[serde(default)]
    pub weather: Vec<ConditionGroup>,
}

impl ForecastSample {
    #[must_use]
    pub fn primary_condition(&self) -> Option<&str> {
        primary_condition(&self.weather)
    }
}

/// Readings required on every forecast sample
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ForecastReadings {
    pub temp: f64,
    pub temp_min: f64,
    pub temp_max: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CityInfo {
    pub name: Option<String>,
    pub country: Option<String>,
    /// Shift from UTC in seconds
    pub timezone: Option<i32>,
}

/// One candidate from `/geo/1.0/direct`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodingCandidate {
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub state: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

/// Error body the provider returns alongside non-2xx statuses
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProviderErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

fn primary_condition(groups: &[ConditionGroup]) -> Option<&str> {
    groups.first().map(|g| g.main.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_current_payload() {
        let json = serde_json::json!({
            "coord": {"lon": -7.5898, "lat": 33.5731},
            "weather": [{"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"}],
            "base": "stations",
            "main": {"temp": 21.4, "feels_like": 21.0, "temp_min": 20.1, "temp_max": 22.3, "pressure": 1016, "humidity": 60},
            "visibility": 10000,
            "wind": {"speed": 4.2, "deg": 330},
            "rain": {"1h": 0.25},
            "dt": 1_705_320_000,
            "sys": {"country": "MA", "sunrise": 1_705_305_600, "sunset": 1_705_343_000},
            "timezone": 3600,
            "id": 2_553_604,
            "name": "Casablanca",
            "cod": 200
        });

        let parsed: CurrentWeatherResponse = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.primary_condition(), Some("Clouds"));
        assert_eq!(parsed.main.unwrap().temp, Some(21.4));
        assert_eq!(parsed.main.unwrap().humidity, Some(60.0));
        assert_eq!(parsed.wind.unwrap().speed, Some(4.2));
        assert_eq!(parsed.rain.unwrap().last_hour, Some(0.25));
        assert_eq!(parsed.sys.unwrap().country.as_deref(), Some("MA"));
        assert_eq!(parsed.timezone, Some(3600));
        assert_eq!(parsed.name.as_deref(), Some("Casablanca"));
    }

    #[test]
    fn sparse_current_payload_still_decodes() {
        let parsed: CurrentWeatherResponse =
            serde_json::from_value(serde_json::json!({"name": "Nowhere"})).unwrap();
        assert!(parsed.main.is_none());
        assert!(parsed.primary_condition().is_none());
        assert!(parsed.rain.is_none());
    }

    #[test]
    fn forecast_list_defaults_to_empty() {
        let parsed: ForecastResponse =
            serde_json::from_value(serde_json::json!({"cod": "200"})).unwrap();
        assert!(parsed.list.is_empty());
        assert!(parsed.city.is_none());
    }

    #[test]
    fn forecast_sample_requires_temperatures() {
        let missing = serde_json::json!({"dt": 1, "main": {"temp": 1.0}, "weather": []});
        assert!(serde_json::from_value::<ForecastSample>(missing).is_err());
    }

    #[test]
    fn geocoding_candidate_without_state() {
        let parsed: Vec<GeocodingCandidate> = serde_json::from_value(serde_json::json!([
            {"name": "Paris", "lat": 48.8566, "lon": 2.3522, "country": "FR", "local_names": {"fr": "Paris"}}
        ]))
        .unwrap();
        assert_eq!(parsed[0].name, "Paris");
        assert!(parsed[0].state.is_none());
    }
}
