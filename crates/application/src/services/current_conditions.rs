//! Current-conditions normalization

use domain::entities::CurrentSnapshot;
use domain::value_objects::{
    ConditionCategory, GeoLocation, Humidity, UnitSystem, format_instant, round_reading,
};

use crate::error::ApplicationError;
use crate::ports::RawObservation;

/// Read a required numeric field; non-finite values count as absent
fn required(value: Option<f64>, field: &str) -> Result<f64, ApplicationError> {
    value
        .filter(|v| v.is_finite())
        .ok_or_else(|| ApplicationError::MalformedPayload(format!("missing numeric field {field}")))
}

/// Shape a raw observation into the client snapshot
pub fn normalize_current(
    raw: &RawObservation,
    unit: UnitSystem,
) -> Result<CurrentSnapshot, ApplicationError> {
    let temperature = required(raw.temperature, "temperature")?;
    let humidity = required(raw.humidity, "humidity")?;
    let wind_speed = required(raw.wind_speed, "wind speed")?;
    let observed_at = raw.observed_at.ok_or_else(|| {
        ApplicationError::MalformedPayload("missing observation instant".to_string())
    })?;

    let profile = unit.profile();
    let precipitation = raw
        .precipitation_last_hour
        .filter(|p| p.is_finite())
        .unwrap_or(0.0);

    Ok(CurrentSnapshot {
        temperature: round_reading(temperature),
        condition: raw.condition.clone(),
        condition_category: ConditionCategory::classify(raw.condition.as_deref()),
        humidity: Humidity::from_reading(humidity),
        wind_speed: round_reading(profile.scale_wind_speed(wind_speed)),
        precipitation,
        dt: format_instant(observed_at),
        city: raw.place_name.clone().unwrap_or_default(),
        country: raw.country_code.clone().unwrap_or_default(),
    })
}

/// Coordinates of the resolved place, feeding the forecast call
pub fn extract_coordinates(raw: &RawObservation) -> Result<GeoLocation, ApplicationError> {
    let latitude = required(raw.latitude, "latitude")?;
    let longitude = required(raw.longitude, "longitude")?;
    GeoLocation::new(latitude, longitude)
        .map_err(|e| ApplicationError::MalformedPayload(e.to_string()))
}
