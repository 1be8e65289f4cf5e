//! Current conditions and forecast endpoint

use axum::{
    Json,
    extract::{Query, State},
};
use domain::entities::ForecastComposite;
use domain::value_objects::UnitSystem;
use serde::Deserialize;
use tracing::{Span, error, info, instrument, warn};

use crate::{error::ApiError, state::AppState};

/// Query parameters of `GET /api/weather`
#[derive(Debug, Default, Deserialize)]
pub struct WeatherQuery {
    /// Free-text place name
    pub location: Option<String>,
    /// `metric` or `imperial`; anything else is treated as metric
    pub unit: Option<String>,
}

/// Current conditions plus hourly and daily forecast for a place
#[instrument(skip_all, fields(location = tracing::field::Empty, unit = tracing::field::Empty))]
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<ForecastComposite>, ApiError> {
    let location = query.location.unwrap_or_default();
    let unit = UnitSystem::resolve(query.unit.as_deref());

    let span = Span::current();
    span.record("location", location.trim());
    span.record("unit", unit.as_str());

    let composite = state
        .forecast_service
        .forecast(&location, unit)
        .await
        .map_err(|e| {
            if e.is_configuration_problem() {
                error!(error = %e, "Weather request failed");
            } else {
                warn!(error = %e, "Weather request failed");
            }
            ApiError::from_weather(e)
        })?;

    info!(
        days = composite.daily.len(),
        hourly = composite.hourly_by_day.total_entries(),
        "Weather served"
    );
    Ok(Json(composite))
}
