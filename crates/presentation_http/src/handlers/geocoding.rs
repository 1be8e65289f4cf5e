//! Location suggestion endpoint

use axum::{
    Json,
    extract::{Query, State},
};
use domain::entities::LocationSuggestion;
use serde::Deserialize;
use tracing::{Span, debug, error, instrument, warn};

use crate::{error::ApiError, state::AppState};

/// Query parameters of `GET /api/geocoding`
#[derive(Debug, Default, Deserialize)]
pub struct GeocodingQuery {
    pub q: Option<String>,
}

/// Places matching a partial name, in provider order
#[instrument(skip_all, fields(q = tracing::field::Empty))]
pub async fn get_suggestions(
    State(state): State<AppState>,
    Query(query): Query<GeocodingQuery>,
) -> Result<Json<Vec<LocationSuggestion>>, ApiError> {
    let q = query.q.unwrap_or_default();
    Span::current().record("q", q.trim());

    let suggestions = state
        .location_search
        .search(&q)
        .await
        .map_err(|e| {
            if e.is_configuration_problem() {
                error!(error = %e, "Location search failed");
            } else {
                warn!(error = %e, "Location search failed");
            }
            ApiError::from_geocoding(e)
        })?;

    debug!(count = suggestions.len(), "Suggestions served");
    Ok(Json(suggestions))
}
