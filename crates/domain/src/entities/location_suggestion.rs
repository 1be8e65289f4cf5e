//! Location suggestion returned by geocoding lookups

use serde::{Deserialize, Serialize};

/// A candidate place matching a free-text query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSuggestion {
    /// Place name
    pub name: String,
    /// ISO country code
    pub country: String,
    /// State or region, when the provider knows it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lon: f64,
}
