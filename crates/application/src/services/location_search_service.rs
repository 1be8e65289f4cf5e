//! Location search
//!
//! Pass-through to the geocoding port with input validation.

use std::fmt;
use std::sync::Arc;

use domain::entities::LocationSuggestion;
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::GeocodingPort;

/// Default number of candidates requested from the provider
pub const DEFAULT_SUGGESTION_LIMIT: u8 = 5;

/// Resolves partial place names to candidate locations
#[derive(Clone)]
pub struct LocationSearchService {
    geocoding: Arc<dyn GeocodingPort>,
    limit: u8,
}

impl fmt::Debug for LocationSearchService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocationSearchService")
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}

impl LocationSearchService {
    pub fn new(geocoding: Arc<dyn GeocodingPort>) -> Self {
        Self {
            geocoding,
            limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }

    /// Request a different number of candidates; zero keeps the default
    #[must_use]
    pub const fn with_limit(mut self, limit: u8) -> Self {
        if limit > 0 {
            self.limit = limit;
        }
        self
    }

    pub const fn limit(&self) -> u8 {
        self.limit
    }

    pub fn is_configured(&self) -> bool {
        self.geocoding.is_configured()
    }

    /// Candidate places for `query`, in provider order
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a blank query, `Configuration` without a credential,
    /// otherwise whatever the geocoding call fails with.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<LocationSuggestion>, ApplicationError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ApplicationError::InvalidInput(
                "Query parameter 'q' is required".to_string(),
            ));
        }
        if !self.geocoding.is_configured() {
            return Err(ApplicationError::Configuration(
                "geocoding credential is not set".to_string(),
            ));
        }

        let suggestions = self.geocoding.search(query, self.limit).await?;
        debug!(count = suggestions.len(), "Location suggestions resolved");
        Ok(suggestions)
    }
}
