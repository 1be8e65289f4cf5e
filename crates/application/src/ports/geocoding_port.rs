//! Geocoding port
//!
//! Resolves free-text queries to candidate places for the location search.

use async_trait::async_trait;
use domain::entities::LocationSuggestion;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for geocoding lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Whether a provider credential is available
    fn is_configured(&self) -> bool;

    /// Up to `limit` places matching `query`, in provider order
    async fn search(
        &self,
        query: &str,
        limit: u8,
    ) -> Result<Vec<LocationSuggestion>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn GeocodingPort>();
    }
}
