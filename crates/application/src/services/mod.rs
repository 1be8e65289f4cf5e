//! Application services - Use case implementations

mod current_conditions;
mod forecast_aggregation;
mod forecast_service;
mod location_search_service;
mod suggestion_debouncer;

pub use current_conditions::{extract_coordinates, normalize_current};
pub use forecast_aggregation::{bucketize_hourly, summarize_daily};
pub use forecast_service::ForecastService;
pub use location_search_service::{DEFAULT_SUGGESTION_LIMIT, LocationSearchService};
pub use suggestion_debouncer::{DEFAULT_DEBOUNCE, SuggestionDebouncer, SuggestionUpdate};
