//! Domain entities - The records the forecast pipeline produces

mod forecast;
mod location_suggestion;

pub use forecast::{
    CurrentSnapshot, DAILY_SUMMARY_CAP, DailySummary, ForecastComposite, HourlyBuckets,
    HourlyEntry,
};
pub use location_suggestion::LocationSuggestion;
