//! Forecast entities
//!
//! The client-facing records assembled for one forecast request: the current
//! snapshot, hourly entries bucketed per day-key, and the bounded daily
//! summary.

use std::collections::HashMap;

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::value_objects::{ConditionCategory, DayKey, Humidity, UnitProfile, UnitSystem};

/// Maximum number of distinct days in the daily summary
pub const DAILY_SUMMARY_CAP: usize = 7;

/// One normalized forecast hour
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyEntry {
    /// Sample instant, ISO-8601 UTC
    pub dt: String,
    /// Rounded temperature
    pub temperature: i32,
    /// Provider condition text
    pub condition: Option<String>,
    /// Category derived from `condition`
    pub category: ConditionCategory,
}

/// Hourly entries grouped by day-key, in first-seen key order
///
/// Serializes as a JSON object whose keys keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HourlyBuckets {
    index: HashMap<DayKey, usize>,
    buckets: Vec<(DayKey, Vec<HourlyEntry>)>,
}

impl HourlyBuckets {
    /// Create an empty mapping
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the bucket for `key`, creating the bucket on first use
    pub fn push(&mut self, key: DayKey, entry: HourlyEntry) {
        if let Some(&slot) = self.index.get(&key) {
            self.buckets[slot].1.push(entry);
        } else {
            self.index.insert(key.clone(), self.buckets.len());
            self.buckets.push((key, vec![entry]));
        }
    }

    /// Entries for a day-key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[HourlyEntry]> {
        self.index
            .get(key)
            .map(|&slot| self.buckets[slot].1.as_slice())
    }

    /// Day-keys in first-seen order
    pub fn keys(&self) -> impl Iterator<Item = &DayKey> {
        self.buckets.iter().map(|(key, _)| key)
    }

    /// Buckets in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&DayKey, &[HourlyEntry])> {
        self.buckets
            .iter()
            .map(|(key, entries)| (key, entries.as_slice()))
    }

    /// Number of distinct day-keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether no entries were bucketed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of entries across all buckets
    #[must_use]
    pub fn total_entries(&self) -> usize {
        self.buckets.iter().map(|(_, entries)| entries.len()).sum()
    }
}

impl Serialize for HourlyBuckets {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.buckets.len()))?;
        for (key, entries) in &self.buckets {
            map.serialize_entry(key.as_str(), entries)?;
        }
        map.end()
    }
}

/// Aggregate for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    /// Day-key, usable to look up `hourlyByDay`
    pub day_name: String,
    /// Weekday name for display
    pub weekday: String,
    /// Condition of the first sample seen for the day
    pub condition: Option<String>,
    /// Category derived from `condition`
    pub category: ConditionCategory,
    /// Highest rounded maximum seen
    pub high_temp: i32,
    /// Lowest rounded minimum seen
    pub low_temp: i32,
}

impl DailySummary {
    /// Start a summary from the first sample of a day
    #[must_use]
    pub fn start(key: &DayKey, condition: Option<String>, high: i32, low: i32) -> Self {
        let category = ConditionCategory::classify(condition.as_deref());
        Self {
            day_name: key.as_str().to_string(),
            weekday: key.display_name(),
            condition,
            category,
            high_temp: high,
            low_temp: low,
        }
    }

    /// Widen the extrema with a later sample; the condition is left alone
    pub fn widen(&mut self, high: i32, low: i32) {
        self.high_temp = self.high_temp.max(high);
        self.low_temp = self.low_temp.min(low);
    }
}

/// Normalized current conditions
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentSnapshot {
    /// Rounded temperature
    pub temperature: i32,
    /// Provider condition text
    pub condition: Option<String>,
    /// Category derived from `condition`
    pub condition_category: ConditionCategory,
    /// Relative humidity
    pub humidity: Humidity,
    /// Wind speed in the profile's unit, rounded
    pub wind_speed: i32,
    /// Precipitation over the last hour
    pub precipitation: f64,
    /// Observation instant, ISO-8601 UTC
    pub dt: String,
    /// Place name
    pub city: String,
    /// Country code
    pub country: String,
}

/// Response assembled for one forecast request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastComposite {
    /// Current conditions, flattened into the top level
    #[serde(flatten)]
    pub current: CurrentSnapshot,
    /// Hourly entries per day-key
    pub hourly_by_day: HourlyBuckets,
    /// At most [`DAILY_SUMMARY_CAP`] summaries in first-seen order
    pub daily: Vec<DailySummary>,
    /// Requested unit system
    pub unit: UnitSystem,
    /// Unit labels for the requested system
    pub units: UnitProfile,
}
