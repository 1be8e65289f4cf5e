//! Forecast aggregation
//!
//! Both functions walk the same raw series in provider order. The hourly
//! view keeps every sample; the daily view keeps at most
//! [`DAILY_SUMMARY_CAP`] days and ignores samples for any later day.

use std::collections::HashMap;

use chrono::FixedOffset;
use domain::entities::{DAILY_SUMMARY_CAP, DailySummary, HourlyBuckets, HourlyEntry};
use domain::value_objects::{
    ConditionCategory, DayGrouping, DayKey, format_instant, round_reading,
};

use crate::ports::RawForecastPoint;

/// Bucket every sample under its day-key, preserving input order
pub fn bucketize_hourly(
    points: &[RawForecastPoint],
    offset: FixedOffset,
    grouping: DayGrouping,
) -> HourlyBuckets {
    let mut buckets = HourlyBuckets::new();

    for point in points {
        let key = DayKey::classify(point.instant, offset, grouping);
        buckets.push(
            key,
            HourlyEntry {
                dt: format_instant(point.instant),
                temperature: round_reading(point.temperature),
                condition: point.condition.clone(),
                category: ConditionCategory::classify(point.condition.as_deref()),
            },
        );
    }

    buckets
}

/// Roll samples up into per-day high/low summaries
///
/// The first sample of a day fixes its condition; later samples only widen
/// the extrema. Once the cap is reached, samples for unseen days are dropped.
pub fn summarize_daily(
    points: &[RawForecastPoint],
    offset: FixedOffset,
    grouping: DayGrouping,
) -> Vec<DailySummary> {
    let mut index: HashMap<DayKey, usize> = HashMap::new();
    let mut summaries: Vec<DailySummary> = Vec::with_capacity(DAILY_SUMMARY_CAP);

    for point in points {
        let key = DayKey::classify(point.instant, offset, grouping);
        let high = round_reading(point.temperature_max);
        let low = round_reading(point.temperature_min);

        if let Some(&slot) = index.get(&key) {
            summaries[slot].widen(high, low);
        } else if summaries.len() < DAILY_SUMMARY_CAP {
            summaries.push(DailySummary::start(&key, point.condition.clone(), high, low));
            index.insert(key, summaries.len() - 1);
        }
    }

    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use domain::value_objects::utc_offset;
    use proptest::prelude::*;

    // 2024-01-15T00:00:00Z, a Monday
    const MONDAY: i64 = 1_705_276_800;
    const THREE_HOURS: i64 = 3 * 3600;
    const DAY: i64 = 86_400;

    fn point(secs: i64, temp: f64, max: f64, min: f64, condition: &str) -> RawForecastPoint {
        RawForecastPoint {
            instant: DateTime::<Utc>::from_timestamp(secs, 0).unwrap(),
            temperature: temp,
            temperature_max: max,
            temperature_min: min,
            condition: Some(condition.to_string()),
        }
    }

    fn series(days: i64) -> Vec<RawForecastPoint> {
        (0..days * 8)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let t = (i % 8) as f64;
                point(MONDAY + i * THREE_HOURS, t, t + 1.0, t - 1.0, "Clear")
            })
            .collect()
    }

    #[test]
    fn empty_series_yields_empty_outputs() {
        let offset = utc_offset(None);
        assert!(bucketize_hourly(&[], offset, DayGrouping::Weekday).is_empty());
        assert!(summarize_daily(&[], offset, DayGrouping::Weekday).is_empty());
    }

    #[test]
    fn hourly_entries_are_normalized() {
        let points = [point(MONDAY + 12 * 3600, 21.4, 22.0, 20.0, "light rain")];
        let buckets = bucketize_hourly(&points, utc_offset(None), DayGrouping::Weekday);

        let monday = buckets.get("Monday").unwrap();
        assert_eq!(monday.len(), 1);
        assert_eq!(monday[0].dt, "2024-01-15T12:00:00.000Z");
        assert_eq!(monday[0].temperature, 21);
        assert_eq!(monday[0].condition.as_deref(), Some("light rain"));
        assert_eq!(monday[0].category, ConditionCategory::Rain);
    }

    #[test]
    fn hourly_buckets_follow_days() {
        let buckets = bucketize_hourly(&series(2), utc_offset(None), DayGrouping::Weekday);
        let keys: Vec<_> = buckets.keys().map(DayKey::as_str).collect();
        assert_eq!(keys, ["Monday", "Tuesday"]);
        assert_eq!(buckets.get("Monday").unwrap().len(), 8);
        assert_eq!(buckets.get("Tuesday").unwrap().len(), 8);
    }

    #[test]
    fn daily_summary_tracks_extrema() {
        let points = [
            point(MONDAY, 10.0, 11.4, 9.6, "Clouds"),
            point(MONDAY + THREE_HOURS, 14.0, 15.5, 12.0, "Rain"),
            point(MONDAY + 2 * THREE_HOURS, 8.0, 9.0, 7.2, "Clear"),
        ];
        let daily = summarize_daily(&points, utc_offset(None), DayGrouping::Weekday);

        assert_eq!(daily.len(), 1);
        assert_eq!(daily[0].day_name, "Monday");
        assert_eq!(daily[0].high_temp, 16);
        assert_eq!(daily[0].low_temp, 7);
        assert_eq!(daily[0].condition.as_deref(), Some("Clouds"));
        assert_eq!(daily[0].category, ConditionCategory::PartlyCloudy);
    }

    #[test]
    fn daily_summary_caps_at_seven_days() {
        let daily = summarize_daily(&series(10), utc_offset(None), DayGrouping::CalendarDate);
        assert_eq!(daily.len(), DAILY_SUMMARY_CAP);
        assert_eq!(daily[0].day_name, "2024-01-15");
        assert_eq!(daily[6].day_name, "2024-01-21");
    }

    #[test]
    fn samples_for_days_past_the_cap_do_not_widen() {
        let mut points = series(7);
        // An eighth day with extreme values must be ignored entirely
        points.push(point(MONDAY + 7 * DAY, 99.0, 99.0, -99.0, "Snow"));
        let daily = summarize_daily(&points, utc_offset(None), DayGrouping::CalendarDate);

        assert_eq!(daily.len(), 7);
        assert!(daily.iter().all(|d| d.high_temp < 99 && d.low_temp > -99));
    }

    #[test]
    fn weekday_grouping_merges_the_following_week() {
        let points = [
            point(MONDAY, 5.0, 6.0, 4.0, "Clear"),
            point(MONDAY + 7 * DAY, 5.0, 20.0, -3.0, "Snow"),
        ];
        let daily = summarize_daily(&points, utc_offset(None), DayGrouping::Weekday);
        assert_eq!(daily.len(), 1);
        assert_eq!(daily[0].high_temp, 20);
        assert_eq!(daily[0].low_temp, -3);
        assert_eq!(daily[0].condition.as_deref(), Some("Clear"));

        let buckets = bucketize_hourly(&points, utc_offset(None), DayGrouping::Weekday);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets.total_entries(), 2);
    }

    #[test]
    fn local_offset_moves_samples_between_days() {
        // 22:00Z Monday is Tuesday at UTC+3
        let points = [point(MONDAY + 22 * 3600, 1.0, 1.0, 1.0, "Clear")];
        let buckets = bucketize_hourly(&points, utc_offset(Some(3 * 3600)), DayGrouping::Weekday);
        assert!(buckets.get("Tuesday").is_some());
        assert!(buckets.get("Monday").is_none());
    }

    fn arb_series() -> impl Strategy<Value = Vec<RawForecastPoint>> {
        prop::collection::vec(
            (0i64..30 * 8, -40.0f64..45.0, 0.0f64..5.0, 0.0f64..5.0),
            0..120,
        )
        .prop_map(|samples| {
            let mut samples = samples;
            samples.sort_by_key(|(slot, ..)| *slot);
            samples
                .into_iter()
                .map(|(slot, temp, up, down)| {
                    point(MONDAY + slot * THREE_HOURS, temp, temp + up, temp - down, "Clouds")
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn every_sample_lands_in_exactly_one_bucket(points in arb_series()) {
            let offset = utc_offset(Some(3600));
            let buckets = bucketize_hourly(&points, offset, DayGrouping::Weekday);
            prop_assert_eq!(buckets.total_entries(), points.len());

            for (key, entries) in buckets.iter() {
                let expected: Vec<String> = points
                    .iter()
                    .filter(|p| &DayKey::classify(p.instant, offset, DayGrouping::Weekday) == key)
                    .map(|p| format_instant(p.instant))
                    .collect();
                let actual: Vec<String> = entries.iter().map(|e| e.dt.clone()).collect();
                prop_assert_eq!(actual, expected);
            }
        }

        #[test]
        fn extrema_bound_every_contributing_sample(points in arb_series()) {
            let offset = utc_offset(None);
            for grouping in [DayGrouping::Weekday, DayGrouping::CalendarDate] {
                let daily = summarize_daily(&points, offset, grouping);
                prop_assert!(daily.len() <= DAILY_SUMMARY_CAP);

                for summary in &daily {
                    for p in points
                        .iter()
                        .filter(|p| DayKey::classify(p.instant, offset, grouping).as_str() == summary.day_name)
                    {
                        prop_assert!(summary.high_temp >= round_reading(p.temperature_max));
                        prop_assert!(summary.low_temp <= round_reading(p.temperature_min));
                    }
                }

                let mut names: Vec<_> = daily.iter().map(|d| d.day_name.clone()).collect();
                names.sort();
                names.dedup();
                prop_assert_eq!(names.len(), daily.len());
            }
        }
    }
}
