//! Normalization helpers for provider readings
//!
//! Every temperature and wind figure leaves the pipeline as a whole number
//! rounded half-up, and every instant as a UTC ISO-8601 string with
//! millisecond precision.

use chrono::{DateTime, SecondsFormat, Utc};

/// Round a reading to the nearest whole unit, halves rounding up
///
/// `2.5` becomes `3` and `-2.5` becomes `-2`. Values outside the `i32`
/// range saturate.
///
/// # Examples
///
/// ```
/// use domain::value_objects::round_reading;
///
/// assert_eq!(round_reading(21.4), 21);
/// assert_eq!(round_reading(15.5), 16);
/// assert_eq!(round_reading(-2.5), -2);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_reading(value: f64) -> i32 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded.clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
}

/// Format an instant as `YYYY-MM-DDTHH:MM:SS.mmmZ`
#[must_use]
pub fn format_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_nearest() {
        assert_eq!(round_reading(21.4), 21);
        assert_eq!(round_reading(21.6), 22);
        assert_eq!(round_reading(0.0), 0);
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(round_reading(2.5), 3);
        assert_eq!(round_reading(-2.5), -2);
        assert_eq!(round_reading(-2.51), -3);
    }

    #[test]
    fn just_below_half_rounds_down() {
        assert_eq!(round_reading(0.499_999_999_999_999_94), 0);
        assert_eq!(round_reading(-0.500_000_000_000_000_1), -1);
    }

    #[test]
    fn saturates_at_bounds() {
        assert_eq!(round_reading(1e12), i32::MAX);
        assert_eq!(round_reading(-1e12), i32::MIN);
    }

    #[test]
    fn formats_instant_with_millis() {
        let instant = DateTime::from_timestamp(1_705_320_000, 0).unwrap();
        assert_eq!(format_instant(instant), "2024-01-15T12:00:00.000Z");
    }
}
