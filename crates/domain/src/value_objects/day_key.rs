//! Day-key value object
//!
//! A day-key labels which local day a forecast sample belongs to. The
//! default grouping uses the weekday name, which does not distinguish the
//! same weekday in two different weeks. `DayGrouping::CalendarDate` keys by
//! the local ISO date instead.

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// How forecast samples are grouped into days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayGrouping {
    /// Key by local weekday name (`Monday`)
    #[default]
    Weekday,
    /// Key by local calendar date (`2024-01-15`)
    #[serde(rename = "date")]
    CalendarDate,
}

impl FromStr for DayGrouping {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekday" => Ok(Self::Weekday),
            "date" | "calendar_date" => Ok(Self::CalendarDate),
            _ => Err(DomainError::InvalidDayGrouping(s.to_string())),
        }
    }
}

/// Build the location's fixed UTC offset from provider seconds
///
/// Unknown or out-of-range offsets fall back to UTC.
#[must_use]
pub fn utc_offset(seconds: Option<i32>) -> FixedOffset {
    seconds
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Utc.fix())
}

/// Grouping label for one local day
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayKey(String);

impl DayKey {
    /// Classify an instant into its local day
    #[must_use]
    pub fn classify(instant: DateTime<Utc>, offset: FixedOffset, grouping: DayGrouping) -> Self {
        let local = instant.with_timezone(&offset);
        let label = match grouping {
            DayGrouping::Weekday => local.format("%A").to_string(),
            DayGrouping::CalendarDate => local.format("%Y-%m-%d").to_string(),
        };
        Self(label)
    }

    /// The key as it appears on the wire
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Weekday name for presentation
    ///
    /// Date keys are rendered as the weekday of that date; weekday keys are
    /// already presentable.
    #[must_use]
    pub fn display_name(&self) -> String {
        NaiveDate::parse_from_str(&self.0, "%Y-%m-%d")
            .map_or_else(|_| self.0.clone(), |date| date.format("%A").to_string())
    }
}

impl Borrow<str> for DayKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
