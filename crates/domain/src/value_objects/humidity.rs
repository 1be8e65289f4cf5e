//! Humidity value object
//!
//! Represents a relative humidity percentage (0-100%).
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::Humidity;
//!
//! // Provider readings are rounded and clamped
//! assert_eq!(Humidity::from_reading(60.4).value(), 60);
//! assert_eq!(Humidity::from_reading(104.0).value(), 100);
//! ```

use serde::Serialize;
use std::fmt;

use super::reading::round_reading;

/// Relative humidity percentage (0-100%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Humidity(u8);

impl Humidity {
    /// Maximum valid humidity percentage
    pub const MAX: u8 = 100;

    /// Build from a provider reading, rounding and clamping into range
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_reading(reading: f64) -> Self {
        let rounded = round_reading(reading).clamp(0, i32::from(Self::MAX));
        Self(rounded as u8)
    }

    /// Get the humidity value as a u8
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Humidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl From<Humidity> for u8 {
    fn from(h: Humidity) -> Self {
        h.0
    }
}
