//! Condition category value object
//!
//! Maps the provider's free-text condition ("Clouds", "light rain",
//! "Thunderstorm") onto the small set of icons the client can render.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Presentation category for a weather condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConditionCategory {
    /// Clear sky, and the fallback for unknown text
    #[default]
    Sunny,
    /// Rain
    Rain,
    /// Drizzle
    Drizzle,
    /// Snow
    Snow,
    /// Thunderstorm
    Storm,
    /// Fog, mist or haze
    Fog,
    /// Any cloud cover
    PartlyCloudy,
    /// Overcast
    Overcast,
}

/// Substring rules in precedence order; the first match wins
const RULES: &[(&[&str], ConditionCategory)] = &[
    (&["rain"], ConditionCategory::Rain),
    (&["drizzle"], ConditionCategory::Drizzle),
    (&["snow"], ConditionCategory::Snow),
    (&["storm", "thunder"], ConditionCategory::Storm),
    (&["fog", "mist", "haze"], ConditionCategory::Fog),
    (&["cloud"], ConditionCategory::PartlyCloudy),
    (&["overcast"], ConditionCategory::Overcast),
    (&["clear", "sunny"], ConditionCategory::Sunny),
];

impl ConditionCategory {
    /// Classify free-text condition, case-insensitively
    ///
    /// Absent or unmatched text yields `Sunny`.
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::value_objects::ConditionCategory;
    ///
    /// assert_eq!(ConditionCategory::classify(Some("light rain")), ConditionCategory::Rain);
    /// assert_eq!(ConditionCategory::classify(Some("Thunderstorm")), ConditionCategory::Storm);
    /// assert_eq!(ConditionCategory::classify(None), ConditionCategory::Sunny);
    /// ```
    #[must_use]
    pub fn classify(condition: Option<&str>) -> Self {
        let Some(text) = condition else {
            return Self::Sunny;
        };
        let lower = text.to_lowercase();

        RULES
            .iter()
            .find(|(needles, _)| needles.iter().any(|n| lower.contains(n)))
            .map_or(Self::Sunny, |(_, category)| *category)
    }

    /// Kebab-case name of the category
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::Rain => "rain",
            Self::Drizzle => "drizzle",
            Self::Snow => "snow",
            Self::Storm => "storm",
            Self::Fog => "fog",
            Self::PartlyCloudy => "partly-cloudy",
            Self::Overcast => "overcast",
        }
    }

    /// Icon asset the renderer shows for this category
    #[must_use]
    pub fn icon_name(&self) -> String {
        format!("icon-{}.webp", self.as_str())
    }
}

impl fmt::Display for ConditionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_provider_main_groups() {
        let cases = [
            ("Clear", ConditionCategory::Sunny),
            ("Clouds", ConditionCategory::PartlyCloudy),
            ("Rain", ConditionCategory::Rain),
            ("Drizzle", ConditionCategory::Drizzle),
            ("Snow", ConditionCategory::Snow),
            ("Thunderstorm", ConditionCategory::Storm),
            ("Mist", ConditionCategory::Fog),
            ("Haze", ConditionCategory::Fog),
            ("Fog", ConditionCategory::Fog),
            ("Overcast", ConditionCategory::Overcast),
        ];
        for (text, expected) in cases {
            assert_eq!(ConditionCategory::classify(Some(text)), expected, "{text}");
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            ConditionCategory::classify(Some("LIGHT RAIN")),
            ConditionCategory::Rain
        );
    }

    #[test]
    fn rain_wins_over_later_rules() {
        assert_eq!(
            ConditionCategory::classify(Some("thunderstorm with rain")),
            ConditionCategory::Rain
        );
    }

    #[test]
    fn storm_is_checked_before_cloud() {
        assert_eq!(
            ConditionCategory::classify(Some("storm clouds")),
            ConditionCategory::Storm
        );
    }

    #[test]
    fn overcast_clouds_is_partly_cloudy() {
        assert_eq!(
            ConditionCategory::classify(Some("overcast clouds")),
            ConditionCategory::PartlyCloudy
        );
    }

    #[test]
    fn absent_or_unknown_falls_back_to_sunny() {
        assert_eq!(ConditionCategory::classify(None), ConditionCategory::Sunny);
        assert_eq!(ConditionCategory::classify(Some("")), ConditionCategory::Sunny);
        assert_eq!(
            ConditionCategory::classify(Some("Tornado")),
            ConditionCategory::Sunny
        );
    }

    #[test]
    fn icon_names() {
        assert_eq!(ConditionCategory::PartlyCloudy.icon_name(), "icon-partly-cloudy.webp");
        assert_eq!(ConditionCategory::Storm.icon_name(), "icon-storm.webp");
    }

    #[test]
    fn serializes_kebab_case() {
        let json = serde_json::to_string(&ConditionCategory::PartlyCloudy).unwrap();
        assert_eq!(json, "\"partly-cloudy\"");
    }
}
