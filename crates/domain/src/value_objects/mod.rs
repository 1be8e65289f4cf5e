//! Value Objects - Immutable, identity-less domain primitives

mod condition_category;
mod day_key;
mod geo_location;
mod humidity;
mod reading;
mod unit_system;

pub use condition_category::ConditionCategory;
pub use day_key::{DayGrouping, DayKey, utc_offset};
pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use humidity::Humidity;
pub use reading::{format_instant, round_reading};
pub use unit_system::{UnitProfile, UnitSystem};
