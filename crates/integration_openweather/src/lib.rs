//! OpenWeatherMap integration
//!
//! Client for the OpenWeatherMap current-weather, 5-day forecast and direct
//! geocoding APIs (<https://openweathermap.org/api>).

pub mod client;
mod models;

pub use client::{OpenWeatherClient, OpenWeatherConfig, OpenWeatherError};
pub use models::{
    CityInfo, ConditionGroup, Coordinates, CurrentWeatherResponse, ForecastReadings,
    ForecastResponse, ForecastSample, GeocodingCandidate, MainReadings, PrecipitationVolume,
    SystemInfo, Wind,
};
