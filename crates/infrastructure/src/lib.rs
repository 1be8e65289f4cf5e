//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports against OpenWeatherMap and provides
//! configuration loading and tracing setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, Environment, LogFormat, ServerConfig, WeatherConfig};
pub use telemetry::{TelemetryError, init_tracing};
