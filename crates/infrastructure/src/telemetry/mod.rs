//! Tracing subscriber setup
//!
//! Console logging in text or JSON form, filtered by `RUST_LOG` when set and
//! by the configured filter otherwise.

use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, ServerConfig};

/// Error type for tracing initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The configured filter directive does not parse
    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },

    /// A global subscriber is already installed
    #[error("Failed to initialize tracing: {0}")]
    Init(String),
}

/// Build the filter: `RUST_LOG` wins, then the configured directive
///
/// # Errors
///
/// Returns an error when `RUST_LOG` is unset and `fallback` is not a valid
/// filter directive.
pub fn build_filter(fallback: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(fallback).map_err(|e| TelemetryError::InvalidFilter {
            filter: fallback.to_string(),
            reason: e.to_string(),
        })
    })
}

/// Install the global tracing subscriber
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already set.
pub fn init_tracing(config: &ServerConfig) -> Result<(), TelemetryError> {
    let filter = build_filter(&config.log_filter)?;
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.log_format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_target(true),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
    };
    result.map_err(|e| TelemetryError::Init(e.to_string()))?;

    info!(format = %config.log_format, "Tracing initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_fallback_filter_is_reported() {
        // Only meaningful when RUST_LOG is not set for the test process
        if std::env::var_os("RUST_LOG").is_none() {
            let err = build_filter("skycast=loudest").unwrap_err();
            assert!(matches!(err, TelemetryError::InvalidFilter { .. }));
        }
    }

    #[test]
    fn valid_fallback_filter_builds() {
        assert!(build_filter("info,tower_http=debug").is_ok());
    }

    #[test]
    fn error_display() {
        let err = TelemetryError::Init("already set".to_string());
        assert_eq!(err.to_string(), "Failed to initialize tracing: already set");
    }
}
