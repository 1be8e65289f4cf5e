//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server and logging settings
//! - `weather`: OpenWeatherMap provider settings
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! `config.toml` in the working directory, then `SKYCAST_*` environment
//! variables using `__` between section and key
//! (`SKYCAST_SERVER__PORT=8080`, `SKYCAST_WEATHER__API_KEY=...`).

mod server;
mod weather;

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use server::{LogFormat, ServerConfig};
pub use weather::WeatherConfig;

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "SKYCAST";

/// Credential variables honoured when `weather.api_key` is unset
pub const LEGACY_API_KEY_VARS: [&str; 2] = ["OWM_API_KEY", "OWM_API_key"];

/// Application environment (development or production)
///
/// Production hides internal error details from API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deployment environment
    #[serde(default)]
    pub environment: Environment,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Weather provider configuration
    #[serde(default)]
    pub weather: WeatherConfig,
}

impl AppConfig {
    /// Load configuration from the optional file and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source is malformed or a value has the wrong type.
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut config = Self::build(
            config::File::with_name("config").required(false),
            Self::environment_source(),
        )?;
        config.weather.apply_fallback_api_key(legacy_api_key());
        Ok(config)
    }

    /// Defaults plus the legacy credential variable, used when loading fails
    ///
    /// Without a credential the server still starts; weather requests then
    /// fail with a configuration error and readiness reports unavailable.
    #[must_use]
    pub fn fallback() -> Self {
        let mut config = Self::default();
        config.weather.apply_fallback_api_key(legacy_api_key());
        config
    }

    /// Load configuration from an explicit file plus the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or malformed.
    pub fn from_file(path: &Path) -> Result<Self, config::ConfigError> {
        let mut config = Self::build(
            config::File::from(path).required(true),
            Self::environment_source(),
        )?;
        config.weather.apply_fallback_api_key(legacy_api_key());
        Ok(config)
    }

    /// Parse configuration from TOML text, without environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or has wrong types.
    pub fn from_toml(text: &str) -> Result<Self, config::ConfigError> {
        Self::build(
            config::File::from_str(text, config::FileFormat::Toml),
            Self::environment_source().source(Some(config::Map::new())),
        )
    }

    fn environment_source() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("server.allowed_origins")
    }

    fn build<S>(file: S, env: config::Environment) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            .add_source(file)
            .add_source(env)
            .build()?;
        let parsed: Self = config.try_deserialize()?;
        debug!(environment = %parsed.environment, "Configuration loaded");
        Ok(parsed)
    }
}

fn legacy_api_key() -> Option<String> {
    first_non_blank(&LEGACY_API_KEY_VARS, |name| std::env::var(name).ok())
}

/// First variable in `names` holding a non-blank value
fn first_non_blank(names: &[&str], lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    names
        .iter()
        .find_map(|name| lookup(name).filter(|v| !v.trim().is_empty()))
}
