//! Server configuration loaded from environment variables.

use dioxus_logger::tracing::Level;

use crate::server::error::config::ConfigError;

/// Runtime configuration for the server build.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Maximum level of emitted log events (`LOG_LEVEL`, default `info`).
    pub log_level: Level,
    /// Whether Swagger UI is served at `/api/docs` (`API_DOCS`, default `true`).
    pub api_docs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            api_docs: true,
        }
    }
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// Unset or empty variables fall back to their defaults.
    ///
    /// # Errors
    /// - [`ConfigError::InvalidEnvValue`] if a variable is set to a value that cannot be parsed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let log_level = match get("LOG_LEVEL") {
            Some(value) => value
                .trim()
                .parse::<Level>()
                .map_err(|_| ConfigError::InvalidEnvValue {
                    var: "LOG_LEVEL".to_string(),
                    reason: format!(
                        "expected one of trace, debug, info, warn, error but got {:?}",
                        value
                    ),
                })?,
            None => defaults.log_level,
        };

        let api_docs = match get("API_DOCS") {
            Some(value) => parse_bool("API_DOCS", &value)?,
            None => defaults.api_docs,
        };

        Ok(Self {
            log_level,
            api_docs,
        })
    }
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("expected a boolean but got {:?}", value),
        }),
    }
}
