// src/setup.rs

use std::fmt;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct AppConfig {
    pub log_filter: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ConfigError {
    InvalidLogFormat(String),
    InvalidLogFilter(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidLogFormat(value) => {
                write!(f, "LOG_FORMAT must be \"json\" or \"pretty\", got \"{}\"", value)
            }
            ConfigError::InvalidLogFilter(reason) => write!(f, "invalid RUST_LOG: {}", reason),
        }
    }
}

impl std::error::Error for ConfigError {}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(
            std::env::var("RUST_LOG").ok(),
            std::env::var("LOG_FORMAT").ok(),
        )
    }

    fn from_vars(
        log_filter: Option<String>,
        log_format: Option<String>,
    ) -> Result<Self, ConfigError> {
        let log_filter = log_filter
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());
        let log_format = match log_format.as_deref().map(str::trim) {
            None | Some("") | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => return Err(ConfigError::InvalidLogFormat(other.to_string())),
        };

        Ok(AppConfig {
            log_filter,
            log_format,
        })
    }
}

/// Install the global subscriber. Logs go to stderr so stdout only carries
/// submit outcomes.
pub(super) fn set_up_tracing(config: &AppConfig) -> Result<(), ConfigError> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .map_err(|e| ConfigError::InvalidLogFilter(e.to_string()))?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match config.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }

    tracing::debug!(format = ?config.log_format, "tracing initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_vars(None, None).unwrap();
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_json_format_and_filter() {
        let config =
            AppConfig::from_vars(Some("services=debug".to_string()), Some("json".to_string()))
                .unwrap();
        assert_eq!(config.log_filter, "services=debug");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_blank_filter_falls_back_to_default() {
        let config = AppConfig::from_vars(Some("  ".to_string()), None).unwrap();
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let err = AppConfig::from_vars(None, Some("xml".to_string())).unwrap_err();
        assert_eq!(err, ConfigError::InvalidLogFormat("xml".to_string()));
        assert_eq!(
            err.to_string(),
            "LOG_FORMAT must be \"json\" or \"pretty\", got \"xml\""
        );
    }
}
