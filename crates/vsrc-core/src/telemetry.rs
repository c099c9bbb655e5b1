//! # Tracing Setup
//!
//! Installs a global `tracing-subscriber` fmt subscriber. The filter comes
//! from configuration, then `RUST_LOG`, then `info`.

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::error::CoreError;

/// Output format of the fmt subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    pub format: LogFormat,
    /// An `EnvFilter` directive such as `vsrc_resource=debug`.
    pub filter: Option<String>,
}

impl TelemetryConfig {
    fn env_filter(&self) -> Result<EnvFilter, CoreError> {
        match &self.filter {
            Some(directive) => EnvFilter::try_new(directive)
                .map_err(|e| CoreError::Telemetry(format!("invalid filter {directive:?}: {e}"))),
            None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))),
        }
    }
}

/// Install the global subscriber.
///
/// Fails with [`CoreError::Telemetry`] if the filter is invalid or a global
/// subscriber is already set.
pub fn init_tracing(config: &TelemetryConfig) -> Result<(), CoreError> {
    let filter = config.env_filter()?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = match config.format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    result.map_err(|e| CoreError::Telemetry(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parses_lowercase() {
        let f: LogFormat = serde_yaml::from_str("json").unwrap();
        assert_eq!(f, LogFormat::Json);
        let f: LogFormat = serde_yaml::from_str("pretty").unwrap();
        assert_eq!(f, LogFormat::Pretty);
    }

    #[test]
    fn invalid_filter_is_rejected() {
        let config = TelemetryConfig {
            format: LogFormat::Pretty,
            filter: Some("vsrc=notalevel[".to_string()),
        };
        let err = init_tracing(&config).unwrap_err();
        assert!(matches!(err, CoreError::Telemetry(_)));
    }

    #[test]
    fn second_init_reports_error() {
        let config = TelemetryConfig {
            format: LogFormat::Pretty,
            filter: Some("warn".to_string()),
        };
        // The first call may race with another test; the second never succeeds.
        let _ = init_tracing(&config);
        assert!(init_tracing(&config).is_err());
    }
}
