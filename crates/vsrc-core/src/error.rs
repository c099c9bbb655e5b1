//! # Error Types
//!
//! Errors raised by the foundational layer: loading configuration, parsing
//! resource-script output, and installing the tracing subscriber. Transfer
//! errors live next to the backends that raise them (`vsrc-worker`).

use thiserror::Error;

/// Top-level error type for `vsrc-core`.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Reading a configuration file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration YAML was malformed.
    #[error("configuration error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A resource script printed something that is not a version result.
    #[error("malformed version result: {0}")]
    Json(#[from] serde_json::Error),

    /// The tracing subscriber could not be installed.
    #[error("telemetry error: {0}")]
    Telemetry(String),
}
