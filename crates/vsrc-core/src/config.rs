//! # Configuration
//!
//! Loaded from YAML. Every field has a default, so an empty document (or no
//! file at all) yields a working configuration.
//!
//! ```yaml
//! staging:
//!   resources_root: /tmp/build
//! telemetry:
//!   format: json
//!   filter: vsrc_resource=debug
//! ```
//!
//! ## Staging Directories
//!
//! Fetched artifacts are staged on their cache volume under
//! `resources_dir(FETCH_STAGING_SUFFIX)`. The publish suffix is reserved for
//! produced artifacts and is never used for fetch staging; produced
//! artifacts are addressed through the step's own working directory instead.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::path;
use crate::telemetry::TelemetryConfig;

/// Suffix of the staging directory for fetched artifacts.
pub const FETCH_STAGING_SUFFIX: &str = "get";

/// Suffix of the staging directory for produced artifacts.
pub const PUBLISH_STAGING_SUFFIX: &str = "put";

/// Default root under which resource staging directories live.
pub const DEFAULT_RESOURCES_ROOT: &str = "/tmp/build";

/// Where resource payloads are staged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StagingConfig {
    /// Root of all staging directories.
    pub resources_root: String,
}

impl Default for StagingConfig {
    fn default() -> Self {
        Self {
            resources_root: DEFAULT_RESOURCES_ROOT.to_string(),
        }
    }
}

impl StagingConfig {
    /// A staging configuration rooted at `resources_root`.
    pub fn new(resources_root: impl Into<String>) -> Self {
        Self {
            resources_root: resources_root.into(),
        }
    }

    /// Staging directory for the given action suffix.
    pub fn resources_dir(&self, suffix: &str) -> String {
        path::join([self.resources_root.as_str(), suffix])
    }

    /// Staging directory for fetched artifacts.
    pub fn fetch_dir(&self) -> String {
        self.resources_dir(FETCH_STAGING_SUFFIX)
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub staging: StagingConfig,
    pub telemetry: TelemetryConfig,
}

impl Config {
    /// Parse a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CoreError> {
        // serde_yaml reads an empty document as null, which a struct rejects.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            resources_root = %config.staging.resources_root,
            "loaded configuration"
        );
        Ok(config)
    }
}
