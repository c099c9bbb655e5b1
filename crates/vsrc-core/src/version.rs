//! # Version Identity and Display Metadata
//!
//! A resource action reports what it fetched or produced as a
//! [`VersionResult`]: an opaque [`Version`] plus an ordered list of
//! [`MetadataField`]s. This is also the JSON document a resource script
//! prints on success:
//!
//! ```json
//! {"version": {"ref": "e4c2a1"}, "metadata": [{"name": "commit", "value": "e4c2a1"}]}
//! ```
//!
//! ## Invariants
//!
//! - `Version` keys are unique and kept in key order; equality is map
//!   equality. This layer never parses the values.
//! - Metadata is display-only. Duplicate names are allowed and order is
//!   preserved exactly as reported.
//! - A `VersionResult` is never mutated after construction. Accessors hand out
//!   shared references, so callers that want to edit must clone.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Opaque identity of one version of a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Version(BTreeMap<String, String>);

impl Version {
    /// An empty version.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return this version with `key` set to `value`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Look up a single key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Iterate over the key/value pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Version
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (k, v) in self.iter() {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{k}:{v}")?;
            first = false;
        }
        Ok(())
    }
}

/// One name/value pair of display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetadataField {
    pub name: String,
    pub value: String,
}

impl MetadataField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The version and metadata reported by a completed resource action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionResult {
    version: Version,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    metadata: Vec<MetadataField>,
}

impl VersionResult {
    pub fn new(version: Version, metadata: Vec<MetadataField>) -> Self {
        Self { version, metadata }
    }

    /// Parse the JSON document printed by a resource script.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, CoreError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Display metadata in reported order. Empty, never absent.
    pub fn metadata(&self) -> &[MetadataField] {
        &self.metadata
    }
}
