//! # Artifact Repository
//!
//! Wiring a downstream step means taking the artifacts produced or fetched
//! by earlier steps and streaming each one into the new step's sandbox. The
//! repository holds those artifacts by name, as `Arc<dyn VersionedSource>`,
//! so the wiring code never needs to know which variant it is moving.
//!
//! A transfer streams the whole tree: `"."` out of the source, `"."` into
//! the destination.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use vsrc_core::path;
use vsrc_worker::{ArchiveStream, Sandbox};

use crate::error::{RepositoryError, TransferError};
use crate::versioned_source::VersionedSource;

/// Name under which an artifact is made available to later steps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactName(String);

impl ArtifactName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtifactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Somewhere an artifact's archive can be extracted.
#[async_trait]
pub trait ArtifactDestination: Send + Sync {
    async fn stream_in(&self, path: &str, archive: ArchiveStream) -> Result<(), TransferError>;
}

/// A directory inside a step's sandbox, typically one of its input dirs.
pub struct SandboxDestination {
    sandbox: Arc<dyn Sandbox>,
    dir: String,
}

impl SandboxDestination {
    pub fn new(sandbox: Arc<dyn Sandbox>, dir: impl Into<String>) -> Self {
        Self {
            sandbox,
            dir: dir.into(),
        }
    }

    pub fn dir(&self) -> &str {
        &self.dir
    }
}

#[async_trait]
impl ArtifactDestination for SandboxDestination {
    async fn stream_in(&self, dst: &str, archive: ArchiveStream) -> Result<(), TransferError> {
        let path = path::join([self.dir.as_str(), dst]);
        tracing::debug!(sandbox = self.sandbox.handle(), path = %path, "streaming artifact into sandbox");
        self.sandbox
            .stream_in(&path, archive)
            .await
            .map_err(TransferError::Sandbox)
    }
}

/// Named artifacts available to downstream steps.
#[derive(Default)]
pub struct ArtifactRepository {
    sources: RwLock<BTreeMap<ArtifactName, Arc<dyn VersionedSource>>>,
}

impl ArtifactRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `source` under `name`, returning any source it replaces.
    pub fn register_source(
        &self,
        name: ArtifactName,
        source: Arc<dyn VersionedSource>,
    ) -> Option<Arc<dyn VersionedSource>> {
        tracing::debug!(artifact = %name, version = %source.version(), "registering artifact");
        self.sources.write().insert(name, source)
    }

    pub fn source_for(&self, name: &ArtifactName) -> Option<Arc<dyn VersionedSource>> {
        self.sources.read().get(name).cloned()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<ArtifactName> {
        self.sources.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.sources.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stream the whole tree of the artifact called `name` into `destination`.
    pub async fn stream_to(
        &self,
        name: &ArtifactName,
        destination: &dyn ArtifactDestination,
    ) -> Result<(), RepositoryError> {
        let source = self
            .source_for(name)
            .ok_or_else(|| RepositoryError::UnknownArtifact(name.clone()))?;

        tracing::debug!(artifact = %name, version = %source.version(), "streaming artifact to destination");
        let archive = source.stream_out(".").await?;
        destination.stream_in(".", archive).await?;
        Ok(())
    }
}

impl fmt::Debug for ArtifactRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArtifactRepository")
            .field("names", &self.names())
            .finish()
    }
}
