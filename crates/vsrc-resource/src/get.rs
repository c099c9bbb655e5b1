//! # Fetched Artifacts ("get")
//!
//! A fetch lands on a cache volume, and from then on the volume is the only
//! place this artifact is read from or written to. The sandbox that ran the
//! fetch is never consulted again.
//!
//! The volume is already scoped to this version, so `stream_out` paths go to
//! it verbatim. `stream_in` writes under the fetch staging directory.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use vsrc_core::{path, MetadataField, StagingConfig, Version, VersionResult};
use vsrc_worker::{ArchiveStream, Volume};

use crate::error::TransferError;
use crate::versioned_source::VersionedSource;

/// An artifact retrieved by a fetch action, backed by its cache volume.
pub struct GetVersionedSource {
    version_result: VersionResult,
    volume: Arc<dyn Volume>,
    resource_dir: String,
}

impl GetVersionedSource {
    /// Wrap a fetched volume, staging under the default resources root.
    pub fn new(volume: Arc<dyn Volume>, version: Version, metadata: Vec<MetadataField>) -> Self {
        Self::with_staging(&StagingConfig::default(), volume, version, metadata)
    }

    /// Wrap a fetched volume, staging under `staging`'s fetch directory.
    pub fn with_staging(
        staging: &StagingConfig,
        volume: Arc<dyn Volume>,
        version: Version,
        metadata: Vec<MetadataField>,
    ) -> Self {
        Self {
            version_result: VersionResult::new(version, metadata),
            volume,
            resource_dir: staging.fetch_dir(),
        }
    }

    pub fn version_result(&self) -> &VersionResult {
        &self.version_result
    }

    /// The backing volume. Unlike [`VersionedSource::volume`], this cannot
    /// be absent.
    pub fn cache_volume(&self) -> &Arc<dyn Volume> {
        &self.volume
    }

    /// Directory on the volume that `stream_in` writes under.
    pub fn resource_dir(&self) -> &str {
        &self.resource_dir
    }
}

impl fmt::Debug for GetVersionedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GetVersionedSource")
            .field("version_result", &self.version_result)
            .field("volume", &self.volume.handle())
            .field("resource_dir", &self.resource_dir)
            .finish()
    }
}

#[async_trait]
impl VersionedSource for GetVersionedSource {
    fn version(&self) -> &Version {
        self.version_result.version()
    }

    fn metadata(&self) -> &[MetadataField] {
        self.version_result.metadata()
    }

    async fn stream_out(&self, src: &str) -> Result<ArchiveStream, TransferError> {
        tracing::debug!(
            volume = self.volume.handle(),
            path = src,
            version = %self.version(),
            "streaming fetched artifact out"
        );
        self.volume.stream_out(src).await.map_err(|e| {
            tracing::warn!(volume = self.volume.handle(), path = src, error = %e, "stream out failed");
            TransferError::Volume(e)
        })
    }

    async fn stream_in(&self, dst: &str, archive: ArchiveStream) -> Result<(), TransferError> {
        let path = path::join([self.resource_dir.as_str(), dst]);
        tracing::debug!(
            volume = self.volume.handle(),
            path = %path,
            version = %self.version(),
            "streaming into fetched artifact"
        );
        self.volume.stream_in(&path, archive).await.map_err(|e| {
            tracing::warn!(volume = self.volume.handle(), path = %path, error = %e, "stream in failed");
            TransferError::Volume(e)
        })
    }

    fn volume(&self) -> Option<Arc<dyn Volume>> {
        Some(Arc::clone(&self.volume))
    }
}
