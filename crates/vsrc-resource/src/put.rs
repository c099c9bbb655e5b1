//! # Produced Artifacts ("put")
//!
//! A publish action leaves its output in the sandbox that ran it. The put
//! source reads and writes there directly and is never cache-backed.
//!
//! ## Path Asymmetry
//!
//! `stream_out` concatenates the working directory and the requested path
//! as-is, so `out/` stays `out/` and the sandbox archives the directory's
//! contents. `stream_in` writes to a destination directory, where a trailing
//! separator means nothing, so that path is normalized. Keep the two joins
//! separate.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use vsrc_core::{path, MetadataField, Version, VersionResult};
use vsrc_worker::{ArchiveStream, Sandbox, Volume};

use crate::error::TransferError;
use crate::versioned_source::VersionedSource;

/// An artifact produced by a publish action, read from its sandbox.
pub struct PutVersionedSource {
    version_result: VersionResult,
    sandbox: Arc<dyn Sandbox>,
    resource_dir: String,
}

impl PutVersionedSource {
    /// Wrap a completed publish.
    ///
    /// `resource_dir` is the step's working directory inside `sandbox`.
    pub fn new(
        version_result: VersionResult,
        sandbox: Arc<dyn Sandbox>,
        resource_dir: impl Into<String>,
    ) -> Self {
        Self {
            version_result,
            sandbox,
            resource_dir: resource_dir.into(),
        }
    }

    pub fn version_result(&self) -> &VersionResult {
        &self.version_result
    }

    pub fn resource_dir(&self) -> &str {
        &self.resource_dir
    }
}

impl fmt::Debug for PutVersionedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PutVersionedSource")
            .field("version_result", &self.version_result)
            .field("sandbox", &self.sandbox.handle())
            .field("resource_dir", &self.resource_dir)
            .finish()
    }
}

#[async_trait]
impl VersionedSource for PutVersionedSource {
    fn version(&self) -> &Version {
        self.version_result.version()
    }

    fn metadata(&self) -> &[MetadataField] {
        self.version_result.metadata()
    }

    async fn stream_out(&self, src: &str) -> Result<ArchiveStream, TransferError> {
        // Not path::join; cleaning strips the trailing separator.
        let path = path::join_raw(&self.resource_dir, src);
        tracing::debug!(
            sandbox = self.sandbox.handle(),
            path = %path,
            version = %self.version(),
            "streaming produced artifact out"
        );
        self.sandbox.stream_out(&path).await.map_err(|e| {
            tracing::warn!(sandbox = self.sandbox.handle(), path = %path, error = %e, "stream out failed");
            TransferError::Sandbox(e)
        })
    }

    async fn stream_in(&self, dst: &str, archive: ArchiveStream) -> Result<(), TransferError> {
        let path = path::join([self.resource_dir.as_str(), dst]);
        tracing::debug!(
            sandbox = self.sandbox.handle(),
            path = %path,
            version = %self.version(),
            "streaming into produced artifact"
        );
        self.sandbox.stream_in(&path, archive).await.map_err(|e| {
            tracing::warn!(sandbox = self.sandbox.handle(), path = %path, error = %e, "stream in failed");
            TransferError::Sandbox(e)
        })
    }

    fn volume(&self) -> Option<Arc<dyn Volume>> {
        None
    }
}
