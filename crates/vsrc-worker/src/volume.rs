//! # Cache-Volume Streaming Contract
//!
//! Implemented by the cache subsystem. A volume is already scoped to one
//! resource version, so paths are relative to the volume root.

use async_trait::async_trait;

use crate::error::VolumeError;
use crate::stream::ArchiveStream;

/// Persistent, content-addressed cache storage for one resource version.
#[async_trait]
pub trait Volume: Send + Sync {
    /// Cache-assigned identifier, for diagnostics.
    fn handle(&self) -> &str;

    /// Archive the tree at `path` relative to the volume root.
    async fn stream_out(&self, path: &str) -> Result<ArchiveStream, VolumeError>;

    /// Extract `archive` under `path` relative to the volume root. Succeeds
    /// only after the whole stream has been consumed.
    async fn stream_in(&self, path: &str, archive: ArchiveStream) -> Result<(), VolumeError>;
}
