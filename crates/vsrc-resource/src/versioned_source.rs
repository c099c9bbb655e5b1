//! # The Versioned Source Abstraction
//!
//! Everything downstream of a resource action talks to this trait. Exactly
//! two implementations exist, [`PutVersionedSource`] and
//! [`GetVersionedSource`]; a third is not expected.
//!
//! ## Contract
//!
//! - `version()` and `metadata()` return the same data on every call.
//! - `volume()` is `None` for produced artifacts and the construction-time
//!   volume for fetched ones. A `None` here is never an error.
//! - `stream_out` and `stream_in` pass bytes through untouched and return
//!   backend failures unchanged. No retries.
//! - Sources are shared across tasks. Concurrent `stream_in` calls to
//!   overlapping paths are passed to the backend as-is.
//!
//! [`PutVersionedSource`]: crate::PutVersionedSource
//! [`GetVersionedSource`]: crate::GetVersionedSource

use std::sync::Arc;

use async_trait::async_trait;
use vsrc_core::{MetadataField, Version};
use vsrc_worker::{ArchiveStream, Volume};

use crate::error::TransferError;

/// A fetched or produced artifact: its version plus a way to move its files.
#[async_trait]
pub trait VersionedSource: Send + Sync {
    fn version(&self) -> &Version;

    /// Display metadata, in reported order.
    fn metadata(&self) -> &[MetadataField];

    /// Archive the payload at `path`, relative to the artifact root.
    ///
    /// The stream is lazy and single-pass. Read it to the end and drop it.
    async fn stream_out(&self, path: &str) -> Result<ArchiveStream, TransferError>;

    /// Extract `archive` at `path`, relative to the artifact's staging root.
    async fn stream_in(&self, path: &str, archive: ArchiveStream) -> Result<(), TransferError>;

    /// The cache volume backing this artifact, if it may be cached at all.
    fn volume(&self) -> Option<Arc<dyn Volume>>;
}
