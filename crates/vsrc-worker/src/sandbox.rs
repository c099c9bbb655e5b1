//! # Sandbox Streaming Contract
//!
//! Implemented by the sandbox runtime. Paths are absolute paths inside the
//! sandbox filesystem and are passed through exactly as given: a trailing
//! separator on `stream_out` asks for a directory's contents rather than the
//! directory entry itself.

use async_trait::async_trait;

use crate::error::SandboxError;
use crate::stream::ArchiveStream;

/// A running or completed execution sandbox, seen as archive storage.
///
/// The sandbox decides what concurrent writes to overlapping paths mean.
/// Callers must not assume they are serialized.
#[async_trait]
pub trait Sandbox: Send + Sync {
    /// Runtime-assigned identifier, for diagnostics.
    fn handle(&self) -> &str;

    /// Archive the tree at `path`. The returned stream is lazy and
    /// single-pass; dropping it releases the underlying handle.
    async fn stream_out(&self, path: &str) -> Result<ArchiveStream, SandboxError>;

    /// Extract `archive` under `path`. Succeeds only after the whole stream
    /// has been consumed.
    async fn stream_in(&self, path: &str, archive: ArchiveStream) -> Result<(), SandboxError>;
}
