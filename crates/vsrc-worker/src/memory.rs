//! # In-Memory Backends
//!
//! [`InMemorySandbox`] and [`InMemoryVolume`] keep one opaque archive per
//! path. They are meant for tests and for wiring the transfer layer without
//! a real sandbox runtime or cache.
//!
//! ## Behavior
//!
//! - Every requested path is logged verbatim, so tests can assert on the
//!   exact string a caller sent.
//! - Storage is keyed by the cleaned path: `out/` and `out` name the same
//!   directory, as they would on a real filesystem.
//! - There is no tree merging. Streaming out a path returns exactly the
//!   archive last streamed in at that path, or `NotFound`.
//! - `stream_in` stores nothing unless the whole archive was read. A read
//!   error or a cancelled future leaves the previous content in place.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use sha2::{Digest, Sha256};
use uuid::Uuid;
use vsrc_core::path;

use crate::error::{SandboxError, VolumeError};
use crate::sandbox::Sandbox;
use crate::stream::{archive_from_bytes, read_archive, ArchiveStream};
use crate::volume::Volume;

// ---------------------------------------------------------------------------
// Shared storage
// ---------------------------------------------------------------------------

#[derive(Default)]
struct ArchiveMap {
    archives: RwLock<BTreeMap<String, Vec<u8>>>,
    streamed_out: Mutex<Vec<String>>,
    streamed_in: Mutex<Vec<String>>,
}

impl ArchiveMap {
    fn get(&self, requested: &str) -> Option<Vec<u8>> {
        self.archives.read().get(&path::clean(requested)).cloned()
    }

    fn insert(&self, requested: &str, bytes: Vec<u8>) {
        self.archives.write().insert(path::clean(requested), bytes);
    }

    fn record_out(&self, requested: &str) {
        self.streamed_out.lock().push(requested.to_string());
    }

    fn record_in(&self, requested: &str) {
        self.streamed_in.lock().push(requested.to_string());
    }

    fn digest(&self, requested: &str) -> Option<String> {
        self.get(requested).map(|bytes| {
            Sha256::digest(&bytes)
                .iter()
                .map(|b| format!("{b:02x}"))
                .collect()
        })
    }

    fn len(&self) -> usize {
        self.archives.read().len()
    }
}

macro_rules! archive_map_accessors {
    ($ty:ident) => {
        impl $ty {
            /// Store an archive directly, bypassing the streaming contract.
            pub fn seed(&self, path: &str, archive: impl Into<Vec<u8>>) {
                self.store.insert(path, archive.into());
            }

            /// The archive stored at `path`, if any.
            pub fn archive(&self, path: &str) -> Option<Vec<u8>> {
                self.store.get(path)
            }

            /// Lowercase hex SHA-256 of the archive stored at `path`.
            pub fn archive_digest(&self, path: &str) -> Option<String> {
                self.store.digest(path)
            }

            /// Every path passed to `stream_out`, verbatim, in call order.
            pub fn streamed_out_paths(&self) -> Vec<String> {
                self.store.streamed_out.lock().clone()
            }

            /// Every path passed to `stream_in`, verbatim, in call order.
            pub fn streamed_in_paths(&self) -> Vec<String> {
                self.store.streamed_in.lock().clone()
            }

            /// Number of stored archives.
            pub fn len(&self) -> usize {
                self.store.len()
            }

            pub fn is_empty(&self) -> bool {
                self.len() == 0
            }
        }
    };
}

// ---------------------------------------------------------------------------
// InMemorySandbox
// ---------------------------------------------------------------------------

/// A sandbox whose filesystem is a map of archives.
pub struct InMemorySandbox {
    handle: String,
    store: ArchiveMap,
}

impl InMemorySandbox {
    /// A sandbox with a random handle.
    pub fn new() -> Self {
        Self::with_handle(Uuid::new_v4().to_string())
    }

    pub fn with_handle(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            store: ArchiveMap::default(),
        }
    }
}

impl Default for InMemorySandbox {
    fn default() -> Self {
        Self::new()
    }
}

archive_map_accessors!(InMemorySandbox);

#[async_trait]
impl Sandbox for InMemorySandbox {
    fn handle(&self) -> &str {
        &self.handle
    }

    async fn stream_out(&self, path: &str) -> Result<ArchiveStream, SandboxError> {
        self.store.record_out(path);
        let bytes = self.store.get(path).ok_or_else(|| SandboxError::NotFound {
            handle: self.handle.clone(),
            path: path.to_string(),
        })?;
        tracing::trace!(sandbox = %self.handle, path, bytes = bytes.len(), "serving archive");
        Ok(archive_from_bytes(bytes))
    }

    async fn stream_in(&self, path: &str, archive: ArchiveStream) -> Result<(), SandboxError> {
        self.store.record_in(path);
        let bytes = read_archive(archive).await?;
        tracing::trace!(sandbox = %self.handle, path, bytes = bytes.len(), "stored archive");
        self.store.insert(path, bytes);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// InMemoryVolume
// ---------------------------------------------------------------------------

/// A cache volume whose contents are a map of archives.
pub struct InMemoryVolume {
    handle: String,
    store: ArchiveMap,
}

impl InMemoryVolume {
    /// A volume with a random handle.
    pub fn new() -> Self {
        Self::with_handle(Uuid::new_v4().to_string())
    }

    pub fn with_handle(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            store: ArchiveMap::default(),
        }
    }
}

impl Default for InMemoryVolume {
    fn default() -> Self {
        Self::new()
    }
}

archive_map_accessors!(InMemoryVolume);

#[async_trait]
impl Volume for InMemoryVolume {
    fn handle(&self) -> &str {
        &self.handle
    }

    async fn stream_out(&self, path: &str) -> Result<ArchiveStream, VolumeError> {
        self.store.record_out(path);
        let bytes = self.store.get(path).ok_or_else(|| VolumeError::NotFound {
            handle: self.handle.clone(),
            path: path.to_string(),
        })?;
        tracing::trace!(volume = %self.handle, path, bytes = bytes.len(), "serving archive");
        Ok(archive_from_bytes(bytes))
    }

    async fn stream_in(&self, path: &str, archive: ArchiveStream) -> Result<(), VolumeError> {
        self.store.record_in(path);
        let bytes = read_archive(archive).await?;
        tracing::trace!(volume = %self.handle, path, bytes = bytes.len(), "stored archive");
        self.store.insert(path, bytes);
        Ok(())
    }
}
