//! # Backend Error Types
//!
//! One enum per backend so a caller can always tell which side of a transfer
//! failed. Neither carries retry hints; retrying is the orchestrator's call.

use thiserror::Error;

/// Failure reported by a sandbox while streaming.
#[derive(Error, Debug)]
pub enum SandboxError {
    /// Nothing exists at the requested path.
    #[error("sandbox {handle}: no such path {path:?}")]
    NotFound {
        /// Sandbox handle.
        handle: String,
        /// Path exactly as requested.
        path: String,
    },

    /// Reading or writing the archive failed.
    #[error("sandbox stream io: {0}")]
    Io(#[from] std::io::Error),

    /// Any other failure reported by the sandbox runtime.
    #[error("sandbox backend: {0}")]
    Backend(String),
}

/// Failure reported by a cache volume while streaming.
#[derive(Error, Debug)]
pub enum VolumeError {
    /// Nothing exists at the requested path.
    #[error("volume {handle}: no such path {path:?}")]
    NotFound {
        /// Volume handle.
        handle: String,
        /// Path exactly as requested.
        path: String,
    },

    /// Reading or writing the archive failed.
    #[error("volume stream io: {0}")]
    Io(#[from] std::io::Error),

    /// Any other failure reported by the cache subsystem.
    #[error("volume backend: {0}")]
    Backend(String),
}
