//! # Transfer Error Types
//!
//! A transfer error is the backend's own error, tagged with the backend that
//! raised it. Display is transparent: the message a user sees is exactly the
//! backend's message.

use thiserror::Error;
use vsrc_worker::{SandboxError, VolumeError};

use crate::repository::ArtifactName;

/// Failure while streaming a payload in or out of a source.
#[derive(Error, Debug)]
pub enum TransferError {
    /// The sandbox backend failed.
    #[error(transparent)]
    Sandbox(#[from] SandboxError),

    /// The cache-volume backend failed.
    #[error(transparent)]
    Volume(#[from] VolumeError),
}

/// Failure while wiring a named artifact into a destination.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// No source is registered under this name.
    #[error("unknown artifact: {0}")]
    UnknownArtifact(ArtifactName),

    /// Streaming failed on either side.
    #[error(transparent)]
    Transfer(#[from] TransferError),
}
