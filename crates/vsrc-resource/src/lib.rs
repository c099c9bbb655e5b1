//! # vsrc-resource: Versioned Artifact Sources
//!
//! A resource action either fetches an existing version into a build or
//! publishes a new version from a build's output. Either way the orchestrator
//! ends up holding a [`VersionedSource`]: the reported version, its display
//! metadata, and a way to stream the payload in and out.
//!
//! | Variant | Backed by | `volume()` |
//! |---|---|---|
//! | [`PutVersionedSource`] | the sandbox that ran the publish | always `None` |
//! | [`GetVersionedSource`] | the cache volume holding the fetch | always `Some` |
//!
//! Produced outputs are step-specific and must never be reused across
//! unrelated runs, so the put variant has no volume field at all. Fetched
//! payloads are cache-backed by definition.
//!
//! [`ArtifactRepository`] collects named sources so a downstream step's
//! inputs can be streamed into place without knowing which variant each one
//! is.

pub mod error;
pub mod get;
pub mod put;
pub mod repository;
pub mod versioned_source;

pub use error::{RepositoryError, TransferError};
pub use get::GetVersionedSource;
pub use put::PutVersionedSource;
pub use repository::{ArtifactDestination, ArtifactName, ArtifactRepository, SandboxDestination};
pub use versioned_source::VersionedSource;
