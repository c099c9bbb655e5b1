//! # vsrc-worker: Backend Streaming Contracts
//!
//! The two storage backends an artifact can live on:
//!
//! - **Sandbox**: the filesystem of a running or finished step container.
//!   Addressed by absolute path.
//! - **Volume**: a persistent cache volume scoped to one resource version.
//!   Addressed by path relative to the volume root.
//!
//! Both speak the same archive-stream protocol ([`ArchiveStream`]) and both
//! are implemented outside this workspace by the sandbox runtime and the
//! cache subsystem. [`memory`] provides in-memory implementations for tests
//! and local wiring.
//!
//! ## Crate Policy
//!
//! - Depends only on `vsrc-core` internally.
//! - Backends are `Send + Sync` and shared behind `Arc`.
//! - Backend errors are values of this crate's error types and travel to
//!   callers unchanged.

pub mod error;
pub mod memory;
pub mod sandbox;
pub mod stream;
pub mod volume;

pub use error::{SandboxError, VolumeError};
pub use memory::{InMemorySandbox, InMemoryVolume};
pub use sandbox::Sandbox;
pub use stream::{archive_from_bytes, read_archive, ArchiveStream};
pub use volume::Volume;
