//! # vsrc-core: Foundational Types for Artifact Transfer
//!
//! Leaf crate of the workspace. It defines the pieces every other crate
//! agrees on and depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Opaque version identity.** `Version` is an ordered key/value map that
//!    is compared, displayed and serialized, never interpreted.
//!
//! 2. **Immutable results.** `VersionResult` hands out shared references only.
//!    Once a resource action has reported its version, nothing downstream can
//!    rewrite it.
//!
//! 3. **Two path joins, never one.** `path::join_raw` keeps a trailing
//!    separator intact; `path::join` normalizes. Which one a caller uses
//!    changes archive semantics, so both exist side by side.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `vsrc-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod config;
pub mod error;
pub mod path;
pub mod telemetry;
pub mod version;

// Re-export primary types for ergonomic imports.
pub use config::{Config, StagingConfig, FETCH_STAGING_SUFFIX, PUBLISH_STAGING_SUFFIX};
pub use error::CoreError;
pub use telemetry::{init_tracing, LogFormat, TelemetryConfig};
pub use version::{MetadataField, Version, VersionResult};
