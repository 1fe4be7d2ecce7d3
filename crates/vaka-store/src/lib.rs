//! # vaka-store
//!
//! Case collection management for vaka.
//!
//! [`CaseManager`] owns every case in memory, assigns `CASE-%04d`
//! identifiers, answers list/search queries, and rewrites the whole JSON
//! snapshot after each mutation. The snapshot is a plain top-level JSON
//! array handled by [`SnapshotFile`].
//!
//! Persistence failures never abort an operation: a snapshot that cannot be
//! read starts an empty collection, and a snapshot that cannot be written
//! leaves the in-memory state authoritative. Both are reported through
//! `tracing::warn!`.

pub mod error;
pub mod manager;
pub mod snapshot;
pub mod update;

pub use error::StoreError;
pub use manager::{CaseManager, ManagerOptions};
pub use snapshot::SnapshotFile;
pub use update::{CaseUpdate, CaseUpdateBuilder};
