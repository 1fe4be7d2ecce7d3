//! Error types for vaka-store.

use std::path::PathBuf;

use thiserror::Error;
use vaka_core::errors::CoreError;

/// Errors from snapshot persistence and case mutations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The snapshot file could not be read or written.
    #[error("Snapshot I/O failed for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot exists but is not a valid array of case records.
    #[error("Malformed snapshot {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    /// A field in an update payload has the wrong shape.
    #[error("Invalid value for field '{field}': {reason}")]
    InvalidField { field: String, reason: String },

    /// The case model rejected the change.
    #[error(transparent)]
    Core(#[from] CoreError),
}
