//! Export error types.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// Document kind text that names none of the known kinds.
    #[error("Unknown document kind: '{0}' (expected decision, indictment or document)")]
    UnknownKind(String),

    /// Writing the HTML file failed.
    #[error("Could not write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The print command could not be started.
    #[error("Could not run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The print command ran and reported failure.
    #[error("'{program}' failed ({status}): {stderr}")]
    CommandFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    /// The sink cannot perform the requested delivery.
    #[error("{0}")]
    Unsupported(&'static str),
}
