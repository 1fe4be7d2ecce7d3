//! Cross-cutting error types for vaka.
//!
//! Storage and export errors live in their own crates (`StoreError`,
//! `ExportError`). Lookup misses are not errors anywhere in vaka: they are
//! reported as `None` or `false`.

use thiserror::Error;

use crate::enums::CaseStatus;

/// Errors raised by the case model itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Status text that does not name one of the three case statuses.
    #[error("Unknown case status: '{0}' (expected Open, UnderInvestigation or Closed)")]
    UnknownStatus(String),

    /// A status transition outside the case lifecycle was attempted.
    #[error("Invalid state transition: case {id} from {from} to {to}")]
    InvalidTransition {
        id: String,
        from: CaseStatus,
        to: CaseStatus,
    },
}
