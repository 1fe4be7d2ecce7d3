//! Entity structs for vaka domain objects.
//!
//! `Case` is the only aggregate; its update log entries are `UpdateEntry`.
//! All entities derive `Serialize` and `JsonSchema`. Loading goes through the
//! lenient `CaseRecord` so older or hand-edited snapshots still parse.

mod case;
mod update_entry;

pub use case::{Case, CaseRecord, NewCase};
pub use update_entry::UpdateEntry;
