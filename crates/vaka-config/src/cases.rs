//! Case lifecycle settings.

use serde::{Deserialize, Serialize};

const fn default_strict() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CasesConfig {
    /// Reject status changes the lifecycle does not allow
    /// (`Open -> Closed`, anything out of `Closed`).
    #[serde(default = "default_strict")]
    pub strict_transitions: bool,
}

impl Default for CasesConfig {
    fn default() -> Self {
        Self {
            strict_transitions: default_strict(),
        }
    }
}
