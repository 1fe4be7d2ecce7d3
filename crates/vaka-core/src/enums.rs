//! Case status enum and its lifecycle.
//!
//! Statuses serialize as their variant names (`"Open"`, `"UnderInvestigation"`,
//! `"Closed"`). Older snapshots wrote `snake_case` names or the Turkish labels
//! (`"Açık"`, `"Soruşturma"`, `"Kapalı"`); both are accepted as aliases when
//! deserializing and when parsing with [`str::parse`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// CaseStatus
// ---------------------------------------------------------------------------

/// Status of a case through its investigation lifecycle.
///
/// ```text
/// open → under_investigation → closed
///        under_investigation → open (reopened for intake)
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum CaseStatus {
    #[default]
    #[serde(alias = "open", alias = "Açık")]
    Open,
    #[serde(alias = "under_investigation", alias = "Soruşturma")]
    UnderInvestigation,
    #[serde(alias = "closed", alias = "Kapalı")]
    Closed,
}

impl CaseStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 3] = [Self::Open, Self::UnderInvestigation, Self::Closed];

    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Open => &[Self::UnderInvestigation],
            Self::UnderInvestigation => &[Self::Open, Self::Closed],
            Self::Closed => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Whether no further transition is possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Closed)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::UnderInvestigation => "UnderInvestigation",
            Self::Closed => "Closed",
        }
    }

    /// Turkish label used by the operators' paper forms.
    #[must_use]
    pub const fn label_tr(self) -> &'static str {
        match self {
            Self::Open => "Açık",
            Self::UnderInvestigation => "Soruşturma",
            Self::Closed => "Kapalı",
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseStatus {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "open" | "açık" | "acik" => Ok(Self::Open),
            "underinvestigation" | "under_investigation" | "soruşturma" | "sorusturma" => {
                Ok(Self::UnderInvestigation)
            }
            "closed" | "kapalı" | "kapali" => Ok(Self::Closed),
            _ => Err(CoreError::UnknownStatus(raw.to_string())),
        }
    }
}
