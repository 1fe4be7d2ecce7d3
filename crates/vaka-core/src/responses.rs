//! CLI response types returned as JSON by `vaka` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Case;
use crate::enums::CaseStatus;

/// Response from `vaka delete`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeleteResponse {
    pub id: String,
    pub deleted: bool,
}

/// Response from `vaka search`.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<Case>,
    pub total_results: usize,
}

/// Per-status case counts, returned by `vaka stats`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub open: usize,
    pub under_investigation: usize,
    pub closed: usize,
}

impl StatusCounts {
    /// Count one case with the given status.
    pub const fn record(&mut self, status: CaseStatus) {
        self.total += 1;
        match status {
            CaseStatus::Open => self.open += 1,
            CaseStatus::UnderInvestigation => self.under_investigation += 1,
            CaseStatus::Closed => self.closed += 1,
        }
    }

    #[must_use]
    pub const fn get(&self, status: CaseStatus) -> usize {
        match status {
            CaseStatus::Open => self.open,
            CaseStatus::UnderInvestigation => self.under_investigation,
            CaseStatus::Closed => self.closed,
        }
    }
}

impl FromIterator<CaseStatus> for StatusCounts {
    fn from_iter<I: IntoIterator<Item = CaseStatus>>(iter: I) -> Self {
        let mut counts = Self::default();
        for status in iter {
            counts.record(status);
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_per_status_and_total() {
        let counts: StatusCounts = [
            CaseStatus::Open,
            CaseStatus::UnderInvestigation,
            CaseStatus::UnderInvestigation,
            CaseStatus::Closed,
        ]
        .into_iter()
        .collect();

        assert_eq!(counts.total, 4);
        assert_eq!(counts.get(CaseStatus::Open), 1);
        assert_eq!(counts.get(CaseStatus::UnderInvestigation), 2);
        assert_eq!(counts.get(CaseStatus::Closed), 1);
    }
}
