//! In-memory case collection backed by a JSON snapshot.

use std::path::{Path, PathBuf};

use vaka_core::clock::{Clock, SystemClock};
use vaka_core::entities::{Case, NewCase};
use vaka_core::enums::CaseStatus;
use vaka_core::ids::{format_case_id, parse_case_sequence};
use vaka_core::responses::StatusCounts;

use crate::error::StoreError;
use crate::snapshot::SnapshotFile;
use crate::update::CaseUpdate;

/// Behavioural switches for a [`CaseManager`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManagerOptions {
    /// Enforce the case lifecycle on status changes. When `false` any
    /// recognised status may follow any other.
    pub strict_transitions: bool,
}

impl Default for ManagerOptions {
    fn default() -> Self {
        Self {
            strict_transitions: true,
        }
    }
}

/// Owns every case, assigns identifiers, and persists after each mutation.
///
/// Cases are kept in insertion order. Every create, update, note, status
/// change and successful delete rewrites the full snapshot; a failed write
/// is logged and the in-memory collection stays authoritative.
pub struct CaseManager<C: Clock = SystemClock> {
    cases: Vec<Case>,
    snapshot: SnapshotFile,
    clock: C,
    options: ManagerOptions,
    /// Highest `CASE-` sequence ever held by this manager.
    high_water: u32,
}

impl<C: Clock> CaseManager<C> {
    /// Open the snapshot at `path` with default options.
    ///
    /// A missing, unreadable or malformed snapshot yields an empty manager.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>, clock: C) -> Self {
        Self::open_with(SnapshotFile::new(path), clock, ManagerOptions::default())
    }

    /// Open from an explicit snapshot with explicit options.
    #[must_use]
    pub fn open_with(snapshot: SnapshotFile, clock: C, options: ManagerOptions) -> Self {
        let loaded = match snapshot.load(&clock) {
            Ok(cases) => cases,
            Err(e) => {
                tracing::warn!("Could not load cases, starting empty: {e}");
                Vec::new()
            }
        };

        let mut manager = Self {
            cases: Vec::with_capacity(loaded.len()),
            snapshot,
            clock,
            options,
            high_water: 0,
        };
        for case in loaded {
            if manager.position(case.id()).is_some() {
                tracing::warn!("Skipping duplicate case id {} in snapshot", case.id());
                continue;
            }
            manager.note_id(case.id());
            manager.cases.push(case);
        }
        manager
    }

    /// A manager that never touches the filesystem.
    #[must_use]
    pub fn in_memory(clock: C) -> Self {
        Self::open_with(SnapshotFile::disabled(), clock, ManagerOptions::default())
    }

    #[must_use]
    pub const fn options(&self) -> ManagerOptions {
        self.options
    }

    /// Where the snapshot is written, or `None` for an in-memory manager.
    #[must_use]
    pub fn snapshot_path(&self) -> Option<&Path> {
        self.snapshot.is_enabled().then(|| self.snapshot.path())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Create a case with the next free identifier and persist.
    pub fn create_case(&mut self, input: NewCase) -> &Case {
        let id = self.next_id();
        self.note_id(&id);
        let case = Case::new(id, input, &self.clock);
        tracing::debug!("Created case {}", case.id());
        self.cases.push(case);
        self.persist();
        let index = self.cases.len() - 1;
        &self.cases[index]
    }

    #[must_use]
    pub fn get_case(&self, id: &str) -> Option<&Case> {
        self.cases.iter().find(|case| case.id() == id)
    }

    /// Apply the set fields of `update` and persist.
    ///
    /// A status field takes the same path as [`change_status`](Self::change_status)
    /// and so appends a log entry. `updated_at` is refreshed even when the
    /// update is empty. Returns `Ok(None)` when no case has `id`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Core` when strict transitions are on and the
    /// requested status is not reachable. Nothing is modified in that case.
    pub fn update_case(
        &mut self,
        id: &str,
        update: CaseUpdate,
    ) -> Result<Option<&Case>, StoreError> {
        let Some(index) = self.position(id) else {
            return Ok(None);
        };
        if let Some(status) = update.status {
            self.check_transition(&self.cases[index], status)?;
        }

        let case = &mut self.cases[index];
        if let Some(title) = update.title {
            case.title = title;
        }
        if let Some(description) = update.description {
            case.description = description;
        }
        if let Some(date_reported) = update.date_reported {
            case.date_reported = date_reported;
        }
        if let Some(location) = update.location {
            case.location = location;
        }
        if let Some(evidence) = update.evidence {
            case.evidence = evidence;
        }
        match update.status {
            Some(status) => case.change_status(status, &self.clock),
            None => case.touch(&self.clock),
        }

        self.persist();
        Ok(Some(&self.cases[index]))
    }

    /// Append a note to a case's update log and persist.
    pub fn add_update(&mut self, id: &str, text: &str) -> Option<&Case> {
        let index = self.position(id)?;
        self.cases[index].add_update(text, &self.clock);
        self.persist();
        Some(&self.cases[index])
    }

    /// Move a case to `status`, logging the change, and persist.
    ///
    /// Returns `Ok(None)` when no case has `id`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Core` wrapping `CoreError::InvalidTransition`
    /// when strict transitions are on and the lifecycle forbids the move.
    pub fn change_status(
        &mut self,
        id: &str,
        status: CaseStatus,
    ) -> Result<Option<&Case>, StoreError> {
        let Some(index) = self.position(id) else {
            return Ok(None);
        };
        if self.options.strict_transitions {
            self.cases[index].transition_to(status, &self.clock)?;
        } else {
            self.cases[index].change_status(status, &self.clock);
        }
        self.persist();
        Ok(Some(&self.cases[index]))
    }

    /// Remove a case. Returns `false` (and writes nothing) if it was absent.
    pub fn delete_case(&mut self, id: &str) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.cases.remove(index);
        tracing::debug!("Deleted case {id}");
        self.persist();
        true
    }

    /// Cases, optionally filtered by status, newest first.
    ///
    /// Ties on `created_at` are broken by id, descending.
    #[must_use]
    pub fn list_cases(&self, status: Option<CaseStatus>) -> Vec<&Case> {
        let mut cases: Vec<&Case> = self
            .cases
            .iter()
            .filter(|case| status.is_none_or(|s| case.status() == s))
            .collect();
        cases.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.id().cmp(a.id()))
        });
        cases
    }

    /// Case-insensitive substring search over title, description and
    /// location, in insertion order.
    #[must_use]
    pub fn search_cases(&self, query: &str) -> Vec<&Case> {
        let needle = query.to_lowercase();
        self.cases
            .iter()
            .filter(|case| case.matches_query(&needle))
            .collect()
    }

    #[must_use]
    pub fn status_counts(&self) -> StatusCounts {
        self.cases.iter().map(Case::status).collect()
    }

    /// Write the full collection to the snapshot now.
    ///
    /// # Errors
    ///
    /// Returns the underlying `StoreError` if the write fails.
    pub fn save(&self) -> Result<(), StoreError> {
        self.snapshot.save(&self.cases)
    }

    fn persist(&self) {
        if let Err(e) = self.save() {
            tracing::warn!("Could not save cases, keeping changes in memory: {e}");
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.cases.iter().position(|case| case.id() == id)
    }

    fn check_transition(&self, case: &Case, status: CaseStatus) -> Result<(), StoreError> {
        if self.options.strict_transitions && !case.status().can_transition_to(status) {
            return Err(vaka_core::errors::CoreError::InvalidTransition {
                id: case.id().to_string(),
                from: case.status(),
                to: status,
            }
            .into());
        }
        Ok(())
    }

    fn next_id(&self) -> String {
        let count = u32::try_from(self.cases.len()).unwrap_or(u32::MAX);
        format_case_id(count.max(self.high_water).saturating_add(1))
    }

    fn note_id(&mut self, id: &str) {
        if let Some(sequence) = parse_case_sequence(id) {
            self.high_water = self.high_water.max(sequence);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use vaka_core::clock::ManualClock;
    use vaka_core::errors::CoreError;

    use crate::update::CaseUpdateBuilder;

    fn clock() -> ManualClock {
        ManualClock::ticking(
            Utc.with_ymd_and_hms(2026, 1, 11, 9, 0, 0).unwrap(),
            Duration::seconds(1),
        )
    }

    fn new_case(title: &str) -> NewCase {
        NewCase::new(title, format!("{title} açıklaması"), "2026-01-10")
    }

    #[test]
    fn ids_grow_sequentially() {
        let mut mgr = CaseManager::in_memory(clock());
        let ids: Vec<String> = (1..=5)
            .map(|n| mgr.create_case(new_case(&format!("case {n}"))).id().to_string())
            .collect();
        assert_eq!(
            ids,
            ["CASE-0001", "CASE-0002", "CASE-0003", "CASE-0004", "CASE-0005"]
        );
    }

    #[test]
    fn deleting_the_newest_case_does_not_reuse_its_id() {
        let mut mgr = CaseManager::in_memory(clock());
        mgr.create_case(new_case("a"));
        mgr.create_case(new_case("b"));
        assert!(mgr.delete_case("CASE-0002"));
        assert_eq!(mgr.create_case(new_case("c")).id(), "CASE-0003");
    }

    #[test]
    fn deleting_an_older_case_never_collides() {
        let mut mgr = CaseManager::in_memory(clock());
        for n in 0..3 {
            mgr.create_case(new_case(&n.to_string()));
        }
        assert!(mgr.delete_case("CASE-0001"));
        let id = mgr.create_case(new_case("new")).id().to_string();
        assert_eq!(id, "CASE-0004");
        assert_eq!(mgr.len(), 3);
    }

    #[test]
    fn get_missing_is_none() {
        let mgr = CaseManager::in_memory(clock());
        assert!(mgr.get_case("CASE-0001").is_none());
        assert!(mgr.is_empty());
        assert!(mgr.snapshot_path().is_none());
    }

    #[test]
    fn update_case_applies_only_set_fields() {
        let mut mgr = CaseManager::in_memory(clock());
        let before = mgr.create_case(new_case("Orijinal")).clone();

        let update = CaseUpdateBuilder::new()
            .location("Bursa, Nilüfer")
            .evidence(["Mesaj kayıtları"])
            .build();
        let after = mgr.update_case("CASE-0001", update).unwrap().unwrap();

        assert_eq!(after.title, "Orijinal");
        assert_eq!(after.location, "Bursa, Nilüfer");
        assert_eq!(after.evidence, vec!["Mesaj kayıtları"]);
        assert_eq!(after.created_at(), before.created_at());
        assert!(after.updated_at() > before.updated_at());
        assert!(after.updates().is_empty());
    }

    #[test]
    fn empty_update_still_touches() {
        let mut mgr = CaseManager::in_memory(clock());
        let before = mgr.create_case(new_case("x")).updated_at();
        let after = mgr
            .update_case("CASE-0001", CaseUpdate::default())
            .unwrap()
            .unwrap()
            .updated_at();
        assert!(after > before);
    }

    #[test]
    fn update_status_goes_through_the_log() {
        let mut mgr = CaseManager::in_memory(clock());
        mgr.create_case(new_case("x"));
        let update = CaseUpdateBuilder::new()
            .status(CaseStatus::UnderInvestigation)
            .build();
        let case = mgr.update_case("CASE-0001", update).unwrap().unwrap();
        assert_eq!(case.status(), CaseStatus::UnderInvestigation);
        assert_eq!(case.updates().len(), 1);
        assert!(case.updates()[0].text.contains("Open"));
    }

    #[test]
    fn rejected_status_in_update_changes_nothing() {
        let mut mgr = CaseManager::in_memory(clock());
        let before = mgr.create_case(new_case("x")).clone();
        let update = CaseUpdateBuilder::new()
            .title("should not stick")
            .status(CaseStatus::Closed)
            .build();

        let err = mgr.update_case("CASE-0001", update).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::InvalidTransition { .. })
        ));
        assert_eq!(mgr.get_case("CASE-0001"), Some(&before));
    }

    #[test]
    fn update_missing_is_none() {
        let mut mgr = CaseManager::in_memory(clock());
        let result = mgr.update_case("CASE-0042", CaseUpdateBuilder::new().title("t").build());
        assert!(result.unwrap().is_none());
    }

    #[test]
    fn strict_mode_rejects_open_to_closed() {
        let mut mgr = CaseManager::in_memory(clock());
        mgr.create_case(new_case("x"));
        let err = mgr
            .change_status("CASE-0001", CaseStatus::Closed)
            .unwrap_err();
        assert!(err.to_string().contains("Open"));
        assert!(mgr.get_case("CASE-0001").unwrap().updates().is_empty());
    }

    #[test]
    fn lenient_mode_accepts_any_status() {
        let mut mgr = CaseManager::open_with(
            SnapshotFile::disabled(),
            clock(),
            ManagerOptions {
                strict_transitions: false,
            },
        );
        mgr.create_case(new_case("x"));
        let case = mgr
            .change_status("CASE-0001", CaseStatus::Closed)
            .unwrap()
            .unwrap();
        assert_eq!(case.status(), CaseStatus::Closed);
        assert_eq!(case.updates()[0].text, "Status changed: Open -> Closed");

        let case = mgr
            .change_status("CASE-0001", CaseStatus::Closed)
            .unwrap()
            .unwrap();
        assert_eq!(case.updates().len(), 2);
    }

    #[test]
    fn change_status_missing_is_none() {
        let mut mgr = CaseManager::in_memory(clock());
        assert!(
            mgr.change_status("CASE-0001", CaseStatus::UnderInvestigation)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn add_update_appends_a_note() {
        let mut mgr = CaseManager::in_memory(clock());
        mgr.create_case(new_case("x"));
        let case = mgr.add_update("CASE-0001", "Tanık dinlendi").unwrap();
        assert_eq!(case.updates().len(), 1);
        assert_eq!(case.updates()[0].text, "Tanık dinlendi");
        assert!(mgr.add_update("CASE-0099", "nope").is_none());
    }

    #[test]
    fn delete_reports_presence() {
        let mut mgr = CaseManager::in_memory(clock());
        mgr.create_case(new_case("x"));
        assert!(!mgr.delete_case("CASE-0002"));
        assert_eq!(mgr.len(), 1);
        assert!(mgr.delete_case("CASE-0001"));
        assert!(mgr.get_case("CASE-0001").is_none());
        assert!(!mgr.delete_case("CASE-0001"));
    }

    #[test]
    fn list_is_newest_first_and_filters_by_status() {
        let mut mgr = CaseManager::in_memory(clock());
        for title in ["a", "b", "c", "d"] {
            mgr.create_case(new_case(title));
        }
        mgr.change_status("CASE-0002", CaseStatus::UnderInvestigation)
            .unwrap();
        mgr.change_status("CASE-0004", CaseStatus::UnderInvestigation)
            .unwrap();

        let all: Vec<&str> = mgr.list_cases(None).iter().map(|c| c.id()).collect();
        assert_eq!(all, ["CASE-0004", "CASE-0003", "CASE-0002", "CASE-0001"]);

        let investigating: Vec<&str> = mgr
            .list_cases(Some(CaseStatus::UnderInvestigation))
            .iter()
            .map(|c| c.id())
            .collect();
        assert_eq!(investigating, ["CASE-0004", "CASE-0002"]);
        assert!(mgr.list_cases(Some(CaseStatus::Closed)).is_empty());
    }

    #[test]
    fn list_ties_break_on_id() {
        let frozen = ManualClock::new(Utc.with_ymd_and_hms(2026, 1, 11, 9, 0, 0).unwrap());
        let mut mgr = CaseManager::in_memory(&frozen);
        mgr.create_case(new_case("a"));
        mgr.create_case(new_case("b"));
        let ids: Vec<&str> = mgr.list_cases(None).iter().map(|c| c.id()).collect();
        assert_eq!(ids, ["CASE-0002", "CASE-0001"]);
    }

    #[test]
    fn search_is_case_insensitive_and_ignores_evidence() {
        let mut mgr = CaseManager::in_memory(clock());
        mgr.create_case(
            NewCase::new("Aile içi şiddet vakası", "Fiziksel şiddet", "2026-01-10")
                .location("Ankara, Çankaya")
                .evidence(["Tıbbi rapor"]),
        );
        mgr.create_case(
            NewCase::new("İşyerinde taciz", "Yönetici tarafından", "2026-01-05")
                .location("İstanbul, Kadıköy"),
        );
        mgr.create_case(NewCase::new("Siber zorbalık", "Tehdit mesajları", "2026-01-08"));

        let hits: Vec<&str> = mgr.search_cases("ŞIDDET").iter().map(|c| c.id()).collect();
        assert_eq!(hits, ["CASE-0001"]);
        assert_eq!(mgr.search_cases("kadıköy").len(), 1);
        assert!(mgr.search_cases("tıbbi").is_empty());

        let everything: Vec<&str> = mgr.search_cases("").iter().map(|c| c.id()).collect();
        assert_eq!(everything, ["CASE-0001", "CASE-0002", "CASE-0003"]);
    }

    #[test]
    fn status_counts_cover_every_case() {
        let mut mgr = CaseManager::in_memory(clock());
        for title in ["a", "b", "c"] {
            mgr.create_case(new_case(title));
        }
        mgr.change_status("CASE-0001", CaseStatus::UnderInvestigation)
            .unwrap();
        let counts = mgr.status_counts();
        assert_eq!(counts.total, 3);
        assert_eq!(counts.open, 2);
        assert_eq!(counts.under_investigation, 1);
        assert_eq!(counts.closed, 0);
    }
}
