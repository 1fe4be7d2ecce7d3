//! JSON snapshot of the full case collection.
//!
//! The file is a top-level JSON array of case records, pretty-printed UTF-8
//! with non-ASCII text written verbatim. Every save rewrites the whole file in
//! place; there is no temp-file rename, so a crash mid-write can leave a
//! truncated snapshot behind.

use std::path::{Path, PathBuf};

use vaka_core::clock::Clock;
use vaka_core::entities::Case;

use crate::error::StoreError;

/// Reads and writes the case snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
    enabled: bool,
}

impl SnapshotFile {
    /// A snapshot stored at `path`. Nothing is touched until the first
    /// [`load`](Self::load) or [`save`](Self::save).
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            enabled: true,
        }
    }

    /// A snapshot that loads nothing and discards saves (for tests).
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            path: PathBuf::new(),
            enabled: false,
        }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every case from the snapshot.
    ///
    /// A missing file is an empty collection. Timestamps absent from a record
    /// are filled from `clock`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file exists but cannot be read and
    /// `StoreError::Malformed` if it is not a JSON array or any record fails
    /// to parse.
    pub fn load(&self, clock: &dyn Clock) -> Result<Vec<Case>, StoreError> {
        if !self.enabled {
            return Ok(Vec::new());
        }

        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No snapshot at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let records: Vec<serde_json::Value> =
            serde_json::from_str(&raw).map_err(|e| self.malformed(e.to_string()))?;

        let cases = records
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                Case::from_json(value, clock)
                    .map_err(|e| self.malformed(format!("record {index}: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("Loaded {} cases from {}", cases.len(), self.path.display());
        Ok(cases)
    }

    /// Overwrite the snapshot with `cases`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory or file cannot be written.
    pub fn save<'a, I>(&self, cases: I) -> Result<(), StoreError>
    where
        I: IntoIterator<Item = &'a Case>,
    {
        if !self.enabled {
            return Ok(());
        }

        let cases: Vec<&Case> = cases.into_iter().collect();
        let json = serde_json::to_string_pretty(&cases)
            .map_err(|e| self.malformed(format!("serialize: {e}")))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| self.io(source))?;
        }
        std::fs::write(&self.path, json).map_err(|source| self.io(source))?;

        tracing::debug!("Saved {} cases to {}", cases.len(), self.path.display());
        Ok(())
    }

    fn io(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn malformed(&self, reason: String) -> StoreError {
        StoreError::Malformed {
            path: self.path.clone(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use vaka_core::clock::ManualClock;
    use vaka_core::entities::NewCase;

    fn clock() -> ManualClock {
        ManualClock::new(Utc.with_ymd_and_hms(2026, 1, 11, 9, 0, 0).unwrap())
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = SnapshotFile::new(dir.path().join("cases.json"));
        assert!(snapshot.load(&clock()).unwrap().is_empty());
    }

    #[test]
    fn disabled_snapshot_ignores_everything() {
        let clock = clock();
        let snapshot = SnapshotFile::disabled();
        let case = Case::new("CASE-0001", NewCase::new("t", "d", "2026-01-11"), &clock);
        snapshot.save([&case]).unwrap();
        assert!(snapshot.load(&clock).unwrap().is_empty());
        assert!(!snapshot.is_enabled());
    }

    #[test]
    fn save_creates_parent_dirs_and_writes_an_array() {
        let clock = clock();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("data").join("cases.json");
        let snapshot = SnapshotFile::new(&path);

        let case = Case::new(
            "CASE-0001",
            NewCase::new("Ekonomik şiddet", "Maaşına el konuldu", "2026-01-05"),
            &clock,
        );
        snapshot.save([&case]).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.trim_start().starts_with('['));
        assert!(raw.contains("Ekonomik şiddet"), "non-ASCII must be verbatim");

        let loaded = snapshot.load(&clock).unwrap();
        assert_eq!(loaded, vec![case]);
    }

    #[test]
    fn non_array_snapshot_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cases.json");
        std::fs::write(&path, r#"{"CASE-0001": {}}"#).unwrap();

        let err = SnapshotFile::new(&path).load(&clock()).unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
    }

    #[test]
    fn bad_record_names_its_index() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cases.json");
        std::fs::write(
            &path,
            r#"[{"id":"CASE-0001","title":"t","description":"d","date_reported":"x"},{"id":"CASE-0002"}]"#,
        )
        .unwrap();

        let err = SnapshotFile::new(&path).load(&clock()).unwrap_err();
        assert!(err.to_string().contains("record 1"), "{err}");
    }

    #[test]
    fn directory_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = SnapshotFile::new(dir.path());
        assert!(matches!(
            snapshot.load(&clock()),
            Err(StoreError::Io { .. })
        ));
        assert!(matches!(snapshot.save([]), Err(StoreError::Io { .. })));
    }
}
