use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::entities::UpdateEntry;
use crate::enums::CaseStatus;
use crate::errors::CoreError;
use crate::sheet::CaseSheet;

/// One tracked investigation.
///
/// Identity (`id`, `created_at`) and history (`status`, `updates`,
/// `updated_at`) are only reachable through methods, so the update log stays
/// append-only and every status change is recorded. The free-text content
/// fields are public; callers that edit them directly are expected to
/// [`touch`](Self::touch) the case afterwards.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct Case {
    id: String,
    pub title: String,
    pub description: String,
    /// Caller-supplied date, kept verbatim.
    pub date_reported: String,
    status: CaseStatus,
    pub location: String,
    pub evidence: Vec<String>,
    updates: Vec<UpdateEntry>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Caller input for a new case.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct NewCase {
    pub title: String,
    pub description: String,
    pub date_reported: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub evidence: Vec<String>,
}

impl NewCase {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        date_reported: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            date_reported: date_reported.into(),
            location: String::new(),
            evidence: Vec::new(),
        }
    }

    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    #[must_use]
    pub fn evidence<I, S>(mut self, evidence: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.evidence = evidence.into_iter().map(Into::into).collect();
        self
    }
}

/// Serialized form of a case as found in a snapshot.
///
/// Only `id`, `title`, `description` and `date_reported` are required. The
/// legacy key `case_id` is accepted for `id`.
#[derive(Debug, Clone, Deserialize)]
pub struct CaseRecord {
    #[serde(alias = "case_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub date_reported: String,
    #[serde(default, deserialize_with = "crate::lenient::null_as_default")]
    pub status: CaseStatus,
    #[serde(default, deserialize_with = "crate::lenient::null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "crate::lenient::null_as_default")]
    pub evidence: Vec<String>,
    #[serde(default, deserialize_with = "crate::lenient::null_as_default")]
    pub updates: Vec<UpdateEntry>,
    #[serde(default, deserialize_with = "crate::lenient::optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::lenient::optional_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Case {
    /// Create a case in the `Open` state with an empty update log.
    #[must_use]
    pub fn new(id: impl Into<String>, input: NewCase, clock: &dyn Clock) -> Self {
        let now = clock.now();
        Self {
            id: id.into(),
            title: input.title,
            description: input.description,
            date_reported: input.date_reported,
            status: CaseStatus::Open,
            location: input.location,
            evidence: input.evidence,
            updates: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild a case from its serialized record, filling missing timestamps
    /// from `clock`.
    #[must_use]
    pub fn from_record(record: CaseRecord, clock: &dyn Clock) -> Self {
        let now = clock.now();
        let created_at = record.created_at.unwrap_or(now);
        let updated_at = record.updated_at.unwrap_or(now).max(created_at);
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            date_reported: record.date_reported,
            status: record.status,
            location: record.location,
            evidence: record.evidence,
            updates: record.updates,
            created_at,
            updated_at,
        }
    }

    /// Parse one case from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns the serde error when a required field is missing or a field
    /// has the wrong shape.
    pub fn from_json(
        value: serde_json::Value,
        clock: &dyn Clock,
    ) -> Result<Self, serde_json::Error> {
        let record: CaseRecord = serde_json::from_value(value)?;
        Ok(Self::from_record(record, clock))
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub const fn status(&self) -> CaseStatus {
        self.status
    }

    /// The update log, oldest first.
    #[must_use]
    pub fn updates(&self) -> &[UpdateEntry] {
        &self.updates
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Append a note to the update log. Empty text is allowed.
    pub fn add_update(&mut self, text: impl Into<String>, clock: &dyn Clock) -> &UpdateEntry {
        let now = self.stamp(clock);
        self.updates.push(UpdateEntry {
            timestamp: now,
            text: text.into(),
        });
        &self.updates[self.updates.len() - 1]
    }

    /// Set the status and log `"Status changed: {old} -> {new}"`.
    ///
    /// Always appends exactly one entry, including for `old == new`. Use
    /// [`transition_to`](Self::transition_to) to respect the lifecycle.
    pub fn change_status(&mut self, new_status: CaseStatus, clock: &dyn Clock) {
        let old_status = self.status;
        self.status = new_status;
        self.add_update(format!("Status changed: {old_status} -> {new_status}"), clock);
    }

    /// Lifecycle-checked status change.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTransition` (leaving the case untouched)
    /// when the current status does not allow `new_status`.
    pub fn transition_to(
        &mut self,
        new_status: CaseStatus,
        clock: &dyn Clock,
    ) -> Result<(), CoreError> {
        if !self.status.can_transition_to(new_status) {
            return Err(CoreError::InvalidTransition {
                id: self.id.clone(),
                from: self.status,
                to: new_status,
            });
        }
        self.change_status(new_status, clock);
        Ok(())
    }

    /// Refresh `updated_at` after a content edit.
    pub fn touch(&mut self, clock: &dyn Clock) {
        self.stamp(clock);
    }

    /// Whether `needle_lower` (already lower-cased) occurs in the title,
    /// description or location. Evidence is not searched.
    #[must_use]
    pub fn matches_query(&self, needle_lower: &str) -> bool {
        [&self.title, &self.description, &self.location]
            .iter()
            .any(|field| field.to_lowercase().contains(needle_lower))
    }

    /// Plain-text display sheet for this case.
    #[must_use]
    pub const fn sheet(&self) -> CaseSheet<'_> {
        CaseSheet::new(self)
    }

    /// Read the clock, clamp to `created_at`, and record it as `updated_at`.
    fn stamp(&mut self, clock: &dyn Clock) -> DateTime<Utc> {
        let now = clock.now().max(self.created_at);
        self.updated_at = now;
        now
    }
}
