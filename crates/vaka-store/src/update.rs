//! Field update builder for cases.
//!
//! Only `Some` fields are applied by [`CaseManager::update_case`]. Identity
//! and history (`id`, `created_at`, `updated_at`, `updates`) have no field
//! here and cannot be edited.
//!
//! [`CaseManager::update_case`]: crate::CaseManager::update_case

use serde::Serialize;
use serde_json::{Map, Value};
use vaka_core::enums::CaseStatus;

use crate::error::StoreError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CaseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_reported: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CaseStatus>,
}

impl CaseUpdate {
    /// Build an update from a JSON object of field name to value.
    ///
    /// Unknown keys (including the read-only `id`, `created_at`,
    /// `updated_at` and `updates`) are ignored. `status` accepts any spelling
    /// `CaseStatus::from_str` does.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidField` when a known field has the wrong
    /// JSON type and `StoreError::Core` for unrecognised status text.
    pub fn from_fields(fields: &Map<String, Value>) -> Result<Self, StoreError> {
        let mut update = Self::default();
        for (key, value) in fields {
            match key.as_str() {
                "title" => update.title = Some(string_field(key, value)?),
                "description" => update.description = Some(string_field(key, value)?),
                "date_reported" => update.date_reported = Some(string_field(key, value)?),
                "location" => update.location = Some(string_field(key, value)?),
                "evidence" => update.evidence = Some(string_list_field(key, value)?),
                "status" => update.status = Some(string_field(key, value)?.parse()?),
                other => tracing::debug!("Ignoring unknown update field '{other}'"),
            }
        }
        Ok(update)
    }

    /// Whether no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.date_reported.is_none()
            && self.location.is_none()
            && self.evidence.is_none()
            && self.status.is_none()
    }
}

fn string_field(key: &str, value: &Value) -> Result<String, StoreError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| invalid(key, "expected a string"))
}

fn string_list_field(key: &str, value: &Value) -> Result<Vec<String>, StoreError> {
    let items = value
        .as_array()
        .ok_or_else(|| invalid(key, "expected an array of strings"))?;
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| invalid(key, "expected an array of strings"))
        })
        .collect()
}

fn invalid(field: &str, reason: &str) -> StoreError {
    StoreError::InvalidField {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

pub struct CaseUpdateBuilder(CaseUpdate);

impl CaseUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(CaseUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn date_reported(mut self, date_reported: impl Into<String>) -> Self {
        self.0.date_reported = Some(date_reported.into());
        self
    }

    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.0.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn evidence<I, S>(mut self, evidence: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.evidence = Some(evidence.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub const fn status(mut self, status: CaseStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub fn build(self) -> CaseUpdate {
        self.0
    }
}

impl Default for CaseUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
