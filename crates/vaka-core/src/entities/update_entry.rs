use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One timestamped note in a case's append-only update log.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UpdateEntry {
    #[serde(deserialize_with = "crate::lenient::timestamp")]
    pub timestamp: DateTime<Utc>,
    pub text: String,
}
