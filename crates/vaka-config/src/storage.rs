//! Snapshot storage configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_data_file() -> String {
    "cases.json".to_string()
}

/// Where the case snapshot lives.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Snapshot path, relative to the working directory unless absolute.
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

impl StorageConfig {
    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.data_file)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.data_file.trim().is_empty() {
            return Err(ConfigError::invalid("storage.data_file", "must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_cases_json() {
        let config = StorageConfig::default();
        assert_eq!(config.data_path(), PathBuf::from("cases.json"));
    }

    #[test]
    fn blank_data_file_is_invalid() {
        let config = StorageConfig {
            data_file: "  ".into(),
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "storage.data_file"
        ));
    }
}
