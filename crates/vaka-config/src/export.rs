//! Document export settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Document kinds the exporter accepts for `default_kind`.
pub const DOCUMENT_KINDS: [&str; 3] = ["decision", "indictment", "document"];

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_kind() -> String {
    "document".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Directory that receives exported HTML files.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Printer name passed to `lp -d`. Empty means the system default.
    #[serde(default)]
    pub printer: String,

    /// Document kind used when `--kind` is not given.
    #[serde(default = "default_kind")]
    pub default_kind: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            printer: String::new(),
            default_kind: default_kind(),
        }
    }
}

impl ExportConfig {
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.output_dir)
    }

    /// Returns `true` if a named printer is configured.
    #[must_use]
    pub const fn has_printer(&self) -> bool {
        !self.printer.is_empty()
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let kind = self.default_kind.to_lowercase();
        if !DOCUMENT_KINDS.contains(&kind.as_str()) {
            return Err(ConfigError::invalid(
                "export.default_kind",
                format!("'{}' is not one of {}", self.default_kind, DOCUMENT_KINDS.join(", ")),
            ));
        }
        if self.output_dir.trim().is_empty() {
            return Err(ConfigError::invalid("export.output_dir", "must not be empty"));
        }
        Ok(())
    }
}
