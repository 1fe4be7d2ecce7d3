use thiserror::Error;

/// Why a vaka configuration could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or did not match the expected shape.
    #[error("Could not load vaka configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A value parsed but is not acceptable.
    #[error("Bad value for '{field}' in vaka configuration: {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
