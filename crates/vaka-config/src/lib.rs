//! # vaka-config
//!
//! Layered configuration loading for vaka using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VAKA_*` prefix, `__` as separator)
//! 2. Project-level `.vaka/config.toml`
//! 3. User-level `~/.config/vaka/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `VAKA_STORAGE__DATA_FILE` -> `storage.data_file`,
//! `VAKA_CASES__STRICT_TRANSITIONS` -> `cases.strict_transitions`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use vaka_config::VakaConfig;
//!
//! let config = VakaConfig::load_with_dotenv().expect("config");
//! println!("cases live in {}", config.storage.data_path().display());
//! ```

mod cases;
mod error;
mod export;
mod general;
mod storage;

pub use cases::CasesConfig;
pub use error::ConfigError;
pub use export::{DOCUMENT_KINDS, ExportConfig};
pub use general::{GeneralConfig, OUTPUT_FORMATS};
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory (relative to the working directory) holding project config.
pub const PROJECT_DIR: &str = ".vaka";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VakaConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub cases: CasesConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl VakaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` when a source cannot be parsed and
    /// `ConfigError::InvalidValue` when a value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = Self::project_config_path();
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("VAKA_").split("__"))
    }

    /// Path to the project-local config file.
    #[must_use]
    pub fn project_config_path() -> PathBuf {
        PathBuf::from(PROJECT_DIR).join("config.toml")
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vaka").join("config.toml"))
    }

    /// Reject values that would make the store or exporter unusable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.storage.validate()?;
        self.export.validate()?;
        self.general.validate()
    }
}
