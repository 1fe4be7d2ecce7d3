use std::path::PathBuf;

use anyhow::Context;
use vaka_config::VakaConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, then the layered configuration.
pub fn load_config() -> anyhow::Result<VakaConfig> {
    VakaConfig::load_with_dotenv().context("failed to load vaka configuration")
}

/// Snapshot path: `--data` wins over `storage.data_file`.
pub fn data_path(flags: &GlobalFlags, config: &VakaConfig) -> PathBuf {
    flags
        .data
        .clone()
        .unwrap_or_else(|| config.storage.data_path())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::data_path;
    use crate::cli::{GlobalFlags, OutputFormat};

    fn flags(data: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Table,
            quiet: false,
            verbose: false,
            data: data.map(PathBuf::from),
        }
    }

    #[test]
    fn flag_overrides_configured_data_file() {
        let config = vaka_config::VakaConfig::default();
        assert_eq!(data_path(&flags(None), &config), PathBuf::from("cases.json"));
        assert_eq!(
            data_path(&flags(Some("/srv/vaka/cases.json")), &config),
            PathBuf::from("/srv/vaka/cases.json")
        );
    }
}
