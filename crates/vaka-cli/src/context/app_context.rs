use std::path::PathBuf;

use vaka_config::VakaConfig;
use vaka_core::clock::SystemClock;
use vaka_store::{CaseManager, ManagerOptions, SnapshotFile};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub manager: CaseManager,
    pub config: VakaConfig,
    pub data_path: PathBuf,
}

impl AppContext {
    /// Open the case snapshot at `data_path` with the configured options.
    ///
    /// A snapshot that cannot be read is logged by the store and yields an
    /// empty manager; it is overwritten by the next mutation.
    pub fn init(data_path: PathBuf, config: VakaConfig) -> Self {
        let options = ManagerOptions {
            strict_transitions: config.cases.strict_transitions,
        };
        let manager =
            CaseManager::open_with(SnapshotFile::new(&data_path), SystemClock, options);
        Self {
            manager,
            config,
            data_path,
        }
    }
}
