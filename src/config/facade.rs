//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::DedupConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a scan of `scan_root` from files and environment.
    pub fn load(scan_root: &Path) -> Result<DedupConfig, ConfigError> {
        MergeService::load(scan_root)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<DedupConfig, ConfigError> {
        MergeService::load_from_file(path)
    }

    /// Create default configuration.
    pub fn default() -> DedupConfig {
        DedupConfig::default()
    }
}
