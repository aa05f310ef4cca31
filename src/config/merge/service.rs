//! MergeService: orchestrates sources, applies merge policy, deserializes to DedupConfig.

use crate::config::sources::{environment, global_file, root_file};
use crate::config::DedupConfig;
use config::ConfigError;
use config::File;
use std::path::Path;

use super::merge_policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config for a scan root from the standard sources.
    /// Precedence: global file (lowest) -> scan root file -> environment (highest).
    pub fn load(scan_root: &Path) -> Result<DedupConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = root_file::add_to_builder(builder, scan_root)?;
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load config from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<DedupConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = builder.add_source(File::from(path));
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }
}
