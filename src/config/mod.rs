//! Configuration
//!
//! Layered configuration for a pocdedup run: built-in defaults, the global config file,
//! a `.pocdedup.toml` in the scan root, then `POCDEDUP__*` environment variables.

mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;

use crate::error::DedupError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Name of the per-scan-root config file
pub const ROOT_CONFIG_FILE: &str = ".pocdedup.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DedupConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

/// Report configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Report format: text or json
    #[serde(default = "default_report_format")]
    pub format: String,
}

fn default_report_format() -> String {
    "text".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: default_report_format(),
        }
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn parse(value: &str) -> Result<Self, DedupError> {
        match value.trim().to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(DedupError::ConfigError(format!(
                "Invalid report format: {} (must be 'text' or 'json')",
                other
            ))),
        }
    }
}
