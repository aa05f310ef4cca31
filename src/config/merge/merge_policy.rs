//! Built-in defaults every merge starts from.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Builder seeded with the defaults that the file and environment sources override.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("report.format", "text")?
        .set_default("logging.level", "warn")?
        .set_default("logging.output", "stderr")
}
