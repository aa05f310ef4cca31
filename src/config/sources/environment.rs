//! Environment variable source: POCDEDUP__ prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// Uses POCDEDUP prefix and __ as separator for nested keys (POCDEDUP__REPORT__FORMAT).
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("POCDEDUP")
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
