//! Environment variable source: AGENTDEF__ prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// `AGENTDEF__VALIDATION__PROFILE=strict` sets `validation.profile`; list
/// values such as `catalog.extensions` are comma separated.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("AGENTDEF")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("catalog.extensions")
            .try_parsing(true),
    );
    Ok(builder)
}
