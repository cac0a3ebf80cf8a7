//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("catalog.root", ".agent")?
        .set_default("catalog.extensions", vec!["md", "mdc"])?
        .set_default("validation.profile", "standard")?
        .set_default("validation.max_display_name_len", 25_i64)
}
