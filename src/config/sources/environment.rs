//! Environment variable source: NFLB__ prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// `NFLB__IGNORE__SUFFIXES` takes a comma-separated list.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("NFLB")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("ignore.suffixes"),
    );
    Ok(builder)
}
