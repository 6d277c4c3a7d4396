//! MergeService: orchestrates sources and deserializes to ReconcileConfig.

use crate::config::sources::{environment, file};
use crate::config::ReconcileConfig;
use config::{Config, ConfigError};
use std::path::Path;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Precedence: serde defaults (lowest) -> config file -> environment (highest).
    pub fn load(config_file: Option<&Path>) -> Result<ReconcileConfig, ConfigError> {
        let builder = Config::builder();
        let builder = match config_file {
            Some(path) => file::add_to_builder(builder, path)?,
            None => builder,
        };
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }
}
