//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::ReconcileConfig;
use crate::error::ReconcileError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults overlaid by the environment.
    pub fn load() -> Result<ReconcileConfig, ReconcileError> {
        Ok(MergeService::load(None)?)
    }

    /// Load configuration from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<ReconcileConfig, ReconcileError> {
        if !path.is_file() {
            return Err(ReconcileError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        Ok(MergeService::load(Some(path))?)
    }

    /// Load from `path` when given, otherwise from defaults and environment.
    pub fn load_optional(path: Option<&Path>) -> Result<ReconcileConfig, ReconcileError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::load(),
        }
    }
}
