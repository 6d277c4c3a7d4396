//! Run configuration: ignore suffixes, matching options, and logging.
//!
//! Layered with the `config` crate: built-in defaults, then an optional config
//! file, then `NFLB__SECTION__KEY` environment variables.

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

use crate::ignore::{IgnoreFilter, DEFAULT_IGNORED_SUFFIXES};
use crate::logging::LoggingConfig;
use crate::matcher::MatchOptions;
use serde::{Deserialize, Serialize};

fn default_suffixes() -> Vec<String> {
    DEFAULT_IGNORED_SUFFIXES.iter().map(|s| s.to_string()).collect()
}

/// Scratch-side ignore configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IgnoreConfig {
    /// Path suffixes dropped from the scratch tree before matching
    #[serde(default = "default_suffixes")]
    pub suffixes: Vec<String>,
}

impl Default for IgnoreConfig {
    fn default() -> Self {
        Self {
            suffixes: default_suffixes(),
        }
    }
}

impl IgnoreConfig {
    pub fn filter(&self) -> IgnoreFilter {
        IgnoreFilter::new(self.suffixes.iter().cloned())
    }
}

/// Matcher configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Compute sizes and hashes of a stage on the rayon pool
    #[serde(default)]
    pub parallel: bool,

    /// Follow symlinked directories while walking
    #[serde(default)]
    pub follow_symlinks: bool,
}

impl MatchingConfig {
    pub fn options(&self) -> MatchOptions {
        MatchOptions {
            parallel: self.parallel,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReconcileConfig {
    #[serde(default)]
    pub ignore: IgnoreConfig,

    #[serde(default)]
    pub matching: MatchingConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}
