//! Ignore filter for OS metadata and cloud-shortcut sidecar files.
//!
//! Applied to the scratch tree only. Noise files on the scratch side would
//! otherwise always be reported missing; archive noise never produces a false
//! "missing" report, so the archive is left unfiltered.

use crate::tree::LazyFile;
use std::path::Path;

/// Suffixes excluded when no configuration overrides them.
pub const DEFAULT_IGNORED_SUFFIXES: &[&str] = &[".DS_Store", ".gdoc", ".gsheet", ".gslides"];

/// Read-only set of path suffixes to drop before matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreFilter {
    suffixes: Vec<String>,
}

impl Default for IgnoreFilter {
    fn default() -> Self {
        Self::new(DEFAULT_IGNORED_SUFFIXES.iter().map(|s| s.to_string()))
    }
}

impl IgnoreFilter {
    pub fn new(suffixes: impl IntoIterator<Item = String>) -> Self {
        IgnoreFilter {
            suffixes: suffixes.into_iter().filter(|s| !s.is_empty()).collect(),
        }
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// True when the path string ends with any configured suffix. No I/O.
    pub fn is_ignored(&self, path: &Path) -> bool {
        let path = path.to_string_lossy();
        self.suffixes.iter().any(|suffix| path.ends_with(suffix.as_str()))
    }

    /// Split `files` into (kept, ignored count).
    pub fn apply(&self, files: Vec<LazyFile>) -> (Vec<LazyFile>, usize) {
        let before = files.len();
        let kept: Vec<LazyFile> = files.into_iter().filter(|f| !f.is_ignored(self)).collect();
        let ignored = before - kept.len();
        (kept, ignored)
    }
}
