//! Reconciliation pipeline: load both trees, drop scratch noise, match, report.

use crate::config::ReconcileConfig;
use crate::error::{ReconcileResult, TreeRole};
use crate::ignore::IgnoreFilter;
use crate::matcher::{self, MatchOptions, DEFAULT_KEYS};
use crate::report::{self, ReportPaths, Summary};
use crate::tree::{load_tree, LazyFile, WalkerConfig};
use std::path::{Path, PathBuf};
use tracing::info;

/// Result of one run. Paths are absolute; lists are in no particular order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// Scratch files with a size and content match somewhere in the archive
    pub present: Vec<PathBuf>,
    /// Scratch files with no match in the archive
    pub missing: Vec<PathBuf>,
    pub scratch_count: usize,
    pub archive_count: usize,
    pub ignored_count: usize,
}

impl Reconciliation {
    pub fn summary(&self) -> Summary {
        Summary {
            missing: self.missing.len(),
            matched: self.present.len(),
            scratch: self.scratch_count,
            archive: self.archive_count,
            ignored: self.ignored_count,
        }
    }

    /// Write `duplicates.txt` and `missing.txt` into `dir`.
    pub fn write_reports(&self, dir: &Path) -> ReconcileResult<ReportPaths> {
        report::write_reports(dir, &self.present, &self.missing)
    }
}

/// Runs the pipeline with a fixed ignore filter, walker, and matcher options.
#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    ignore: IgnoreFilter,
    walker: WalkerConfig,
    options: MatchOptions,
}

impl Reconciler {
    pub fn new(ignore: IgnoreFilter, walker: WalkerConfig, options: MatchOptions) -> Self {
        Self {
            ignore,
            walker,
            options,
        }
    }

    pub fn from_config(config: &ReconcileConfig) -> Self {
        Self::new(
            config.ignore.filter(),
            WalkerConfig {
                follow_symlinks: config.matching.follow_symlinks,
            },
            config.matching.options(),
        )
    }

    /// Reconcile `scratch_root` against `archive_root`.
    ///
    /// Both roots are enumerated before matching starts, so a bad root fails
    /// the run before any file is hashed.
    pub fn run(&self, scratch_root: &Path, archive_root: &Path) -> ReconcileResult<Reconciliation> {
        let scratch = load_tree(scratch_root, TreeRole::Scratch, &self.walker)?;
        let archive = load_tree(archive_root, TreeRole::Archive, &self.walker)?;

        let (scratch, ignored_count) = self.ignore.apply(scratch);
        if ignored_count > 0 {
            info!(ignored = ignored_count, "dropped ignored scratch files");
        }

        let result = self.reconcile(&scratch, &archive)?;
        let reconciliation = Reconciliation {
            ignored_count,
            ..result
        };
        info!("{}", reconciliation.summary().to_text());
        Ok(reconciliation)
    }

    /// Match already-loaded descriptors with the size-then-hash key chain.
    pub fn reconcile(
        &self,
        scratch: &[LazyFile],
        archive: &[LazyFile],
    ) -> ReconcileResult<Reconciliation> {
        let outcome = matcher::match_by(scratch, archive, &DEFAULT_KEYS, self.options)?;
        let to_paths = |files: Vec<&LazyFile>| -> Vec<PathBuf> {
            files.into_iter().map(|f| f.path().to_path_buf()).collect()
        };
        Ok(Reconciliation {
            present: to_paths(outcome.matched),
            missing: to_paths(outcome.unmatched),
            scratch_count: scratch.len(),
            archive_count: archive.len(),
            ignored_count: 0,
        })
    }
}
