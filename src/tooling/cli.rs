//! CLI Tooling
//!
//! Command-line interface for reconciling a scratch tree against an archive.

use crate::config::{ConfigLoader, ReconcileConfig};
use crate::error::{ReconcileError, ReconcileResult};
use crate::reconcile::Reconciler;
use crate::report::ReportPaths;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// Discover files that are missing from an archive.
#[derive(Parser, Debug, Clone)]
#[command(name = "no-file-left-behind")]
#[command(about = "Discover files that are missing from an archive")]
pub struct Cli {
    /// Path to the archive being validated. You expect (or want) this
    /// directory to contain a superset of all the files in --scratch.
    #[arg(long)]
    pub archive: PathBuf,

    /// Path to the scratch data being checked against the archive
    #[arg(long)]
    pub scratch: PathBuf,

    /// Directory to write duplicates.txt and missing.txt to
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Summary format (text or json)
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Compute file sizes and hashes in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (shorthand for --log-level info)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// What one invocation produced.
///
/// The summary is rendered before any report is written, so it is available
/// even when writing the reports fails.
#[derive(Debug)]
pub struct RunOutput {
    /// Text to print on stdout
    pub summary: String,
    /// Outcome of writing the reports; `None` without `--output`
    pub reports: Option<ReconcileResult<ReportPaths>>,
}

impl RunOutput {
    /// The summary, or the report error if writing the reports failed.
    pub fn into_result(self) -> ReconcileResult<String> {
        match self.reports {
            Some(Err(e)) => Err(e),
            _ => Ok(self.summary),
        }
    }
}

/// CLI execution context: the effective configuration for one invocation.
pub struct CliContext {
    config: ReconcileConfig,
}

impl CliContext {
    /// Load configuration and fold command-line overrides into it.
    pub fn new(cli: &Cli) -> Result<Self, ReconcileError> {
        let mut config = ConfigLoader::load_optional(cli.config.as_deref())?;
        apply_overrides(&mut config, cli);
        Ok(Self { config })
    }

    pub fn from_config(config: ReconcileConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReconcileConfig {
        &self.config
    }

    /// Run the reconciliation, render the summary, then write the reports.
    ///
    /// Errors before the summary exists (bad roots, unreadable files) are
    /// returned directly; a report failure is carried in `RunOutput::reports`.
    pub fn run(&self, cli: &Cli) -> ReconcileResult<RunOutput> {
        let started = Instant::now();
        let reconciler = Reconciler::from_config(&self.config);
        let result = reconciler.run(&cli.scratch, &cli.archive)?;

        let summary = result.summary();
        info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            missing = summary.missing,
            matched = summary.matched,
            "reconciliation finished"
        );
        let summary = match cli.format.as_str() {
            "json" => summary.to_json()?,
            _ => summary.to_text(),
        };

        let reports = cli.output.as_deref().map(|dir| result.write_reports(dir));
        Ok(RunOutput { summary, reports })
    }

    /// Run the reconciliation and return the text to print on stdout.
    pub fn execute(&self, cli: &Cli) -> ReconcileResult<String> {
        self.run(cli)?.into_result()
    }
}

fn apply_overrides(config: &mut ReconcileConfig, cli: &Cli) {
    if cli.parallel {
        config.matching.parallel = true;
    }
    if cli.verbose {
        config.logging.level = "info".to_string();
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        config.logging.format = format.clone();
    }
    if let Some(output) = &cli.log_output {
        config.logging.output = output.clone();
    }
    // --log-file stays out of the config so it can outrank NFLB_LOG_FILE.
}
