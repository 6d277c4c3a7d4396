//! Report Writer
//!
//! Persists the two result lists as sorted, newline-delimited text and renders
//! the one-line run summary.

use crate::error::{ReconcileError, ReconcileResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Scratch files that are present in the archive.
pub const PRESENT_REPORT: &str = "duplicates.txt";

/// Scratch files with no counterpart in the archive.
pub const MISSING_REPORT: &str = "missing.txt";

/// Counts for one reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub missing: usize,
    pub matched: usize,
    pub scratch: usize,
    pub archive: usize,
    pub ignored: usize,
}

impl Summary {
    pub fn to_text(&self) -> String {
        format!(
            "{}/{} scratch files do not appear in the archive ({} files).",
            self.missing, self.scratch, self.archive
        )
    }

    pub fn to_json(&self) -> ReconcileResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Where the reports of a run were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub present: PathBuf,
    pub missing: PathBuf,
}

/// Render `paths` one per line, sorted by path bytes, each line newline-terminated.
///
/// An empty list renders as a single newline.
pub fn render_paths(paths: &[PathBuf]) -> Vec<u8> {
    if paths.is_empty() {
        return b"\n".to_vec();
    }
    let mut sorted: Vec<&Path> = paths.iter().map(PathBuf::as_path).collect();
    sorted.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

    let mut out = Vec::new();
    for path in sorted {
        out.extend_from_slice(path.as_os_str().as_encoded_bytes());
        out.push(b'\n');
    }
    out
}

/// Write the sorted path list to `out_file`, replacing any previous content.
pub fn write_paths(paths: &[PathBuf], out_file: &Path) -> ReconcileResult<()> {
    let report_err = |source| ReconcileError::Report {
        path: out_file.to_path_buf(),
        source,
    };
    let file = fs::File::create(out_file).map_err(report_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&render_paths(paths)).map_err(report_err)?;
    writer.flush().map_err(report_err)?;
    Ok(())
}

/// Write both reports into `dir`, creating the directory if needed.
pub fn write_reports(
    dir: &Path,
    present: &[PathBuf],
    missing: &[PathBuf],
) -> ReconcileResult<ReportPaths> {
    fs::create_dir_all(dir).map_err(|source| ReconcileError::Report {
        path: dir.to_path_buf(),
        source,
    })?;

    let paths = ReportPaths {
        present: dir.join(PRESENT_REPORT),
        missing: dir.join(MISSING_REPORT),
    };
    write_paths(present, &paths.present)?;
    write_paths(missing, &paths.missing)?;
    tracing::info!(
        present = present.len(),
        missing = missing.len(),
        dir = %dir.display(),
        "reports written"
    );
    Ok(paths)
}
