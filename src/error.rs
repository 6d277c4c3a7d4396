//! Error types for archive reconciliation

use std::path::PathBuf;
use thiserror::Error;

/// Which side of the reconciliation a root belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeRole {
    Scratch,
    Archive,
}

impl std::fmt::Display for TreeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeRole::Scratch => write!(f, "scratch"),
            TreeRole::Archive => write!(f, "archive"),
        }
    }
}

/// Every failure a reconciliation run can hit.
///
/// None of these are recoverable inside a run: the tool is a single-shot batch
/// job, so errors propagate to the caller and the user re-runs.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// A scratch or archive root does not exist or cannot be accessed
    #[error("{role} root not found: {path}")]
    RootNotFound { role: TreeRole, path: PathBuf },

    /// Directory enumeration failed below a root
    #[error("Failed to walk {root}: {source}")]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Reading a file while computing one of its match keys failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a report file failed
    #[error("Failed to write report {path}: {source}")]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Summary serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration or logging setup
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for ReconcileError {
    fn from(err: config::ConfigError) -> Self {
        ReconcileError::Config(err.to_string())
    }
}

pub type ReconcileResult<T> = Result<T, ReconcileError>;
