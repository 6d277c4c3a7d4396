//! Lazily-evaluated file descriptor

use crate::error::{ReconcileError, ReconcileResult};
use crate::ignore::IgnoreFilter;
use crate::tree::hasher;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

/// One file found during enumeration.
///
/// `size` and `content_hash` are computed on first access and cached for the
/// lifetime of the descriptor. A failed computation stores nothing, so the
/// cache only ever holds a successfully computed value and is written once.
#[derive(Debug)]
pub struct LazyFile {
    path: PathBuf,
    size: OnceCell<u64>,
    content_hash: OnceCell<String>,
}

impl LazyFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        LazyFile {
            path: path.into(),
            size: OnceCell::new(),
            content_hash: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Byte length of the underlying file.
    pub fn size(&self) -> ReconcileResult<u64> {
        self.size
            .get_or_try_init(|| {
                std::fs::metadata(&self.path)
                    .map(|m| m.len())
                    .map_err(|source| ReconcileError::Io {
                        path: self.path.clone(),
                        source,
                    })
            })
            .copied()
    }

    /// Lower-case hex SHA-1 of the full file contents.
    pub fn content_hash(&self) -> ReconcileResult<&str> {
        self.content_hash
            .get_or_try_init(|| {
                tracing::trace!(path = %self.path.display(), "hashing");
                hasher::hash_file(&self.path)
            })
            .map(String::as_str)
    }

    pub fn is_hashed(&self) -> bool {
        self.content_hash.get().is_some()
    }

    pub fn is_ignored(&self, filter: &IgnoreFilter) -> bool {
        filter.is_ignored(&self.path)
    }
}
