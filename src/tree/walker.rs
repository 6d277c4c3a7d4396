//! Tree loader: enumerate every file under a scratch or archive root.

use crate::error::{ReconcileError, ReconcileResult, TreeRole};
use crate::tree::LazyFile;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Walker configuration. Every root is walked to full depth.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Descend into directory symlinks
    pub follow_symlinks: bool,
}

/// Resolve `root` to an absolute path, failing if it does not exist.
pub fn resolve_root(root: &Path, role: TreeRole) -> ReconcileResult<PathBuf> {
    dunce::canonicalize(root).map_err(|_| ReconcileError::RootNotFound {
        role,
        path: root.to_path_buf(),
    })
}

/// Enumerate all files under `root`.
///
/// A root that is itself a file yields exactly one descriptor. Directories are
/// walked in file-name order; symlinks are listed when they point at a file.
pub fn load_tree(
    root: &Path,
    role: TreeRole,
    config: &WalkerConfig,
) -> ReconcileResult<Vec<LazyFile>> {
    let root = resolve_root(root, role)?;

    if root.is_file() {
        debug!(%role, root = %root.display(), "root is a single file");
        return Ok(vec![LazyFile::new(root)]);
    }

    let walker = WalkDir::new(&root)
        .follow_links(config.follow_symlinks)
        .sort_by_file_name();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| ReconcileError::Walk {
            root: root.clone(),
            source,
        })?;
        let file_type = entry.file_type();
        let is_file = file_type.is_file() || (file_type.is_symlink() && entry.path().is_file());
        if is_file {
            files.push(LazyFile::new(entry.into_path()));
        }
    }

    info!(
        %role,
        "A total of {} files were contained in {}",
        files.len(),
        root.display()
    );
    Ok(files)
}
