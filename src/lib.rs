//! No File Left Behind: find scratch files that are missing from an archive.
//!
//! Scratch and archive trees are matched by size first and by SHA-1 of the full
//! contents second, so a scratch file counts as archived when an identical file
//! exists anywhere in the archive, under any name.

pub mod config;
pub mod error;
pub mod ignore;
pub mod logging;
pub mod matcher;
pub mod reconcile;
pub mod report;
pub mod tooling;
pub mod tree;
pub mod types;

pub use error::{ReconcileError, ReconcileResult};
pub use reconcile::{Reconciler, Reconciliation};

/// Serializes tests that read or write process environment variables.
#[cfg(test)]
pub(crate) fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}
