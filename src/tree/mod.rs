//! Filesystem view: lazily-evaluated file descriptors and the tree loader
//! that enumerates them under a root.

pub mod hasher;
pub mod node;
pub mod walker;

pub use node::LazyFile;
pub use walker::{load_tree, WalkerConfig};
