//! Tooling & Integration Layer
//!
//! Command-line entry point for reconciliation runs.

pub mod cli;

pub use cli::{Cli, CliContext, RunOutput};
