//! Integration tests for archive reconciliation

mod cli_contracts;
mod support;
