//! Command-line interface for tax-minder.
//!
//! This module provides the admin-facing commands for storing provider
//! credentials and running test rate lookups.

mod commands;

pub use commands::{Cli, Commands, run_command};
