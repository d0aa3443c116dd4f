//! Tax Minder - admin tooling for an external sales-tax-rate provider.
//!
//! Stores the credentials for a TaxJar-backed tax integration and issues
//! ad-hoc test lookups against a candidate address, printing the provider's
//! rate breakdown without touching any live order processing.

pub mod cli;
pub mod config;
pub mod directory;
pub mod lookup;
pub mod settings;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("tax_minder=info".parse().unwrap()))
        .init();

    cli::run_command(&args)
}
