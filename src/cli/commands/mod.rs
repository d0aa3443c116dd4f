//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule for maintainability:
//! - `configure`: credential storage and the country selection list
//! - `probe`: ad-hoc test rate lookups against the provider

mod configure;
mod probe;

use clap::{Parser, Subcommand};
use tokio::runtime::Runtime;

pub use configure::{cmd_configure, cmd_countries};
pub use probe::cmd_test;

/// Tax Minder CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Save the provider API token used for rate lookups
    Configure {
        /// TaxJar API token (or set TAXJAR_API_TOKEN env var)
        #[arg(short, long, env = "TAXJAR_API_TOKEN", hide_env_values = true)]
        token: String,
    },
    /// Run a test rate lookup against the provider
    Test {
        /// Country selection identifier (see `countries`; 0 = no country)
        #[arg(long, default_value = "0")]
        country_id: String,
        /// City name
        #[arg(long, default_value = "")]
        city: String,
        /// Postal/ZIP code
        #[arg(long, default_value = "")]
        zip: String,
        /// API token to test (or set TAXJAR_API_TOKEN env var); falls back
        /// to the stored token
        #[arg(short, long, env = "TAXJAR_API_TOKEN", hide_env_values = true)]
        token: Option<String>,
        /// Print the HTML-break rendering instead of plain text
        #[arg(long)]
        html: bool,
    },
    /// List selectable countries and their identifiers
    Countries,
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Configure { token } => cmd_configure(token),
        Commands::Test {
            country_id,
            city,
            zip,
            token,
            html,
        } => {
            let rt = Runtime::new()?;
            cmd_test(&rt, country_id, city, zip, token.as_deref(), *html)
        }
        Commands::Countries => cmd_countries(),
    }
}
