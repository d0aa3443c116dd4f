//! Credential storage and country list commands.

use crate::directory::{CountryDirectory, EmbeddedDirectory};
use crate::settings::{FileSettings, SettingsStore};

/// Persist the provider API token.
pub fn cmd_configure(token: &str) -> anyhow::Result<()> {
    if token.trim().is_empty() {
        eprintln!("Error: the API token must not be empty.");
        std::process::exit(1);
    }

    let settings = FileSettings::open()?;
    settings.set_api_token(token.to_string())?;

    println!("✓ API token saved");
    println!("Try it with: tax-minder test --country-id 45 --city \"Los Angeles\" --zip 90001");
    Ok(())
}

/// Print the selectable country list for the test-address form.
pub fn cmd_countries() -> anyhow::Result<()> {
    println!("{:>4}  {:<4} {}", "ID", "ISO", "Country");
    for country in EmbeddedDirectory.all() {
        println!(
            "{:>4}  {:<4} {}",
            country.id, country.iso_code, country.display_name
        );
    }
    println!();
    println!("Pass an ID to `tax-minder test --country-id <ID>` (0 = no country).");
    Ok(())
}
