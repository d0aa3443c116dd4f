//! Ad-hoc test rate lookup command.

use tokio::runtime::Runtime;

use crate::directory::EmbeddedDirectory;
use crate::lookup::{TaxJarClient, TestLookupRequest, TestLookupService};
use crate::settings::{FileSettings, SettingsStore};

/// Run one test lookup and print the diagnostic report.
pub fn cmd_test(
    rt: &Runtime,
    country_id: &str,
    city: &str,
    zip: &str,
    token: Option<&str>,
    html: bool,
) -> anyhow::Result<()> {
    let api_token = match token {
        Some(t) => t.to_string(),
        None => FileSettings::open()?.api_token().unwrap_or_default(),
    };
    if api_token.is_empty() {
        // Forwarded anyway - the provider's own auth error ends up in the
        // report, which is itself a useful configuration check
        eprintln!("Warning: no API token configured; the provider will reject the request.");
        eprintln!("Store one with: tax-minder configure --token YOUR_TOKEN");
    }

    let service = TestLookupService::new(TaxJarClient::new(), EmbeddedDirectory);
    let request = TestLookupRequest {
        api_token,
        country_id: country_id.to_string(),
        city: city.to_string(),
        postal_code: zip.to_string(),
    };

    let response = rt.block_on(service.run(request));

    println!(
        "Test address: country-id={} city={:?} zip={:?}",
        response.submitted.country_id, response.submitted.city, response.submitted.postal_code
    );
    println!();

    match response.report {
        Some(report) if html => println!("{}", report.to_html()),
        Some(report) => println!("{}", report.to_text()),
        None => {
            eprintln!("✗ Invalid input: --country-id must be a numeric identifier (0 = none).");
            eprintln!("Run `tax-minder countries` for the list.");
            std::process::exit(2);
        }
    }
    Ok(())
}
