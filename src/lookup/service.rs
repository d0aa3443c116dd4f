//! Test lookup orchestration.
//!
//! Drives one end-to-end "test this address" request: validate the submitted
//! form, resolve the country selection, call the rate gateway and format the
//! outcome into a diagnostic report. Per-request only - nothing is persisted,
//! retried, or shared between invocations, and every failure mode comes back
//! in the response rather than as an error.

use crate::directory::{CountryDirectory, NO_COUNTRY};

use super::domain::TestAddress;
use super::report::{self, RateReport};
use super::traits::RateApi;

/// Submitted form data for one test lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestLookupRequest {
    /// Candidate API token - tested as submitted, which may differ from the
    /// stored one
    pub api_token: String,
    /// Country selection identifier; "0" means no country chosen
    pub country_id: String,
    pub city: String,
    pub postal_code: String,
}

/// What the caller renders back to the admin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestLookupResponse {
    /// Formatted diagnostic; absent when validation rejected the form and
    /// the input should simply be redisplayed
    pub report: Option<RateReport>,
    /// Submitted address fields, echoed for redisplay next to the result
    pub submitted: SubmittedAddress,
}

/// The address fields exactly as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmittedAddress {
    pub country_id: String,
    pub city: String,
    pub postal_code: String,
}

/// Structural validation failure for the submitted form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("country selection must be a numeric identifier, got {0:?}")]
    MalformedCountrySelection(String),
}

/// Orchestrates test lookups against a rate gateway and country directory.
pub struct TestLookupService<R, D> {
    rates: R,
    countries: D,
}

impl<R: RateApi, D: CountryDirectory> TestLookupService<R, D> {
    pub fn new(rates: R, countries: D) -> Self {
        Self { rates, countries }
    }

    /// Run one test lookup end to end.
    ///
    /// Validation failures produce no report (the form is redisplayed
    /// unchanged, no lookup is attempted). Provider failures become the
    /// report's single error line, verbatim.
    pub async fn run(&self, request: TestLookupRequest) -> TestLookupResponse {
        let submitted = SubmittedAddress {
            country_id: request.country_id.clone(),
            city: request.city.clone(),
            postal_code: request.postal_code.clone(),
        };

        if let Err(error) = validate(&request) {
            tracing::debug!("rejecting test lookup form: {error}");
            return TestLookupResponse {
                report: None,
                submitted,
            };
        }

        let address = TestAddress {
            country_code: self.resolve_country_code(&request.country_id),
            city: non_empty(&request.city),
            // The address contract carries a region, but this workflow has
            // never forwarded one. Kept as-is; see the quirk test below.
            region: None,
            postal_code: non_empty(&request.postal_code),
        };

        let outcome = self.rates.lookup_rate(&request.api_token, &address).await;
        TestLookupResponse {
            report: Some(report::render(&outcome)),
            submitted,
        }
    }

    /// Translate the form's country selection into an ISO code.
    ///
    /// "0" and identifiers the directory doesn't know both yield no code.
    /// The lookup still proceeds either way - the provider is the one that
    /// decides what an address without a country means.
    fn resolve_country_code(&self, country_id: &str) -> Option<String> {
        country_id
            .parse::<u32>()
            .ok()
            .filter(|&id| id != NO_COUNTRY)
            .and_then(|id| self.countries.resolve(id))
            .map(|country| country.iso_code)
    }
}

/// The sole input-validation gate: the form must be structurally sound.
///
/// There is deliberately no postal-code format or city/country consistency
/// checking here - the provider is the authority on address validity.
fn validate(request: &TestLookupRequest) -> Result<(), ValidationError> {
    let id = &request.country_id;
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::MalformedCountrySelection(id.clone()));
    }
    Ok(())
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
