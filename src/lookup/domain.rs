//! Internal domain models for the rate test lookup.
//!
//! These types are OUR types - they don't change when the provider API
//! changes. All provider responses get converted into these types via the
//! adapter.

use rust_decimal::Decimal;

/// Address fragment submitted for a test lookup.
///
/// Every field is optional. A country code is what makes a lookup
/// meaningful, but an empty fragment is passed through as-is and the
/// provider decides success or failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestAddress {
    /// Two-letter ISO 3166-1 country code
    pub country_code: Option<String>,
    /// City name
    pub city: Option<String>,
    /// Region/state. Part of the address contract, but the test-lookup
    /// workflow never populates it (see `service.rs`).
    pub region: Option<String>,
    /// Postal/ZIP code
    pub postal_code: Option<String>,
}

/// Rate breakdown returned by the provider.
///
/// The variant reflects the provider's own jurisdiction classification -
/// the shape of its response, not anything this crate decides. Keeping the
/// two shapes as a sum type means a VAT report can never be built with
/// jurisdictional accessors or vice versa.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateBreakdown {
    /// U.S./Canada jurisdictional breakdown (state/county/city levels)
    UsCanada(JurisdictionRates),
    /// VAT-style breakdown for other countries
    International(VatRates),
}

/// Tax rates at each governmental level for a U.S./Canada address.
///
/// All rates are decimal fractions (0.0825 = 8.25%).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JurisdictionRates {
    pub state: Option<String>,
    pub county: Option<String>,
    pub city: Option<String>,
    pub state_rate: Decimal,
    pub county_rate: Decimal,
    pub city_rate: Decimal,
    pub combined_district_rate: Decimal,
    /// Sum across all levels; the report's emphasized total
    pub combined_rate: Decimal,
}

/// VAT-style rates for a non-U.S./Canada country.
///
/// Any rate may be zero when the country's tax schedule has no such band.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VatRates {
    pub country_name: Option<String>,
    pub reduced_rate: Decimal,
    pub super_reduced_rate: Decimal,
    pub parking_rate: Decimal,
    /// The report's emphasized line
    pub standard_rate: Decimal,
}

/// Errors from the rate lookup gateway.
///
/// `Display` output is what the diagnostic report shows, so provider-supplied
/// text passes through verbatim with no prefix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The provider rejected the request (bad token, unknown address, ...).
    /// The payload is the provider's own diagnostic text.
    #[error("{0}")]
    Provider(String),

    /// Transport-level failure before any provider diagnostic was available
    #[error("{0}")]
    Network(String),

    /// The provider answered but the body couldn't be interpreted
    #[error("Failed to parse provider response: {0}")]
    Parse(String),
}
