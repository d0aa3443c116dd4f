//! Test utilities and fixtures for tax-minder tests.
//!
//! Provides the rate fixtures shared across report, service and mock tests,
//! matching the worked examples in the provider's documentation.

use rust_decimal::Decimal;

use crate::lookup::domain::{JurisdictionRates, VatRates};

/// Parse a decimal literal, panicking on typos in test data.
pub fn dec(value: &str) -> Decimal {
    value.parse().expect("valid decimal literal")
}

/// Domestic fixture: Los Angeles, CA with a 9.25% combined rate.
pub fn los_angeles_rates() -> JurisdictionRates {
    JurisdictionRates {
        state: Some("CA".to_string()),
        county: Some("Los Angeles".to_string()),
        city: Some("Los Angeles".to_string()),
        state_rate: dec("0.06"),
        county_rate: dec("0.01"),
        city_rate: dec("0"),
        combined_district_rate: dec("0.0225"),
        combined_rate: dec("0.0925"),
    }
}

/// International fixture: Germany with 19% standard / 7% reduced VAT.
pub fn germany_rates() -> VatRates {
    VatRates {
        country_name: Some("Germany".to_string()),
        reduced_rate: dec("0.07"),
        super_reduced_rate: dec("0"),
        parking_rate: dec("0"),
        standard_rate: dec("0.19"),
    }
}
