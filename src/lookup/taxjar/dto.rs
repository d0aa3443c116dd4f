//! TaxJar API Data Transfer Objects
//!
//! These types match EXACTLY what the TaxJar rates endpoint returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the taxjar module - convert to domain types.
//!
//! API Reference: https://developers.taxjar.com/api/reference/#rates
//!
//! The endpoint answers with one of two shapes depending on the jurisdiction
//! it classified the address into:
//! - U.S./Canada: per-level rates encoded as decimal *strings*, anchored on
//!   the `state` and `combined_rate` fields
//! - everywhere else: VAT bands encoded as JSON *numbers*, anchored on the
//!   `name` field
//!
//! The untagged enum below leans on exactly those anchors, so deserialization
//! itself picks the variant - the provider's classification is trusted as-is.

use serde::{Deserialize, Serialize};

/// Top-level rates response; the payload lives under a `rate` key.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateEnvelope {
    pub rate: RateDto,
}

/// The two response shapes, selected by the shape of the payload itself.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RateDto {
    UsCanada(UsCanadaRate),
    International(InternationalRate),
}

/// U.S./Canada jurisdictional breakdown.
///
/// Canadian responses carry only `state` and `combined_rate`; the per-level
/// rates are absent, hence the options. Rates are decimal strings on the
/// wire ("0.0625").
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UsCanadaRate {
    pub zip: Option<String>,
    pub country: Option<String>,
    pub state: String,
    pub county: Option<String>,
    pub city: Option<String>,
    pub state_rate: Option<String>,
    pub county_rate: Option<String>,
    pub city_rate: Option<String>,
    pub combined_district_rate: Option<String>,
    pub combined_rate: String,
    pub freight_taxable: Option<bool>,
}

/// VAT-style breakdown for other countries. Rates are JSON numbers on the
/// wire and bands a country doesn't have may be absent or null.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InternationalRate {
    pub country: Option<String>,
    pub name: String,
    pub standard_rate: Option<f64>,
    pub reduced_rate: Option<f64>,
    pub super_reduced_rate: Option<f64>,
    pub parking_rate: Option<f64>,
    pub freight_taxable: Option<bool>,
}

/// Error response body from TaxJar
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    /// HTTP reason phrase ("Unauthorized", "Not Found", ...)
    pub error: Option<String>,
    /// Human-readable diagnostic
    pub detail: Option<String>,
    pub status: Option<u16>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    /// A U.S. response as documented by TaxJar
    #[test]
    fn test_parse_us_rate() {
        let json = r#"{
            "rate": {
                "zip": "90404",
                "state": "CA",
                "state_rate": "0.0625",
                "county": "LOS ANGELES",
                "county_rate": "0.01",
                "city": "SANTA MONICA",
                "city_rate": "0.0",
                "combined_district_rate": "0.025",
                "combined_rate": "0.0975",
                "freight_taxable": false
            }
        }"#;

        let envelope: RateEnvelope = serde_json::from_str(json).expect("Should parse US rate");

        let RateDto::UsCanada(rate) = envelope.rate else {
            panic!("US payload must decode as the UsCanada variant");
        };
        assert_eq!(rate.state, "CA");
        assert_eq!(rate.county.as_deref(), Some("LOS ANGELES"));
        assert_eq!(rate.state_rate.as_deref(), Some("0.0625"));
        assert_eq!(rate.combined_rate, "0.0975");
        assert_eq!(rate.freight_taxable, Some(false));
    }

    /// Canadian responses only include the combined rate
    #[test]
    fn test_parse_canada_rate() {
        let json = r#"{
            "rate": {
                "zip": "V5K0A1",
                "city": "Vancouver",
                "state": "BC",
                "country": "CA",
                "combined_rate": "0.12",
                "freight_taxable": true
            }
        }"#;

        let envelope: RateEnvelope = serde_json::from_str(json).expect("Should parse CA rate");

        let RateDto::UsCanada(rate) = envelope.rate else {
            panic!("Canadian payload must decode as the UsCanada variant");
        };
        assert_eq!(rate.state, "BC");
        assert_eq!(rate.combined_rate, "0.12");
        assert!(rate.state_rate.is_none());
        assert!(rate.county.is_none());
    }

    /// An EU response as documented by TaxJar (unknown fields are ignored)
    #[test]
    fn test_parse_international_rate() {
        let json = r#"{
            "rate": {
                "country": "FI",
                "name": "Finland",
                "standard_rate": 0.24,
                "reduced_rate": 0.0,
                "super_reduced_rate": 0.0,
                "parking_rate": 0.0,
                "distance_sale_threshold": 0.0,
                "freight_taxable": true
            }
        }"#;

        let envelope: RateEnvelope = serde_json::from_str(json).expect("Should parse EU rate");

        let RateDto::International(rate) = envelope.rate else {
            panic!("EU payload must decode as the International variant");
        };
        assert_eq!(rate.name, "Finland");
        assert_eq!(rate.standard_rate, Some(0.24));
        assert_eq!(rate.reduced_rate, Some(0.0));
    }

    /// VAT bands a country doesn't have may be missing entirely
    #[test]
    fn test_parse_international_rate_sparse() {
        let json = r#"{
            "rate": {
                "country": "DE",
                "name": "Germany",
                "standard_rate": 0.19,
                "reduced_rate": 0.07
            }
        }"#;

        let envelope: RateEnvelope = serde_json::from_str(json).expect("Should parse sparse rate");

        let RateDto::International(rate) = envelope.rate else {
            panic!("expected International variant");
        };
        assert_eq!(rate.super_reduced_rate, None);
        assert_eq!(rate.parking_rate, None);
    }

    #[test]
    fn test_parse_error_response() {
        let json = r#"{
            "error": "Unauthorized",
            "detail": "Not authorized for route 'GET /v2/rates'",
            "status": 401
        }"#;

        let error: ApiError = serde_json::from_str(json).expect("Should parse error");
        assert_eq!(error.error.as_deref(), Some("Unauthorized"));
        assert_eq!(
            error.detail.as_deref(),
            Some("Not authorized for route 'GET /v2/rates'")
        );
        assert_eq!(error.status, Some(401));
    }

    /// A payload with neither anchor field must not decode silently
    #[test]
    fn test_unrecognized_shape_is_an_error() {
        let json = r#"{"rate": {"combined_rate": "0.1"}}"#;
        assert!(serde_json::from_str::<RateEnvelope>(json).is_err());
    }
}
