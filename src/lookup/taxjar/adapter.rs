//! Adapter layer: Convert TaxJar DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.
//! This isolates API changes - if TaxJar changes their response format,
//! only this file and dto.rs need to change.

use rust_decimal::Decimal;

use super::dto;
use crate::lookup::domain::{JurisdictionRates, LookupError, RateBreakdown, VatRates};

/// Convert a provider rate payload into the domain breakdown.
///
/// The variant was already selected by the shape of the provider's response;
/// no jurisdiction reclassification happens here. Rate bands the provider
/// omitted come through as zero.
pub fn to_breakdown(rate: dto::RateDto) -> Result<RateBreakdown, LookupError> {
    match rate {
        dto::RateDto::UsCanada(r) => Ok(RateBreakdown::UsCanada(JurisdictionRates {
            state: Some(r.state),
            county: r.county,
            city: r.city,
            state_rate: parse_opt_rate(r.state_rate.as_deref())?,
            county_rate: parse_opt_rate(r.county_rate.as_deref())?,
            city_rate: parse_opt_rate(r.city_rate.as_deref())?,
            combined_district_rate: parse_opt_rate(r.combined_district_rate.as_deref())?,
            combined_rate: parse_rate(&r.combined_rate)?,
        })),
        dto::RateDto::International(r) => Ok(RateBreakdown::International(VatRates {
            country_name: Some(r.name),
            reduced_rate: from_float(r.reduced_rate)?,
            super_reduced_rate: from_float(r.super_reduced_rate)?,
            parking_rate: from_float(r.parking_rate)?,
            standard_rate: from_float(r.standard_rate)?,
        })),
    }
}

/// Extract the human-readable message from a provider error body.
///
/// The `detail` field carries the useful diagnostic; `error` is just the
/// HTTP reason phrase, so it's only a fallback.
pub fn error_message(err: dto::ApiError) -> String {
    err.detail
        .or(err.error)
        .unwrap_or_else(|| "Unknown provider error".to_string())
}

/// Parse a wire decimal string ("0.0625") preserving its scale, so the
/// report echoes exactly what the provider sent.
fn parse_rate(raw: &str) -> Result<Decimal, LookupError> {
    raw.trim()
        .parse()
        .map_err(|e| LookupError::Parse(format!("invalid rate value {raw:?}: {e}")))
}

fn parse_opt_rate(raw: Option<&str>) -> Result<Decimal, LookupError> {
    raw.map(parse_rate).transpose().map(|r| r.unwrap_or_default())
}

fn from_float(raw: Option<f64>) -> Result<Decimal, LookupError> {
    match raw {
        None => Ok(Decimal::ZERO),
        Some(v) => Decimal::try_from(v)
            .map_err(|e| LookupError::Parse(format!("invalid rate value {v}: {e}"))),
    }
}
