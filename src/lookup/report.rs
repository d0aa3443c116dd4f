//! Diagnostic report rendering for test lookups.
//!
//! Field ordering is a contract: consumers see exactly this sequence of
//! labeled lines, not an unordered set. Two renderings exist - plain text
//! for terminals and the `<br />`-separated flavor the admin page
//! historically used - but both draw from the same ordered lines.
//!
//! Formatting is a pure function of the lookup outcome: identical outcomes
//! produce byte-identical reports.

use super::domain::{JurisdictionRates, LookupError, RateBreakdown, VatRates};

/// One line of the diagnostic report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    Plain(String),
    /// The final total line, bolded in the HTML rendering
    Emphasized(String),
}

impl ReportLine {
    /// The line's text without rendering decoration.
    pub fn text(&self) -> &str {
        match self {
            ReportLine::Plain(text) | ReportLine::Emphasized(text) => text,
        }
    }
}

/// Ordered diagnostic report for one test lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateReport {
    lines: Vec<ReportLine>,
}

impl RateReport {
    /// The report lines, in contract order.
    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    /// Newline-separated plain text.
    pub fn to_text(&self) -> String {
        self.lines()
            .iter()
            .map(ReportLine::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `<br />`-separated rendering with the emphasized line bolded.
    ///
    /// A single-line failure report comes out as the bare message with no
    /// markup at all.
    pub fn to_html(&self) -> String {
        self.lines()
            .iter()
            .map(|line| match line {
                ReportLine::Plain(text) => text.clone(),
                ReportLine::Emphasized(text) => format!("<b>{text}</b>"),
            })
            .collect::<Vec<_>>()
            .join("<br />")
    }
}

/// Render a lookup outcome into the diagnostic report.
///
/// Failures render as the provider's message alone, with no decoration.
pub fn render(outcome: &Result<RateBreakdown, LookupError>) -> RateReport {
    match outcome {
        Ok(RateBreakdown::UsCanada(rates)) => render_us_canada(rates),
        Ok(RateBreakdown::International(rates)) => render_international(rates),
        Err(error) => RateReport {
            lines: vec![ReportLine::Plain(error.to_string())],
        },
    }
}

/// Seven itemized lines, then the emphasized total. The order is fixed.
fn render_us_canada(rates: &JurisdictionRates) -> RateReport {
    RateReport {
        lines: vec![
            ReportLine::Plain(format!("State: {}", rates.state.as_deref().unwrap_or(""))),
            ReportLine::Plain(format!("County: {}", rates.county.as_deref().unwrap_or(""))),
            ReportLine::Plain(format!("City: {}", rates.city.as_deref().unwrap_or(""))),
            ReportLine::Plain(format!("State rate: {}", rates.state_rate)),
            ReportLine::Plain(format!("County rate: {}", rates.county_rate)),
            ReportLine::Plain(format!("City rate: {}", rates.city_rate)),
            ReportLine::Plain(format!(
                "Combined district rate: {}",
                rates.combined_district_rate
            )),
            ReportLine::Emphasized(format!("Total rate: {}", rates.combined_rate)),
        ],
    }
}

/// Four itemized lines, then the emphasized standard rate. The order is fixed.
fn render_international(rates: &VatRates) -> RateReport {
    RateReport {
        lines: vec![
            ReportLine::Plain(format!(
                "Country: {}",
                rates.country_name.as_deref().unwrap_or("")
            )),
            ReportLine::Plain(format!("Reduced rate: {}", rates.reduced_rate)),
            ReportLine::Plain(format!("Super reduced rate: {}", rates.super_reduced_rate)),
            ReportLine::Plain(format!("Parking rate: {}", rates.parking_rate)),
            ReportLine::Emphasized(format!("Standard rate: {}", rates.standard_rate)),
        ],
    }
}
