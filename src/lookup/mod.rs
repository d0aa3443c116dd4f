//! Rate test lookup - validates an address, queries the external tax-rate
//! provider and formats the resulting breakdown into a diagnostic report.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types that represent our business logic
//! - **API DTOs** (`taxjar/dto.rs`) - Exact API response shapes
//! - **Adapter** - Converts DTOs to domain models
//! - **Client** - HTTP client for the provider's rates endpoint
//! - **Report** - Ordered diagnostic rendering of an outcome
//! - **Service** - High-level orchestration of one test lookup
//!
//! This decoupling means:
//! 1. Provider API changes don't ripple through our codebase
//! 2. We can test the API contract independently
//! 3. We can swap providers without changing the lookup workflow
//!
//! # Usage
//!
//! ```ignore
//! use lookup::{TaxJarClient, TestLookupRequest, TestLookupService};
//!
//! let service = TestLookupService::new(TaxJarClient::new(), EmbeddedDirectory);
//! let response = service.run(TestLookupRequest {
//!     api_token: "your-api-token".to_string(),
//!     country_id: "45".to_string(),
//!     city: "Los Angeles".to_string(),
//!     postal_code: "90001".to_string(),
//! }).await;
//! println!("{}", response.report.unwrap().to_text());
//! ```

pub mod domain;
pub mod report;
pub mod service;
pub mod taxjar;
pub mod traits;

pub use domain::{JurisdictionRates, LookupError, RateBreakdown, TestAddress, VatRates};
pub use report::{RateReport, ReportLine};
pub use service::{TestLookupRequest, TestLookupResponse, TestLookupService};
pub use taxjar::TaxJarClient;
pub use traits::RateApi;
