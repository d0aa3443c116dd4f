//! Trait definitions for the rate lookup gateway.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses the real TaxJar client, while tests substitute
//! recording mocks.

use async_trait::async_trait;

use super::domain::{LookupError, RateBreakdown, TestAddress};

/// Gateway to the external sales-tax-rate provider.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait RateApi: Send + Sync {
    /// One rate lookup for an address fragment using the given credentials.
    ///
    /// The token travels per call because the admin probes candidate
    /// credentials before saving them - there is no "current" token at this
    /// layer. An empty token is forwarded and rejected by the provider.
    async fn lookup_rate(
        &self,
        token: &str,
        address: &TestAddress,
    ) -> Result<RateBreakdown, LookupError>;
}

// Implement the trait for the real client

#[async_trait]
impl RateApi for super::taxjar::TaxJarClient {
    async fn lookup_rate(
        &self,
        token: &str,
        address: &TestAddress,
    ) -> Result<RateBreakdown, LookupError> {
        self.lookup_rate(token, address).await
    }
}
