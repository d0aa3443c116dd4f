//! TaxJar HTTP client
//!
//! Handles communication with the TaxJar rates endpoint.
//! See: https://developers.taxjar.com/api/reference/#rates
//!
//! Authentication is a bearer token sent per request. The token is
//! deliberately not validated here - an empty or wrong token goes out as-is
//! and the provider's own authentication error comes back in the outcome.
//! One attempt per call; there are no retries at this layer.

use super::{adapter, dto};
use crate::lookup::domain::{LookupError, RateBreakdown, TestAddress};

/// TaxJar API client
pub struct TaxJarClient {
    http_client: reqwest::Client,
    base_url: String,
}

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

impl TaxJarClient {
    /// Create a new client
    pub fn new() -> Self {
        let http_client = reqwest::Client::builder()
            .gzip(true) // Accept gzip-compressed responses
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: "https://api.taxjar.com/v2".to_string(),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Look up the applicable tax rates for an address fragment.
    pub async fn lookup_rate(
        &self,
        token: &str,
        address: &TestAddress,
    ) -> Result<RateBreakdown, LookupError> {
        let envelope = self.send_rates_request(token, address).await?;
        adapter::to_breakdown(envelope.rate)
    }

    /// Send the HTTP request and parse the response
    async fn send_rates_request(
        &self,
        token: &str,
        address: &TestAddress,
    ) -> Result<dto::RateEnvelope, LookupError> {
        let url = self.rates_url(address);
        tracing::debug!(%url, "requesting rates");

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            // TaxJar error bodies carry the diagnostic we surface verbatim
            if let Ok(error) = response.json::<dto::ApiError>().await {
                let message = adapter::error_message(error);
                tracing::warn!(%status, "provider rejected rate lookup: {message}");
                return Err(LookupError::Provider(message));
            }
            return Err(LookupError::Network(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json::<dto::RateEnvelope>()
            .await
            .map_err(|e| LookupError::Parse(e.to_string()))
    }

    /// Build the rates URL. The postal code is a path segment on this
    /// endpoint; the remaining address fields travel as query parameters
    /// and are omitted when absent.
    fn rates_url(&self, address: &TestAddress) -> String {
        let zip = address.postal_code.as_deref().unwrap_or("");
        let mut url = format!("{}/rates/{}", self.base_url, urlencoding::encode(zip));

        let params = [
            ("country", address.country_code.as_deref()),
            ("city", address.city.as_deref()),
            ("state", address.region.as_deref()),
        ];
        let mut separator = '?';
        for (key, value) in params {
            if let Some(value) = value {
                url.push(separator);
                url.push_str(key);
                url.push('=');
                url.push_str(&urlencoding::encode(value));
                separator = '&';
            }
        }
        url
    }
}

impl Default for TaxJarClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Note: Real integration tests would use wiremock or similar to mock the
    // HTTP server. These are unit tests for the client structure.

    #[test]
    fn test_client_creation() {
        let client = TaxJarClient::new();
        assert_eq!(client.base_url, "https://api.taxjar.com/v2");
    }

    #[test]
    fn test_client_with_custom_url() {
        let client = TaxJarClient::with_base_url("http://localhost:8080");
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_user_agent_format() {
        assert!(USER_AGENT.starts_with("tax-minder/"));
    }

    #[test]
    fn test_rates_url_full_address() {
        let client = TaxJarClient::with_base_url("http://test");
        let address = TestAddress {
            country_code: Some("US".to_string()),
            city: Some("Los Angeles".to_string()),
            region: None,
            postal_code: Some("90001".to_string()),
        };

        assert_eq!(
            client.rates_url(&address),
            "http://test/rates/90001?country=US&city=Los%20Angeles"
        );
    }

    #[test]
    fn test_rates_url_empty_address() {
        let client = TaxJarClient::with_base_url("http://test");
        assert_eq!(client.rates_url(&TestAddress::default()), "http://test/rates/");
    }

    #[test]
    fn test_rates_url_country_only() {
        let client = TaxJarClient::with_base_url("http://test");
        let address = TestAddress {
            country_code: Some("DE".to_string()),
            ..Default::default()
        };

        assert_eq!(client.rates_url(&address), "http://test/rates/?country=DE");
    }

    #[test]
    fn test_rates_url_encodes_region_when_present() {
        // The test workflow never sets a region, but the contract carries one
        let client = TaxJarClient::with_base_url("http://test");
        let address = TestAddress {
            country_code: Some("US".to_string()),
            region: Some("NY".to_string()),
            ..Default::default()
        };

        assert_eq!(
            client.rates_url(&address),
            "http://test/rates/?country=US&state=NY"
        );
    }
}
