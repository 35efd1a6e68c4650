//! HTTP implementation of [`AreaTransport`] over `reqwest`.
//!
//! The core never sees HTTP: any 2xx answer is success (the body is not
//! interpreted), a non-2xx status becomes [`TransportError::Rejected`], and
//! everything below that (DNS, TLS, connect, timeout) becomes
//! [`TransportError::Network`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use geo_core::{AreaRequest, AreaTransport, TransportError};

const CALCULATE_AREA_PATH: &str = "api/geo/calculate-area";

/// Client for the backend area-calculation service.
///
/// Holds the prepared endpoint URL and a configured `reqwest::Client`.
/// Point [`AreaServiceClient::new`] at a mock server's URI in tests.
pub struct AreaServiceClient {
    client: Client,
    endpoint: Url,
}

impl AreaServiceClient {
    /// Creates a client for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Config`] if the base URL does not parse or
    /// the underlying `reqwest::Client` cannot be constructed.
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
    ) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("geoarea/0.1 (area-calculation)")
            .build()
            .map_err(|e| TransportError::Config(e.to_string()))?;

        // Normalise to exactly one trailing slash so join() appends the API
        // path instead of replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base = Url::parse(&normalised)
            .map_err(|e| TransportError::Config(format!("invalid base URL '{base_url}': {e}")))?;
        let endpoint = base
            .join(CALCULATE_AREA_PATH)
            .map_err(|e| TransportError::Config(format!("invalid endpoint: {e}")))?;

        Ok(Self { client, endpoint })
    }

    /// The fully resolved calculate-area endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl AreaTransport for AreaServiceClient {
    async fn send_markers(&self, request: &AreaRequest) -> Result<(), TransportError> {
        debug!(url = %self.endpoint, markers = request.len(), "posting marker set");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        match response.error_for_status() {
            Ok(_) => Ok(()),
            Err(e) => match e.status() {
                Some(status) => Err(TransportError::Rejected {
                    status: status.as_u16(),
                }),
                None => Err(TransportError::Network(e.to_string())),
            },
        }
    }
}
