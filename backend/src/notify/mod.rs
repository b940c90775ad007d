//! Outbound ready signal to the peer service.

use std::time::Duration;

use crate::errors::AppError;

/// Header carrying the shared secret, on inbound and outbound requests alike.
pub const PEER_KEY_HEADER: &str = "apiKey";

const PEER_TIMEOUT: Duration = Duration::from_secs(10);

/// Sends the bodyless "proxy ready" POST to the peer service.
pub struct ReadyNotifier {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl ReadyNotifier {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(PEER_TIMEOUT)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST to the peer; a transport failure or non-2xx reply is an error.
    pub async fn notify_ready(&self) -> Result<(), AppError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(PEER_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        response.error_for_status()?;
        tracing::info!("Ready signal delivered to {}", self.endpoint);
        Ok(())
    }
}
