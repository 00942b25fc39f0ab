//! HTTP transport posting submissions as JSON

use super::traits::{ContactSubmission, ContactTransport, TransportError};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Header carrying the client-side submission id
const SUBMISSION_ID_HEADER: &str = "X-Submission-Id";

/// Client for posting contact submissions to a configured endpoint
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let endpoint = endpoint.into();
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(anyhow!("contact endpoint must be an http(s) URL: {endpoint}"));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactTransport for HttpTransport {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), TransportError> {
        debug!(id = %submission.id, endpoint = %self.endpoint, "posting contact submission");

        let response = self
            .client
            .post(&self.endpoint)
            .header(SUBMISSION_ID_HEADER, submission.id.to_string())
            .json(&submission.fields)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransportError::Timeout
                } else {
                    TransportError::Request(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        debug!(id = %submission.id, status = status.as_u16(), "contact submission accepted");
        Ok(())
    }
}
