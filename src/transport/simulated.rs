//! Stand-in transport: waits a fixed delay and logs what it captured

use super::traits::{ContactSubmission, ContactTransport, TransportError};
use async_trait::async_trait;
use std::time::Duration;

/// Default artificial round-trip
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

#[async_trait]
impl ContactTransport for SimulatedTransport {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), TransportError> {
        tokio::time::sleep(self.delay).await;
        tracing::info!(
            id = %submission.id,
            submitted_at = %submission.submitted_at,
            name = %submission.fields.name,
            email = %submission.fields.email,
            service = %submission.fields.service,
            message = %submission.fields.message,
            "form submitted"
        );
        Ok(())
    }
}
