//! Contact submission transports
//!
//! The form hands a [`ContactSubmission`] to a [`ContactTransport`]. By
//! default the submission is simulated; with an endpoint configured it is
//! POSTed as JSON.

mod http;
mod simulated;
mod traits;

pub use http::HttpTransport;
pub use simulated::{SimulatedTransport, DEFAULT_SUBMIT_DELAY};
pub use traits::{ContactSubmission, ContactTransport, TransportError};

#[cfg(test)]
pub use traits::MockContactTransport;

use crate::config::SiteConfig;
use anyhow::Result;
use std::sync::Arc;

/// Pick the transport the configuration asks for
pub fn from_config(config: &SiteConfig) -> Result<Arc<dyn ContactTransport>> {
    match config.contact_endpoint() {
        Some(endpoint) => {
            let transport = HttpTransport::new(endpoint, config.request_timeout())?;
            tracing::info!(endpoint = %transport.endpoint(), "contact submissions will be posted");
            Ok(Arc::new(transport))
        }
        None => {
            let transport = SimulatedTransport::new(config.submit_delay());
            tracing::info!(
                delay_ms = transport.delay().as_millis() as u64,
                "no contact endpoint configured, simulating submissions"
            );
            Ok(Arc::new(transport))
        }
    }
}
