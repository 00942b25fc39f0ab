//! Trait abstraction for the submission side effect to enable mocking in tests

use crate::state::FormFields;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

/// Failure to deliver a submission. Always recoverable: the form returns
/// to idle with the user's input intact.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("endpoint answered with status {0}")]
    Status(u16),
    #[error("request timed out")]
    Timeout,
}

/// A validated snapshot of the form, taken when submission starts
#[derive(Debug, Clone, PartialEq)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub fields: FormFields,
}

impl ContactSubmission {
    pub fn new(fields: FormFields) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            fields,
        }
    }
}

/// Delivers contact submissions
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactTransport: Send + Sync {
    /// Deliver one submission. Returning means the attempt is over.
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), TransportError>;
}
