//! Contact relay port.
//!
//! Defines the contract for delivering a contact form message to a
//! third-party form endpoint. Delivery is fire-once: callers do not retry,
//! and a failure is surfaced to the visitor with an email fallback.
//!
//! # Example
//!
//! ```ignore
//! use profile_compass::ports::ContactRelay;
//!
//! async fn send(relay: &dyn ContactRelay, message: &ContactMessage) {
//!     if let Err(e) = relay.submit(message).await {
//!         tracing::warn!(error = %e, "contact delivery failed");
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::domain::contact::ContactMessage;

/// Port for relaying contact form submissions.
#[async_trait]
pub trait ContactRelay: Send + Sync {
    /// Delivers one message.
    ///
    /// # Returns
    ///
    /// - `Ok(())` - Endpoint accepted the message
    /// - `Err(ContactError)` - Endpoint rejected it or was unreachable
    async fn submit(&self, message: &ContactMessage) -> Result<(), ContactError>;
}

/// Contact relay errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    /// Endpoint answered with a non-success status.
    #[error("contact endpoint rejected message with status {status}")]
    Rejected {
        /// HTTP status code returned.
        status: u16,
    },

    /// Request could not reach the endpoint.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// Relay misconfigured (bad endpoint URL, client build failure).
    #[error("relay misconfigured: {0}")]
    Configuration(String),
}

impl ContactError {
    /// Creates a rejected error.
    pub fn rejected(status: u16) -> Self {
        Self::Rejected { status }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_display_their_cause() {
        assert_eq!(
            ContactError::rejected(422).to_string(),
            "contact endpoint rejected message with status 422"
        );
        assert_eq!(
            ContactError::Timeout { timeout_secs: 10 }.to_string(),
            "request timed out after 10s"
        );
        assert_eq!(
            ContactError::network("refused").to_string(),
            "network error: refused"
        );
    }
}
