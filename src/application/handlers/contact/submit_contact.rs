//! SubmitContactHandler - Validates and relays a contact form message.
//!
//! Relay failures are not errors to the caller: they come back as an
//! `Error` status with a message pointing at the fallback address.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::contact::{ContactFormStatus, ContactMessage};
use crate::domain::foundation::{DomainError, StateMachine};
use crate::ports::ContactRelay;

/// Command to submit the contact form.
#[derive(Debug, Clone)]
pub struct SubmitContactCommand {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Status the form was in before this submission.
    pub previous: ContactFormStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitContactResult {
    pub status: ContactFormStatus,
    pub message: String,
}

/// Handler for contact form submissions.
pub struct SubmitContactHandler {
    relay: Arc<dyn ContactRelay>,
    fallback_email: String,
}

impl SubmitContactHandler {
    pub fn new(relay: Arc<dyn ContactRelay>, fallback_email: impl Into<String>) -> Self {
        Self {
            relay,
            fallback_email: fallback_email.into(),
        }
    }

    pub async fn handle(&self, cmd: SubmitContactCommand) -> Result<SubmitContactResult, DomainError> {
        // 1. Only Idle or Error may start a send
        let status = cmd.previous.transition_to(ContactFormStatus::Sending)?;

        // 2. Validate fields
        let message = ContactMessage::new(cmd.name, cmd.email, cmd.message)?;

        // 3. Relay once, no retry
        match self.relay.submit(&message).await {
            Ok(()) => {
                tracing::info!("contact message sent");
                Ok(SubmitContactResult {
                    status: status.transition_to(ContactFormStatus::Sent)?,
                    message: "Thanks! Your message has been sent.".to_string(),
                })
            }
            Err(e) => {
                tracing::warn!(error = %e, "contact relay failed");
                Ok(SubmitContactResult {
                    status: status.transition_to(ContactFormStatus::Error)?,
                    message: format!(
                        "Something went wrong sending your message. Please try again or email {} directly.",
                        self.fallback_email
                    ),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::contact::InMemoryContactRelay;
    use crate::domain::foundation::ErrorCode;
    use crate::ports::ContactError;

    fn command(previous: ContactFormStatus) -> SubmitContactCommand {
        SubmitContactCommand {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
            previous,
        }
    }

    #[tokio::test]
    async fn successful_relay_marks_sent() {
        let relay = Arc::new(InMemoryContactRelay::new());
        let handler = SubmitContactHandler::new(relay.clone(), "cain@example.com");

        let result = handler.handle(command(ContactFormStatus::Idle)).await.unwrap();

        assert_eq!(result.status, ContactFormStatus::Sent);
        assert_eq!(relay.len(), 1);
    }

    #[tokio::test]
    async fn relay_failure_offers_email_fallback() {
        let relay = Arc::new(InMemoryContactRelay::failing_with(ContactError::rejected(500)));
        let handler = SubmitContactHandler::new(relay, "cain@example.com");

        let result = handler.handle(command(ContactFormStatus::Idle)).await.unwrap();

        assert_eq!(result.status, ContactFormStatus::Error);
        assert!(result.message.contains("cain@example.com"));
    }

    #[tokio::test]
    async fn error_state_can_retry() {
        let relay = Arc::new(InMemoryContactRelay::new());
        let handler = SubmitContactHandler::new(relay, "cain@example.com");

        let result = handler.handle(command(ContactFormStatus::Error)).await.unwrap();

        assert_eq!(result.status, ContactFormStatus::Sent);
    }

    #[tokio::test]
    async fn sent_form_cannot_resend() {
        let relay = Arc::new(InMemoryContactRelay::new());
        let handler = SubmitContactHandler::new(relay.clone(), "cain@example.com");

        let err = handler.handle(command(ContactFormStatus::Sent)).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert!(relay.is_empty());
    }

    #[tokio::test]
    async fn invalid_fields_never_reach_relay() {
        let relay = Arc::new(InMemoryContactRelay::new());
        let handler = SubmitContactHandler::new(relay.clone(), "cain@example.com");
        let mut cmd = command(ContactFormStatus::Idle);
        cmd.email = "not-an-email".to_string();

        let err = handler.handle(cmd).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert!(relay.is_empty());
    }
}
