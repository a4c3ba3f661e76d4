//! ContactFormStatus enum for tracking a contact form submission.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Lifecycle of one contact form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ContactFormStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Error,
}

impl StateMachine for ContactFormStatus {
    /// Valid transitions:
    /// - Idle -> Sending
    /// - Sending -> Sent | Error
    /// - Error -> Sending (manual retry)
    fn valid_transitions(&self) -> Vec<Self> {
        use ContactFormStatus::*;
        match self {
            Idle => vec![Sending],
            Sending => vec![Sent, Error],
            Error => vec![Sending],
            Sent => vec![],
        }
    }
}

impl fmt::Display for ContactFormStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ContactFormStatus::Idle => "Idle",
            ContactFormStatus::Sending => "Sending",
            ContactFormStatus::Sent => "Sent",
            ContactFormStatus::Error => "Error",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        assert_eq!(ContactFormStatus::default(), ContactFormStatus::Idle);
    }

    #[test]
    fn happy_path_transitions() {
        let s = ContactFormStatus::Idle
            .transition_to(ContactFormStatus::Sending)
            .unwrap();
        let s = s.transition_to(ContactFormStatus::Sent).unwrap();
        assert!(s.is_terminal());
    }

    #[test]
    fn error_can_retry() {
        let s = ContactFormStatus::Sending
            .transition_to(ContactFormStatus::Error)
            .unwrap();
        assert!(s.can_transition_to(&ContactFormStatus::Sending));
        assert!(!s.is_terminal());
    }

    #[test]
    fn idle_cannot_jump_to_sent() {
        assert!(ContactFormStatus::Idle
            .transition_to(ContactFormStatus::Sent)
            .is_err());
    }

    #[test]
    fn sent_cannot_resend() {
        assert!(!ContactFormStatus::Sent.can_transition_to(&ContactFormStatus::Sending));
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ContactFormStatus::Sending).unwrap(),
            "\"sending\""
        );
    }
}
