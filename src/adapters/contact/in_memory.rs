//! In-memory contact relay.
//!
//! Records submitted messages instead of sending them. Used in development
//! when no endpoint is configured, and in tests to inject failures.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::contact::ContactMessage;
use crate::ports::{ContactError, ContactRelay};

/// Thread-safe via internal `Mutex`. Does not persist across restarts.
#[derive(Default)]
pub struct InMemoryContactRelay {
    sent: Mutex<Vec<ContactMessage>>,
    failure: Mutex<Option<ContactError>>,
}

impl InMemoryContactRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every later submission fails with `error`.
    pub fn failing_with(error: ContactError) -> Self {
        Self {
            sent: Mutex::default(),
            failure: Mutex::new(Some(error)),
        }
    }

    pub fn set_failure(&self, error: Option<ContactError>) {
        if let Ok(mut failure) = self.failure.lock() {
            *failure = error;
        }
    }

    /// Messages accepted so far, oldest first.
    pub fn sent(&self) -> Vec<ContactMessage> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.sent.lock().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ContactRelay for InMemoryContactRelay {
    async fn submit(&self, message: &ContactMessage) -> Result<(), ContactError> {
        let failure = self
            .failure
            .lock()
            .map_err(|_| ContactError::Configuration("relay lock poisoned".to_string()))?
            .clone();
        if let Some(error) = failure {
            return Err(error);
        }

        self.sent
            .lock()
            .map_err(|_| ContactError::Configuration("relay lock poisoned".to_string()))?
            .push(message.clone());
        tracing::debug!(email = message.email(), "contact message recorded in memory");
        Ok(())
    }
}
