//! HTTP contact relay - posts form-encoded messages to a form endpoint.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpRelayConfig::new("https://formspree.io/f/abc123")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let relay = HttpContactRelay::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{header, Client};
use std::time::Duration;

use crate::domain::contact::ContactMessage;
use crate::ports::{ContactError, ContactRelay};

/// Configuration for the HTTP relay.
#[derive(Debug, Clone)]
pub struct HttpRelayConfig {
    /// Form endpoint receiving the POST.
    pub endpoint: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpRelayConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Relays contact messages with a single form-encoded POST.
pub struct HttpContactRelay {
    config: HttpRelayConfig,
    client: Client,
}

impl HttpContactRelay {
    pub fn new(config: HttpRelayConfig) -> Result<Self, ContactError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ContactError::Configuration(e.to_string()))?;

        Ok(Self { config, client })
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    fn map_send_error(&self, e: reqwest::Error) -> ContactError {
        if e.is_timeout() {
            ContactError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else if e.is_connect() {
            ContactError::network(format!("Connection failed: {}", e))
        } else if e.is_builder() {
            ContactError::Configuration(e.to_string())
        } else {
            ContactError::network(e.to_string())
        }
    }
}

#[async_trait]
impl ContactRelay for HttpContactRelay {
    async fn submit(&self, message: &ContactMessage) -> Result<(), ContactError> {
        tracing::debug!(endpoint = %self.config.endpoint, "relaying contact message");

        let response = self
            .client
            .post(&self.config.endpoint)
            .header(header::ACCEPT, "application/json")
            .form(&message.form_fields())
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(status = status.as_u16(), "contact message delivered");
            Ok(())
        } else {
            tracing::warn!(status = status.as_u16(), "contact endpoint rejected message");
            Err(ContactError::rejected(status.as_u16()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Form, Router};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    type Received = Arc<Mutex<Vec<HashMap<String, String>>>>;

    async fn spawn_endpoint(status: StatusCode) -> (String, Received) {
        let received: Received = Arc::default();
        let sink = received.clone();
        let app = Router::new().route(
            "/f/test",
            post(move |Form(fields): Form<HashMap<String, String>>| {
                let sink = sink.clone();
                async move {
                    sink.lock().unwrap().push(fields);
                    status
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}/f/test", addr), received)
    }

    fn message() -> ContactMessage {
        ContactMessage::new("Ada", "ada@example.com", "Let's talk").unwrap()
    }

    #[tokio::test]
    async fn posts_form_fields_and_accepts_ok() {
        let (url, received) = spawn_endpoint(StatusCode::OK).await;
        let relay = HttpContactRelay::new(HttpRelayConfig::new(url)).unwrap();

        relay.submit(&message()).await.unwrap();

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].get("name").map(String::as_str), Some("Ada"));
        assert_eq!(
            received[0].get("message").map(String::as_str),
            Some("Let's talk")
        );
    }

    #[tokio::test]
    async fn non_success_status_is_rejected() {
        let (url, _) = spawn_endpoint(StatusCode::UNPROCESSABLE_ENTITY).await;
        let relay = HttpContactRelay::new(HttpRelayConfig::new(url)).unwrap();

        assert_eq!(
            relay.submit(&message()).await,
            Err(ContactError::rejected(422))
        );
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let relay = HttpContactRelay::new(
            HttpRelayConfig::new(format!("http://{}/f/test", addr))
                .with_timeout(Duration::from_secs(2)),
        )
        .unwrap();

        assert!(matches!(
            relay.submit(&message()).await,
            Err(ContactError::Network(_)) | Err(ContactError::Timeout { .. })
        ));
    }
}
