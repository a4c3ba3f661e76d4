//! HTTP listener configuration for the compass API.

use serde::Deserialize;
use std::net::SocketAddr;

use super::error::ValidationError;

/// Largest request body accepted, in bytes. Contact messages are the
/// biggest payload and cap at 5000 characters.
const MAX_BODY_LIMIT: usize = 1024 * 1024;

/// Where and how the API listens.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub environment: Environment,

    /// `EnvFilter` directive; `RUST_LOG` wins when set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Whole-request timeout; must outlast the contact relay timeout
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Request body cap in bytes
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,

    /// Front-end origins allowed to call the API (comma-separated).
    /// Required in production; any origin is allowed otherwise when unset.
    pub cors_origins: Option<String>,
}

/// Deployment environment.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ValidationError::InvalidSocketAddr)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Configured origins, trimmed; empty entries are dropped.
    pub fn cors_origins_list(&self) -> Vec<String> {
        self.cors_origins
            .as_deref()
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        self.socket_addr()?;
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.body_limit_bytes == 0 || self.body_limit_bytes > MAX_BODY_LIMIT {
            return Err(ValidationError::InvalidBodyLimit);
        }

        let origins = self.cors_origins_list();
        if let Some(bad) = origins.iter().find(|o| !is_origin(o)) {
            return Err(ValidationError::InvalidCorsOrigin(bad.clone()));
        }
        if self.is_production() && origins.is_empty() {
            return Err(ValidationError::MissingRequired("SERVER__CORS_ORIGINS"));
        }
        Ok(())
    }
}

/// Scheme and host only: `https://example.com` or `http://localhost:5173`.
fn is_origin(origin: &str) -> bool {
    let rest = origin
        .strip_prefix("https://")
        .or_else(|| origin.strip_prefix("http://"));
    match rest {
        Some(host) => !host.is_empty() && !host.contains('/') && !host.contains(char::is_whitespace),
        None => false,
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: Environment::default(),
            log_level: default_log_level(),
            request_timeout_secs: default_request_timeout(),
            body_limit_bytes: default_body_limit(),
            cors_origins: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info,profile_compass=debug,tower_http=info".to_string()
}

fn default_request_timeout() -> u64 {
    15
}

fn default_body_limit() -> usize {
    64 * 1024
}
