//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid host/port combination")]
    InvalidSocketAddr,

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Request timeout must be longer than the contact relay timeout")]
    RequestTimeoutBelowRelay,

    #[error("Invalid request body limit")]
    InvalidBodyLimit,

    #[error("Invalid CORS origin: {0}")]
    InvalidCorsOrigin(String),

    #[error("Invalid contact endpoint URL")]
    InvalidContactEndpoint,

    #[error("Contact endpoint must use HTTPS in production")]
    ContactEndpointMustBeHttps,

    #[error("Invalid contact relay timeout")]
    InvalidContactTimeout,

    #[error("Invalid fallback email address")]
    InvalidFallbackEmail,

    #[error("Owner profile file not found: {0}")]
    OwnerProfileNotFound(String),

    #[error("Invalid dashboard URL: {0}")]
    InvalidDashboardUrl(String),
}
