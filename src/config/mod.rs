//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PROFILE_COMPASS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use profile_compass::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod contact;
mod error;
mod profile;
mod server;
mod site;

pub use contact::ContactConfig;
pub use error::{ConfigError, ValidationError};
pub use profile::ProfileConfig;
pub use server::{Environment, ServerConfig};
pub use site::{SiteConfig, SiteInfo};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Contact relay (endpoint, fallback address)
    pub contact: ContactConfig,

    /// Owner profile source and default dimension set
    #[serde(default)]
    pub profile: ProfileConfig,

    /// Site metadata and dashboard embeds
    #[serde(default)]
    pub site: SiteConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PROFILE_COMPASS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PROFILE_COMPASS__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `PROFILE_COMPASS__CONTACT__FALLBACK_EMAIL=...` -> `contact.fallback_email = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PROFILE_COMPASS")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.contact.validate(&self.server.environment)?;
        // a slow relay must surface as an error status, not a 408
        if self.server.request_timeout_secs <= self.contact.timeout_secs {
            return Err(ValidationError::RequestTimeoutBelowRelay);
        }
        self.profile.validate()?;
        self.site.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
