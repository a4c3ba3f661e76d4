//! Contact relay configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Where contact form messages go, and who to email when that fails.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactConfig {
    /// Form endpoint; when unset outside production, messages are kept in memory
    pub endpoint: Option<String>,

    /// Address shown to visitors when delivery fails
    pub fallback_email: String,

    /// Relay request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ContactConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate contact configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        match self.endpoint.as_deref() {
            None | Some("") if *environment == Environment::Production => {
                return Err(ValidationError::MissingRequired("CONTACT__ENDPOINT"));
            }
            None | Some("") => {}
            Some(url) => {
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    return Err(ValidationError::InvalidContactEndpoint);
                }
                if *environment == Environment::Production && !url.starts_with("https://") {
                    return Err(ValidationError::ContactEndpointMustBeHttps);
                }
            }
        }
        if self.timeout_secs == 0 || self.timeout_secs > 60 {
            return Err(ValidationError::InvalidContactTimeout);
        }
        match self.fallback_email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
            _ => Err(ValidationError::InvalidFallbackEmail),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            fallback_email: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactConfig {
        ContactConfig {
            endpoint: Some("https://formspree.io/f/abc".to_string()),
            fallback_email: "cain@example.com".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid().validate(&Environment::Production).is_ok());
        assert_eq!(valid().timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_endpoint_required_only_in_production() {
        let config = ContactConfig {
            endpoint: None,
            ..valid()
        };
        assert!(config.validate(&Environment::Development).is_ok());
        assert_eq!(
            config.validate(&Environment::Production),
            Err(ValidationError::MissingRequired("CONTACT__ENDPOINT"))
        );
    }

    #[test]
    fn test_production_requires_https() {
        let config = ContactConfig {
            endpoint: Some("http://formspree.io/f/abc".to_string()),
            ..valid()
        };
        assert!(config.validate(&Environment::Staging).is_ok());
        assert_eq!(
            config.validate(&Environment::Production),
            Err(ValidationError::ContactEndpointMustBeHttps)
        );
    }

    #[test]
    fn test_rejects_bad_endpoint_and_email() {
        let config = ContactConfig {
            endpoint: Some("formspree.io".to_string()),
            ..valid()
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::InvalidContactEndpoint)
        );

        let config = ContactConfig {
            fallback_email: "nobody".to_string(),
            ..valid()
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::InvalidFallbackEmail)
        );
    }
}
