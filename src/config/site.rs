//! Site metadata configuration

use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// Title, description, and static dashboard embeds served to the front end.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_description")]
    pub description: String,

    /// Dashboard embed URLs (comma-separated)
    pub dashboard_urls: Option<String>,
}

/// Public view of the site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteInfo {
    pub title: String,
    pub description: String,
    pub dashboards: Vec<String>,
}

impl SiteConfig {
    /// Get dashboard URLs as a vector
    pub fn dashboard_urls_list(&self) -> Vec<String> {
        self.dashboard_urls
            .as_ref()
            .map(|s| {
                s.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn info(&self) -> SiteInfo {
        SiteInfo {
            title: self.title.clone(),
            description: self.description.clone(),
            dashboards: self.dashboard_urls_list(),
        }
    }

    /// Validate site configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingRequired("SITE__TITLE"));
        }
        for url in self.dashboard_urls_list() {
            if !url.starts_with("https://") && !url.starts_with("http://") {
                return Err(ValidationError::InvalidDashboardUrl(url));
            }
        }
        Ok(())
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: default_description(),
            dashboard_urls: None,
        }
    }
}

fn default_title() -> String {
    "Profile Compass".to_string()
}

fn default_description() -> String {
    "See how your personality results line up with mine across MBTI, DISC, Enneagram, ProScan, and Instinctive Drives.".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Profile Compass");
        assert!(config.dashboard_urls_list().is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_dashboard_urls_parsing() {
        let config = SiteConfig {
            dashboard_urls: Some("https://a.example/d1, https://b.example/d2,".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.info().dashboards,
            vec!["https://a.example/d1", "https://b.example/d2"]
        );
    }

    #[test]
    fn test_rejects_non_http_dashboard() {
        let config = SiteConfig {
            dashboard_urls: Some("ftp://a.example/d1".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidDashboardUrl(_))
        ));
    }
}
