//! Owner profile configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::frameworks::{OwnerProfile, OwnerProfileError};
use crate::domain::insights::DimensionSet;

/// Which owner profile to compare against and how many insight cards to build.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileConfig {
    /// YAML owner profile; the built-in profile is used when unset
    pub owner_profile_path: Option<PathBuf>,

    /// Default dimension set (full | compact)
    #[serde(default)]
    pub dimension_set: DimensionSet,
}

impl ProfileConfig {
    /// Loads the configured owner profile, or the built-in default.
    pub fn load_owner(&self) -> Result<OwnerProfile, OwnerProfileError> {
        match &self.owner_profile_path {
            Some(path) => OwnerProfile::load_yaml(path),
            None => Ok(OwnerProfile::default()),
        }
    }

    /// Validate profile configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.owner_profile_path {
            if !path.is_file() {
                return Err(ValidationError::OwnerProfileNotFound(
                    path.display().to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_to_builtin_owner() {
        let config = ProfileConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.dimension_set, DimensionSet::Full);
        assert_eq!(config.load_owner().unwrap().name, "Cain");
    }

    #[test]
    fn test_loads_owner_from_yaml_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name: Dana\nprofile:\n  mbti: INFJ\n").unwrap();
        let config = ProfileConfig {
            owner_profile_path: Some(file.path().to_path_buf()),
            ..Default::default()
        };

        assert!(config.validate().is_ok());
        assert_eq!(config.load_owner().unwrap().name, "Dana");
    }

    #[test]
    fn test_missing_file_fails_validation() {
        let config = ProfileConfig {
            owner_profile_path: Some(PathBuf::from("/no/such/owner.yaml")),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::OwnerProfileNotFound(_))
        ));
    }
}
