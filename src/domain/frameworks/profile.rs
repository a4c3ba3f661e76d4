//! Sparse multi-framework profiles for the visitor and the site owner.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use thiserror::Error;

use super::disc::{BlendCode, DiscStyle};
use super::drives::DriveScores;
use super::enneagram::{EnneagramProfile, EnneagramType};
use super::mbti::MbtiType;
use super::proscan::{EnergyStyle, Level, LogicStyle, ProScanProfile};

/// Identifies one of the five personality frameworks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameworkId {
    #[serde(rename = "mbti")]
    Mbti,
    #[serde(rename = "disc")]
    Disc,
    #[serde(rename = "enneagram")]
    Enneagram,
    #[serde(rename = "id_drives")]
    Drives,
    #[serde(rename = "proscan")]
    ProScan,
}

impl FrameworkId {
    pub const ALL: [FrameworkId; 5] = [
        FrameworkId::Mbti,
        FrameworkId::Disc,
        FrameworkId::Enneagram,
        FrameworkId::Drives,
        FrameworkId::ProScan,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Mbti => "MBTI",
            Self::Disc => "DISC",
            Self::Enneagram => "Enneagram",
            Self::Drives => "Instinctive Drives",
            Self::ProScan => "ProScan",
        }
    }
}

impl fmt::Display for FrameworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Any subset of the five frameworks.
///
/// A framework only counts as present under its completeness rule; see
/// [`FrameworkProfile::has`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameworkProfile {
    pub mbti: Option<MbtiType>,
    pub disc: Option<BlendCode>,
    pub enneagram: Option<EnneagramProfile>,
    #[serde(rename = "id_drives")]
    pub drives: DriveScores,
    pub proscan: ProScanProfile,
}

impl FrameworkProfile {
    pub fn has(&self, framework: FrameworkId) -> bool {
        match framework {
            FrameworkId::Mbti => self.mbti.is_some(),
            FrameworkId::Disc => self.disc.is_some(),
            FrameworkId::Enneagram => self.enneagram.is_some(),
            FrameworkId::Drives => self.drives.is_engaged(),
            FrameworkId::ProScan => self.proscan.is_complete(),
        }
    }

    /// Frameworks present, in `FrameworkId::ALL` order.
    pub fn filled(&self) -> Vec<FrameworkId> {
        FrameworkId::ALL
            .iter()
            .copied()
            .filter(|f| self.has(*f))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.filled().is_empty()
    }

    pub fn disc_primary(&self) -> Option<DiscStyle> {
        self.disc.map(|code| code.primary())
    }

    pub fn enneagram_type(&self) -> Option<EnneagramType> {
        self.enneagram.map(|e| e.core())
    }
}

/// Errors loading an owner profile from disk.
#[derive(Debug, Error)]
pub enum OwnerProfileError {
    #[error("Failed to read owner profile: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse owner profile: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Owner profile has no frameworks filled in")]
    Empty,
}

/// The site owner's fixed profile, passed explicitly into the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerProfile {
    pub name: String,
    pub profile: FrameworkProfile,
}

impl OwnerProfile {
    /// Parses an owner profile from YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, OwnerProfileError> {
        let owner: OwnerProfile = serde_yaml::from_str(yaml)?;
        if owner.profile.is_empty() {
            return Err(OwnerProfileError::Empty);
        }
        Ok(owner)
    }

    pub fn load_yaml(path: &Path) -> Result<Self, OwnerProfileError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }
}

impl Default for OwnerProfile {
    /// Cain: ENTJ, DISC D, Enneagram 8w7, drives V3 A7 C2 I8,
    /// ProScan High/Mid/Low/Low, Factual logic, Thrust energy.
    fn default() -> Self {
        let enneagram = EnneagramType::new(8)
            .and_then(|core| EnneagramProfile::new(core, EnneagramType::new(7).ok()))
            .ok();
        let drives = DriveScores::new(3, 7, 2, 8).unwrap_or_default();

        Self {
            name: "Cain".to_string(),
            profile: FrameworkProfile {
                mbti: Some(MbtiType::Entj),
                disc: Some(BlendCode::pure(DiscStyle::D)),
                enneagram,
                drives,
                proscan: ProScanProfile {
                    dominance: Some(Level::High),
                    extroversion: Some(Level::Mid),
                    pace: Some(Level::Low),
                    conformity: Some(Level::Low),
                    logic: Some(LogicStyle::Factual),
                    energy: vec![EnergyStyle::Thrust],
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_profile_has_no_frameworks() {
        let profile = FrameworkProfile::default();
        assert!(profile.is_empty());
        for f in FrameworkId::ALL {
            assert!(!profile.has(f));
        }
    }

    #[test]
    fn proscan_needs_all_four_traits_to_count() {
        let mut profile = FrameworkProfile::default();
        profile.proscan.logic = Some(LogicStyle::Intuitive);
        profile.proscan.energy = vec![EnergyStyle::Allegiance];
        assert!(!profile.has(FrameworkId::ProScan));

        profile.proscan.dominance = Some(Level::Low);
        profile.proscan.extroversion = Some(Level::Low);
        profile.proscan.pace = Some(Level::High);
        profile.proscan.conformity = Some(Level::Mid);
        assert!(profile.has(FrameworkId::ProScan));
    }

    #[test]
    fn drives_count_once_any_score_leaves_neutral() {
        let mut profile = FrameworkProfile::default();
        assert!(!profile.has(FrameworkId::Drives));
        profile.drives = DriveScores::new(5, 4, 5, 5).unwrap();
        assert_eq!(profile.filled(), vec![FrameworkId::Drives]);
    }

    #[test]
    fn default_owner_is_cain_with_every_framework() {
        let owner = OwnerProfile::default();
        assert_eq!(owner.name, "Cain");
        assert_eq!(owner.profile.filled(), FrameworkId::ALL.to_vec());
        assert_eq!(owner.profile.disc_primary(), Some(DiscStyle::D));
        assert_eq!(owner.profile.enneagram.unwrap().to_string(), "8w7");
    }

    #[test]
    fn visitor_json_uses_framework_field_names() {
        let json = r#"{"mbti": "INFP", "disc": "Si", "enneagram": {"type": 2, "wing": 1}, "id_drives": {"verify": 8}}"#;
        let profile: FrameworkProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.mbti, Some(MbtiType::Infp));
        assert_eq!(profile.disc.unwrap().code(), "Si");
        assert_eq!(
            profile.filled(),
            vec![
                FrameworkId::Mbti,
                FrameworkId::Disc,
                FrameworkId::Enneagram,
                FrameworkId::Drives
            ]
        );
    }

    #[test]
    fn owner_profile_loads_from_yaml_file() {
        let yaml = "name: Dana\nprofile:\n  mbti: INTP\n  disc: C\n";
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let owner = OwnerProfile::load_yaml(file.path()).unwrap();
        assert_eq!(owner.name, "Dana");
        assert_eq!(owner.profile.mbti, Some(MbtiType::Intp));
        assert!(!owner.profile.has(FrameworkId::Enneagram));
    }

    #[test]
    fn owner_profile_rejects_empty_and_malformed_yaml() {
        assert!(matches!(
            OwnerProfile::from_yaml_str("name: Nobody\nprofile: {}\n"),
            Err(OwnerProfileError::Empty)
        ));
        assert!(matches!(
            OwnerProfile::from_yaml_str("name: X\nprofile:\n  mbti: ZZZZ\n"),
            Err(OwnerProfileError::Parse(_))
        ));
        assert!(matches!(
            OwnerProfile::load_yaml(Path::new("/definitely/not/here.yaml")),
            Err(OwnerProfileError::Io(_))
        ));
    }
}
