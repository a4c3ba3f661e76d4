//! Collaboration dimensions and the frameworks that inform each one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;
use crate::domain::frameworks::FrameworkId;

/// One facet of working together that gets its own insight card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollaborationDimension {
    Communication,
    DecisionMaking,
    Conflict,
    Delegation,
    Feedback,
    Leadership,
    Stress,
    Motivation,
}

impl CollaborationDimension {
    pub const ALL: [CollaborationDimension; 8] = [
        CollaborationDimension::Communication,
        CollaborationDimension::DecisionMaking,
        CollaborationDimension::Conflict,
        CollaborationDimension::Delegation,
        CollaborationDimension::Feedback,
        CollaborationDimension::Leadership,
        CollaborationDimension::Stress,
        CollaborationDimension::Motivation,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Communication => "communication",
            Self::DecisionMaking => "decision-making",
            Self::Conflict => "conflict",
            Self::Delegation => "delegation",
            Self::Feedback => "feedback",
            Self::Leadership => "leadership",
            Self::Stress => "stress",
            Self::Motivation => "motivation",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Communication => "Communication",
            Self::DecisionMaking => "Decision Making",
            Self::Conflict => "Handling Conflict",
            Self::Delegation => "Delegation",
            Self::Feedback => "Giving & Receiving Feedback",
            Self::Leadership => "Leadership Dynamics",
            Self::Stress => "Under Stress",
            Self::Motivation => "What Drives You",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Communication => "💬",
            Self::DecisionMaking => "🧭",
            Self::Conflict => "⚡",
            Self::Delegation => "🤝",
            Self::Feedback => "🔁",
            Self::Leadership => "🎯",
            Self::Stress => "🌡️",
            Self::Motivation => "🔥",
        }
    }

    /// Frameworks that inform this dimension, most relevant first.
    pub fn priority(&self) -> &'static [FrameworkId] {
        use FrameworkId::*;
        match self {
            Self::Communication => &[Disc, Mbti, ProScan, Enneagram, Drives],
            Self::DecisionMaking => &[Mbti, Drives, ProScan, Disc, Enneagram],
            Self::Conflict => &[Enneagram, Disc, Mbti, ProScan],
            Self::Delegation => &[Disc, Drives, ProScan, Mbti],
            Self::Feedback => &[Enneagram, Mbti, Disc, ProScan],
            Self::Leadership => &[Disc, Mbti, Enneagram, ProScan],
            Self::Stress => &[Enneagram, Mbti, Drives, ProScan],
            Self::Motivation => &[Enneagram, Drives, Disc, Mbti],
        }
    }
}

impl fmt::Display for CollaborationDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Which list of dimensions to assemble.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionSet {
    /// All eight dimensions.
    #[default]
    Full,
    /// Six dimensions; drops feedback and motivation.
    Compact,
}

impl DimensionSet {
    pub fn dimensions(&self) -> &'static [CollaborationDimension] {
        use CollaborationDimension::*;
        match self {
            Self::Full => &CollaborationDimension::ALL,
            Self::Compact => &[
                Communication,
                DecisionMaking,
                Conflict,
                Delegation,
                Leadership,
                Stress,
            ],
        }
    }
}

impl FromStr for DimensionSet {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "compact" => Ok(Self::Compact),
            other => Err(ValidationError::invalid_format(
                "dimension_set",
                format!("expected 'full' or 'compact', got '{}'", other),
            )),
        }
    }
}
