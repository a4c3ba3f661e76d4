//! ProScan traits, levels, logic styles, and energy styles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Intensity of a ProScan trait. Ordering puts higher levels first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    High,
    Mid,
    Low,
}

impl Level {
    /// Sort key for canonical ordering; higher levels come first.
    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 0,
            Self::Mid => 1,
            Self::Low => 2,
        }
    }

    /// Number of steps between two levels (0, 1, or 2).
    pub fn distance(&self, other: &Level) -> u8 {
        self.rank().abs_diff(other.rank())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Mid => write!(f, "Mid"),
            Self::Low => write!(f, "Low"),
        }
    }
}

/// The four primary ProScan traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProScanTrait {
    Dominance,
    Extroversion,
    Pace,
    Conformity,
}

impl ProScanTrait {
    pub const ALL: [ProScanTrait; 4] = [
        ProScanTrait::Dominance,
        ProScanTrait::Extroversion,
        ProScanTrait::Pace,
        ProScanTrait::Conformity,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Dominance => "Dominance",
            Self::Extroversion => "Extroversion",
            Self::Pace => "Pace",
            Self::Conformity => "Conformity",
        }
    }

    /// Short description of what a given level of this trait looks like.
    pub fn describe(&self, level: Level) -> &'static str {
        use Level::*;
        match (self, level) {
            (Self::Dominance, High) => "assertive, competitive, comfortable taking control",
            (Self::Dominance, Mid) => "asserts when needed, collaborates otherwise",
            (Self::Dominance, Low) => "cooperative, prefers consensus over confrontation",
            (Self::Extroversion, High) => "people-oriented, persuasive, thinks out loud",
            (Self::Extroversion, Mid) => "sociable in context, comfortable alone",
            (Self::Extroversion, Low) => "reserved, task-focused, reflective",
            (Self::Pace, High) => "patient, steady, prefers one thing at a time",
            (Self::Pace, Mid) => "balances urgency with follow-through",
            (Self::Pace, Low) => "fast-moving, restless, juggles many priorities",
            (Self::Conformity, High) => "detail-oriented, rule-respecting, risk-averse",
            (Self::Conformity, Mid) => "follows structure that makes sense, bends the rest",
            (Self::Conformity, Low) => "independent, big-picture, resists imposed structure",
        }
    }
}

impl fmt::Display for ProScanTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How someone prefers to reach conclusions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicStyle {
    Factual,
    Feeling,
    Intuitive,
}

impl LogicStyle {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Factual => "decides from data and evidence",
            Self::Feeling => "decides from values and impact on people",
            Self::Intuitive => "decides from pattern recognition and gut sense",
        }
    }
}

impl fmt::Display for LogicStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Factual => write!(f, "Factual"),
            Self::Feeling => write!(f, "Feeling"),
            Self::Intuitive => write!(f, "Intuitive"),
        }
    }
}

/// Energy style: how someone applies effort over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EnergyStyle {
    #[serde(rename = "thrust")]
    Thrust,
    #[serde(rename = "allegiance")]
    Allegiance,
    #[serde(rename = "ste-nacity")]
    SteNacity,
}

impl EnergyStyle {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Thrust => "short bursts of intense effort toward a goal",
            Self::Allegiance => "sustained effort on behalf of people and causes",
            Self::SteNacity => "steady, persistent effort that outlasts obstacles",
        }
    }
}

impl fmt::Display for EnergyStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Thrust => write!(f, "Thrust"),
            Self::Allegiance => write!(f, "Allegiance"),
            Self::SteNacity => write!(f, "Ste-Nacity"),
        }
    }
}

/// A (possibly partial) ProScan result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProScanProfile {
    pub dominance: Option<Level>,
    pub extroversion: Option<Level>,
    pub pace: Option<Level>,
    pub conformity: Option<Level>,
    pub logic: Option<LogicStyle>,
    pub energy: Vec<EnergyStyle>,
}

impl ProScanProfile {
    pub fn level(&self, t: ProScanTrait) -> Option<Level> {
        match t {
            ProScanTrait::Dominance => self.dominance,
            ProScanTrait::Extroversion => self.extroversion,
            ProScanTrait::Pace => self.pace,
            ProScanTrait::Conformity => self.conformity,
        }
    }

    /// Complete when all four trait levels are set; logic and energy are supplementary.
    pub fn is_complete(&self) -> bool {
        ProScanTrait::ALL.iter().all(|t| self.level(*t).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_rank_puts_high_first() {
        assert!(Level::High.rank() < Level::Mid.rank());
        assert!(Level::Mid.rank() < Level::Low.rank());
        assert_eq!(Level::High.distance(&Level::Low), 2);
        assert_eq!(Level::Low.distance(&Level::Mid), 1);
    }

    #[test]
    fn completeness_ignores_logic_and_energy() {
        let partial = ProScanProfile {
            dominance: Some(Level::High),
            extroversion: Some(Level::Mid),
            pace: Some(Level::Low),
            conformity: None,
            logic: Some(LogicStyle::Factual),
            energy: vec![EnergyStyle::Thrust],
        };
        assert!(!partial.is_complete());

        let complete = ProScanProfile {
            conformity: Some(Level::Low),
            logic: None,
            energy: vec![],
            ..partial
        };
        assert!(complete.is_complete());
    }

    #[test]
    fn energy_style_uses_hyphenated_name() {
        assert_eq!(
            serde_json::to_string(&EnergyStyle::SteNacity).unwrap(),
            "\"ste-nacity\""
        );
        assert_eq!(EnergyStyle::SteNacity.to_string(), "Ste-Nacity");
    }

    #[test]
    fn empty_json_deserializes_to_blank_profile() {
        let profile: ProScanProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile, ProScanProfile::default());
    }
}
