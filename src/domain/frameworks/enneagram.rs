//! Enneagram types, wings, arrows, and triads.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Enneagram type number, always 1 through 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct EnneagramType(u8);

impl EnneagramType {
    pub fn new(number: u8) -> Result<Self, ValidationError> {
        if !(1..=9).contains(&number) {
            return Err(ValidationError::out_of_range(
                "enneagram_type",
                1,
                9,
                number as i32,
            ));
        }
        Ok(Self(number))
    }

    /// All nine types in ascending order.
    pub fn all() -> impl Iterator<Item = EnneagramType> {
        (1..=9).map(EnneagramType)
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    /// The two adjacent types, lower neighbour first (1 → [9, 2], 9 → [8, 1]).
    pub fn wings(&self) -> [EnneagramType; 2] {
        let below = if self.0 == 1 { 9 } else { self.0 - 1 };
        let above = if self.0 == 9 { 1 } else { self.0 + 1 };
        [EnneagramType(below), EnneagramType(above)]
    }

    pub fn is_wing(&self, other: &EnneagramType) -> bool {
        self.wings().contains(other)
    }

    pub fn entry(&self) -> &'static EnneagramEntry {
        &ENNEAGRAM_REGISTRY[(self.0 - 1) as usize]
    }

    /// Direction of integration.
    pub fn growth(&self) -> EnneagramType {
        EnneagramType(self.entry().growth)
    }

    /// Direction of disintegration.
    pub fn stress(&self) -> EnneagramType {
        EnneagramType(self.entry().stress)
    }

    pub fn triad(&self) -> Triad {
        self.entry().triad
    }
}

impl TryFrom<u8> for EnneagramType {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EnneagramType> for u8 {
    fn from(value: EnneagramType) -> Self {
        value.0
    }
}

impl fmt::Display for EnneagramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Center of intelligence a type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Triad {
    /// 8, 9, 1
    Gut,
    /// 2, 3, 4
    Heart,
    /// 5, 6, 7
    Head,
}

impl fmt::Display for Triad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gut => write!(f, "Gut"),
            Self::Heart => write!(f, "Heart"),
            Self::Head => write!(f, "Head"),
        }
    }
}

/// A core type with an optional wing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawEnneagramProfile")]
pub struct EnneagramProfile {
    #[serde(rename = "type")]
    core: EnneagramType,
    wing: Option<EnneagramType>,
}

#[derive(Deserialize)]
struct RawEnneagramProfile {
    #[serde(rename = "type")]
    core: EnneagramType,
    wing: Option<EnneagramType>,
}

impl TryFrom<RawEnneagramProfile> for EnneagramProfile {
    type Error = ValidationError;

    fn try_from(raw: RawEnneagramProfile) -> Result<Self, Self::Error> {
        Self::new(raw.core, raw.wing)
    }
}

impl EnneagramProfile {
    /// Creates a profile; the wing must be adjacent to the core type.
    pub fn new(core: EnneagramType, wing: Option<EnneagramType>) -> Result<Self, ValidationError> {
        if let Some(w) = wing {
            if !core.is_wing(&w) {
                return Err(ValidationError::invalid_format(
                    "wing",
                    format!("{} is not adjacent to type {}", w, core),
                ));
            }
        }
        Ok(Self { core, wing })
    }

    pub fn core(&self) -> EnneagramType {
        self.core
    }

    pub fn wing(&self) -> Option<EnneagramType> {
        self.wing
    }
}

impl fmt::Display for EnneagramProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.wing {
            Some(w) => write!(f, "{}w{}", self.core, w),
            None => write!(f, "{}", self.core),
        }
    }
}

impl FromStr for EnneagramProfile {
    type Err = ValidationError;

    /// Parses `8`, `8w7`, or `8W7`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_ascii_lowercase();
        let parse_number = |part: &str| -> Result<EnneagramType, ValidationError> {
            let n: u8 = part
                .parse()
                .map_err(|_| ValidationError::invalid_format("enneagram", "expected a type number"))?;
            EnneagramType::new(n)
        };
        match trimmed.split_once('w') {
            Some((core, wing)) => Self::new(parse_number(core)?, Some(parse_number(wing)?)),
            None => Self::new(parse_number(&trimmed)?, None),
        }
    }
}

/// Reference data for one Enneagram type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnneagramEntry {
    pub number: u8,
    pub name: &'static str,
    pub core_motivation: &'static str,
    pub core_fear: &'static str,
    pub growth: u8,
    pub stress: u8,
    pub triad: Triad,
}

/// Looks up a type by number; out-of-range numbers yield `None`.
pub fn get(number: u8) -> Option<&'static EnneagramEntry> {
    EnneagramType::new(number).ok().map(|t| t.entry())
}

static ENNEAGRAM_REGISTRY: [EnneagramEntry; 9] = [
    EnneagramEntry {
        number: 1,
        name: "Reformer",
        core_motivation: "to be good, principled, and to improve things",
        core_fear: "being corrupt or wrong",
        growth: 7,
        stress: 4,
        triad: Triad::Gut,
    },
    EnneagramEntry {
        number: 2,
        name: "Helper",
        core_motivation: "to be loved and needed",
        core_fear: "being unwanted",
        growth: 4,
        stress: 8,
        triad: Triad::Heart,
    },
    EnneagramEntry {
        number: 3,
        name: "Achiever",
        core_motivation: "to be valuable and successful",
        core_fear: "being worthless",
        growth: 6,
        stress: 9,
        triad: Triad::Heart,
    },
    EnneagramEntry {
        number: 4,
        name: "Individualist",
        core_motivation: "to be authentic and understood",
        core_fear: "having no identity or significance",
        growth: 1,
        stress: 2,
        triad: Triad::Heart,
    },
    EnneagramEntry {
        number: 5,
        name: "Investigator",
        core_motivation: "to be capable and to understand",
        core_fear: "being useless or overwhelmed",
        growth: 8,
        stress: 7,
        triad: Triad::Head,
    },
    EnneagramEntry {
        number: 6,
        name: "Loyalist",
        core_motivation: "to have security and support",
        core_fear: "being without guidance",
        growth: 9,
        stress: 3,
        triad: Triad::Head,
    },
    EnneagramEntry {
        number: 7,
        name: "Enthusiast",
        core_motivation: "to be free and fulfilled",
        core_fear: "being trapped in pain or deprivation",
        growth: 5,
        stress: 1,
        triad: Triad::Head,
    },
    EnneagramEntry {
        number: 8,
        name: "Challenger",
        core_motivation: "to be strong and in control of their own path",
        core_fear: "being controlled or harmed",
        growth: 2,
        stress: 5,
        triad: Triad::Gut,
    },
    EnneagramEntry {
        number: 9,
        name: "Peacemaker",
        core_motivation: "to have inner and outer peace",
        core_fear: "loss and separation",
        growth: 3,
        stress: 6,
        triad: Triad::Gut,
    },
];
