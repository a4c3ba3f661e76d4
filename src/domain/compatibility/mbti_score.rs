//! MBTI Compatibility Scorer - a 0-100 score and tier for two types.
//!
//! # Scoring
//!
//! Starts at 50, then adds per-axis adjustments, a same-quadra bonus, a
//! bonus when the dominant functions are attitude-opposites (`Te`/`Ti`), and
//! a penalty when one stack is the exact reverse of the other. The S/N axis
//! carries the heaviest weight and is the only axis penalized on mismatch.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::frameworks::{CognitiveFunction, Dichotomy, MbtiType};

pub const BASELINE: i32 = 50;
pub const PERCEPTION_MATCH: i32 = 12;
pub const PERCEPTION_MISMATCH: i32 = -5;
pub const JUDGMENT_MATCH: i32 = 8;
pub const ENERGY_MATCH: i32 = 3;
pub const LIFESTYLE_MATCH: i32 = 3;
pub const SAME_QUADRA: i32 = 8;
pub const OPPOSITE_ATTITUDE_DOMINANTS: i32 = 10;
pub const SHADOW_STACK: i32 = -8;

/// Coarse compatibility band. Ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CompatibilityTier {
    Challenging,
    Moderate,
    Good,
    Excellent,
}

impl CompatibilityTier {
    /// `>= 80` Excellent, `>= 65` Good, `>= 50` Moderate, else Challenging.
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => Self::Excellent,
            65..=79 => Self::Good,
            50..=64 => Self::Moderate,
            _ => Self::Challenging,
        }
    }
}

impl fmt::Display for CompatibilityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Challenging => "Challenging",
            Self::Moderate => "Moderate",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        };
        f.write_str(s)
    }
}

/// Score, tier, and the cognitive functions both types use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityScore {
    pub score: u8,
    pub tier: CompatibilityTier,
    pub shared_functions: Vec<CognitiveFunction>,
}

impl CompatibilityScore {
    /// Neutral result used when either code is unknown.
    pub fn neutral() -> Self {
        Self {
            score: BASELINE as u8,
            tier: CompatibilityTier::Moderate,
            shared_functions: Vec::new(),
        }
    }
}

/// Stateless MBTI compatibility scorer.
pub struct MbtiCompatibility;

impl MbtiCompatibility {
    pub fn score(a: MbtiType, b: MbtiType) -> CompatibilityScore {
        let (ea, eb) = (a.entry(), b.entry());
        let mut score = BASELINE;

        score += if a.shares_letter(&b, Dichotomy::Perception) {
            PERCEPTION_MATCH
        } else {
            PERCEPTION_MISMATCH
        };
        if a.shares_letter(&b, Dichotomy::Judgment) {
            score += JUDGMENT_MATCH;
        }
        if a.shares_letter(&b, Dichotomy::EnergyFocus) {
            score += ENERGY_MATCH;
        }
        if a.shares_letter(&b, Dichotomy::Lifestyle) {
            score += LIFESTYLE_MATCH;
        }
        if ea.quadra == eb.quadra {
            score += SAME_QUADRA;
        }
        if ea.dominant().is_attitude_opposite_of(&eb.dominant()) {
            score += OPPOSITE_ATTITUDE_DOMINANTS;
        }
        if Self::is_shadow_pair(a, b) {
            score += SHADOW_STACK;
        }

        let score = score.clamp(0, 100) as u8;
        CompatibilityScore {
            score,
            tier: CompatibilityTier::from_score(score),
            shared_functions: Self::shared_functions(a, b),
        }
    }

    /// Scores two raw codes; unknown codes get the neutral result.
    pub fn score_codes(a: &str, b: &str) -> CompatibilityScore {
        match (a.parse::<MbtiType>(), b.parse::<MbtiType>()) {
            (Ok(a), Ok(b)) => Self::score(a, b),
            _ => CompatibilityScore::neutral(),
        }
    }

    /// One stack is the other read backwards (e.g. ENTJ Te-Ni-Se-Fi / ISFP Fi-Se-Ni-Te).
    pub fn is_shadow_pair(a: MbtiType, b: MbtiType) -> bool {
        let mut reversed = a.entry().stack;
        reversed.reverse();
        reversed == b.entry().stack
    }

    /// Functions present in both stacks, in `a`'s stack order.
    pub fn shared_functions(a: MbtiType, b: MbtiType) -> Vec<CognitiveFunction> {
        let other = b.entry().stack;
        a.entry()
            .stack
            .iter()
            .copied()
            .filter(|f| other.contains(f))
            .collect()
    }
}
