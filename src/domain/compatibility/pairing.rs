//! Shared pairing types: canonical unordered keys and pairing results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An unordered pair stored with the lower element first.
///
/// Pair tables are keyed by this type so `(a, b)` and `(b, a)` hit the
/// same entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalPair<T> {
    low: T,
    high: T,
}

impl<T: Ord + Copy> CanonicalPair<T> {
    pub fn new(a: T, b: T) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    pub fn low(&self) -> T {
        self.low
    }

    pub fn high(&self) -> T {
        self.high
    }

    pub fn is_same(&self) -> bool {
        self.low == self.high
    }
}

/// How two people line up on one compared dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairAlignment {
    Matched,
    Complementary,
    Partial,
}

/// Coarse alignment between the owner and a visitor on an insight dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentLevel {
    High,
    Moderate,
    Low,
}

impl fmt::Display for AlignmentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Moderate => write!(f, "moderate"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// Result of comparing one dimension between two profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairingResult {
    pub alignment: PairAlignment,
    pub note: String,
}

impl PairingResult {
    pub fn new(alignment: PairAlignment, note: impl Into<String>) -> Self {
        Self {
            alignment,
            note: note.into(),
        }
    }
}

/// Canned description of how two types work together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairProfile {
    pub chemistry: &'static str,
    pub strengths: &'static [&'static str],
    pub friction: &'static [&'static str],
    pub communication_tips: &'static [&'static str],
    pub delegation_tips: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_pair_ignores_argument_order() {
        assert_eq!(CanonicalPair::new(7, 2), CanonicalPair::new(2, 7));
        let pair = CanonicalPair::new('S', 'D');
        assert_eq!(pair.low(), 'D');
        assert_eq!(pair.high(), 'S');
    }

    #[test]
    fn canonical_pair_detects_same_elements() {
        assert!(CanonicalPair::new(4, 4).is_same());
        assert!(!CanonicalPair::new(4, 5).is_same());
    }

    #[test]
    fn alignment_serializes_snake_case() {
        let result = PairingResult::new(PairAlignment::Complementary, "Balance each other");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["alignment"], "complementary");
        assert_eq!(json["note"], "Balance each other");
    }
}
