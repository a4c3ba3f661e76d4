//! DISC styles, blend codes, and the 16-position DISC circle registry.
//!
//! The circle runs clockwise D → I → S → C. Only neighbours on the circle
//! blend; D+S and I+C are opposites and never form a blend code.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One of the four DISC styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DiscStyle {
    D,
    I,
    S,
    C,
}

impl DiscStyle {
    /// Circle order, which is also the canonical total order.
    pub const ALL: [DiscStyle; 4] = [DiscStyle::D, DiscStyle::I, DiscStyle::S, DiscStyle::C];

    pub fn letter(&self) -> char {
        match self {
            Self::D => 'D',
            Self::I => 'I',
            Self::S => 'S',
            Self::C => 'C',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'D' => Some(Self::D),
            'I' => Some(Self::I),
            'S' => Some(Self::S),
            'C' => Some(Self::C),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::D => "Dominance",
            Self::I => "Influence",
            Self::S => "Steadiness",
            Self::C => "Conscientiousness",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Next style clockwise on the circle.
    pub fn clockwise(&self) -> DiscStyle {
        Self::ALL[(self.index() + 1) % 4]
    }

    /// Neighbours on the circle blend; opposites do not.
    pub fn is_adjacent(&self, other: &DiscStyle) -> bool {
        self.clockwise() == *other || other.clockwise() == *self
    }

    pub fn is_opposite(&self, other: &DiscStyle) -> bool {
        (self.index() + 2) % 4 == other.index()
    }

    /// What energizes this style at work.
    pub fn motivator(&self) -> &'static str {
        match self {
            Self::D => "results, autonomy, and visible wins",
            Self::I => "recognition, energy, and shared enthusiasm",
            Self::S => "stability, trust, and a team that has each other's backs",
            Self::C => "accuracy, expertise, and doing it right the first time",
        }
    }

    /// How this style prefers to receive feedback.
    pub fn feedback_preference(&self) -> &'static str {
        match self {
            Self::D => "short, direct, and tied to outcomes",
            Self::I => "warm, in person, with the positives named first",
            Self::S => "private, gentle, and with time to absorb it",
            Self::C => "specific, evidence-based, and in writing when possible",
        }
    }
}

impl fmt::Display for DiscStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// How strongly the secondary style shows up in a blend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendKind {
    /// Single style, e.g. `D`.
    Pure,
    /// Primary with a secondary lean, e.g. `Di`.
    Lean,
    /// Both styles equally, e.g. `DI`.
    Equal,
}

/// A DISC position on the circle: pure style, lean blend, or equal blend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BlendCode {
    primary: DiscStyle,
    secondary: Option<DiscStyle>,
    kind: BlendKind,
}

impl BlendCode {
    pub fn pure(primary: DiscStyle) -> Self {
        Self {
            primary,
            secondary: None,
            kind: BlendKind::Pure,
        }
    }

    pub fn lean(primary: DiscStyle, secondary: DiscStyle) -> Self {
        Self {
            primary,
            secondary: Some(secondary),
            kind: BlendKind::Lean,
        }
    }

    /// Equal blend, normalized so the first letter precedes the second
    /// clockwise (`equal(I, D)` is `DI`, `equal(D, C)` is `CD`).
    pub fn equal(a: DiscStyle, b: DiscStyle) -> Self {
        let (primary, secondary) = if b.clockwise() == a { (b, a) } else { (a, b) };
        Self {
            primary,
            secondary: Some(secondary),
            kind: BlendKind::Equal,
        }
    }

    pub fn primary(&self) -> DiscStyle {
        self.primary
    }

    pub fn secondary(&self) -> Option<DiscStyle> {
        self.secondary
    }

    pub fn kind(&self) -> BlendKind {
        self.kind
    }

    /// Textual code: `D`, `Di`, or `DI`.
    pub fn code(&self) -> String {
        let mut code = String::with_capacity(2);
        code.push(self.primary.letter());
        if let Some(secondary) = self.secondary {
            match self.kind {
                BlendKind::Lean => code.push(secondary.letter().to_ascii_lowercase()),
                _ => code.push(secondary.letter()),
            }
        }
        code
    }

    /// Registry entry for this position, if the code names one.
    pub fn entry(&self) -> Option<&'static DiscBlendEntry> {
        get(&self.code())
    }

    pub fn is_registered(&self) -> bool {
        self.entry().is_some()
    }
}

impl fmt::Display for BlendCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

impl FromStr for BlendCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let unknown = || ValidationError::unknown_code("DISC", trimmed);
        let mut chars = trimmed.chars();
        let first = chars.next().ok_or_else(|| ValidationError::empty_field("disc"))?;
        if !first.is_ascii_uppercase() {
            return Err(unknown());
        }
        let primary = DiscStyle::from_letter(first).ok_or_else(unknown)?;
        let code = match (chars.next(), chars.next()) {
            (None, _) => BlendCode::pure(primary),
            (Some(second), None) => {
                let secondary = DiscStyle::from_letter(second).ok_or_else(unknown)?;
                if second.is_ascii_lowercase() {
                    BlendCode::lean(primary, secondary)
                } else {
                    // Equal blends are only accepted in canonical order.
                    let blend = BlendCode::equal(primary, secondary);
                    if blend.primary != primary {
                        return Err(unknown());
                    }
                    blend
                }
            }
            _ => return Err(unknown()),
        };
        if code.is_registered() {
            Ok(code)
        } else {
            Err(unknown())
        }
    }
}

impl TryFrom<String> for BlendCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BlendCode> for String {
    fn from(code: BlendCode) -> Self {
        code.code()
    }
}

/// Reference data for one of the 16 DISC circle positions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscBlendEntry {
    pub code: &'static str,
    pub name: &'static str,
    /// Clock angle in degrees (0 = 12 o'clock, clockwise).
    pub angle: f64,
    pub summary: &'static str,
}

/// All 16 positions in clockwise order starting at `DI` (12 o'clock).
pub static DISC_BLENDS: [DiscBlendEntry; 16] = [
    DiscBlendEntry {
        code: "DI",
        name: "Persuader",
        angle: 0.0,
        summary: "Pushes for results and rallies people behind them in equal measure.",
    },
    DiscBlendEntry {
        code: "Id",
        name: "Promoter",
        angle: 22.5,
        summary: "Leads with enthusiasm, backed by a competitive edge.",
    },
    DiscBlendEntry {
        code: "I",
        name: "Influencer",
        angle: 45.0,
        summary: "Energizes rooms, builds relationships, and sells ideas.",
    },
    DiscBlendEntry {
        code: "Is",
        name: "Encourager",
        angle: 67.5,
        summary: "Outgoing and upbeat with a strong pull toward harmony.",
    },
    DiscBlendEntry {
        code: "IS",
        name: "Counselor",
        angle: 90.0,
        summary: "Warm, approachable, and attentive to how people feel.",
    },
    DiscBlendEntry {
        code: "Si",
        name: "Harmonizer",
        angle: 112.5,
        summary: "Steady and supportive, with a friendly, social streak.",
    },
    DiscBlendEntry {
        code: "S",
        name: "Supporter",
        angle: 135.0,
        summary: "Patient, dependable, and loyal to the team.",
    },
    DiscBlendEntry {
        code: "Sc",
        name: "Steady Specialist",
        angle: 157.5,
        summary: "Consistent and careful; prefers proven methods.",
    },
    DiscBlendEntry {
        code: "SC",
        name: "Coordinator",
        angle: 180.0,
        summary: "Methodical, reliable, and focused on getting the details right.",
    },
    DiscBlendEntry {
        code: "Cs",
        name: "Planner",
        angle: 202.5,
        summary: "Analytical and thorough, with patience for process.",
    },
    DiscBlendEntry {
        code: "C",
        name: "Analyst",
        angle: 225.0,
        summary: "Precise, skeptical, and driven by quality and logic.",
    },
    DiscBlendEntry {
        code: "Cd",
        name: "Perfectionist",
        angle: 247.5,
        summary: "High standards, strong opinions, and a bias for correctness.",
    },
    DiscBlendEntry {
        code: "CD",
        name: "Strategist",
        angle: 270.0,
        summary: "Challenges assumptions and designs systems that win.",
    },
    DiscBlendEntry {
        code: "Dc",
        name: "Achiever",
        angle: 292.5,
        summary: "Decisive and demanding, with a sharp eye for flaws.",
    },
    DiscBlendEntry {
        code: "D",
        name: "Director",
        angle: 315.0,
        summary: "Direct, fast-moving, and focused on the bottom line.",
    },
    DiscBlendEntry {
        code: "Di",
        name: "Initiator",
        angle: 337.5,
        summary: "Bold and results-first, with persuasive energy.",
    },
];

static DISC_INDEX: Lazy<HashMap<&'static str, &'static DiscBlendEntry>> =
    Lazy::new(|| DISC_BLENDS.iter().map(|entry| (entry.code, entry)).collect());

/// Looks up a circle position by exact code (case-sensitive); unknown codes yield `None`.
pub fn get(code: &str) -> Option<&'static DiscBlendEntry> {
    DISC_INDEX.get(code).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_sixteen_distinct_positions() {
        assert_eq!(DISC_BLENDS.len(), 16);
        assert_eq!(DISC_INDEX.len(), 16);
        let mut angles: Vec<f64> = DISC_BLENDS.iter().map(|e| e.angle).collect();
        angles.dedup();
        assert_eq!(angles.len(), 16);
    }

    #[test]
    fn every_registered_code_parses_back() {
        for entry in DISC_BLENDS.iter() {
            let code: BlendCode = entry.code.parse().unwrap();
            assert_eq!(code.code(), entry.code);
        }
    }

    #[test]
    fn adjacency_follows_the_circle() {
        assert!(DiscStyle::D.is_adjacent(&DiscStyle::I));
        assert!(DiscStyle::C.is_adjacent(&DiscStyle::D));
        assert!(!DiscStyle::D.is_adjacent(&DiscStyle::S));
        assert!(DiscStyle::D.is_opposite(&DiscStyle::S));
        assert!(DiscStyle::I.is_opposite(&DiscStyle::C));
        assert!(!DiscStyle::I.is_opposite(&DiscStyle::S));
    }

    #[test]
    fn equal_blend_normalizes_to_clockwise_order() {
        assert_eq!(BlendCode::equal(DiscStyle::I, DiscStyle::D).code(), "DI");
        assert_eq!(BlendCode::equal(DiscStyle::D, DiscStyle::C).code(), "CD");
        assert_eq!(BlendCode::equal(DiscStyle::S, DiscStyle::I).code(), "IS");
    }

    #[test]
    fn opposite_blends_are_not_registered() {
        assert!(!BlendCode::lean(DiscStyle::D, DiscStyle::S).is_registered());
        assert!(!BlendCode::equal(DiscStyle::I, DiscStyle::C).is_registered());
        assert!("Ds".parse::<BlendCode>().is_err());
        assert!("IC".parse::<BlendCode>().is_err());
    }

    #[test]
    fn parse_rejects_noncanonical_and_malformed_codes() {
        assert!("ID".parse::<BlendCode>().is_err());
        assert!("d".parse::<BlendCode>().is_err());
        assert!("DIS".parse::<BlendCode>().is_err());
        assert!("X".parse::<BlendCode>().is_err());
        assert!("".parse::<BlendCode>().is_err());
    }

    #[test]
    fn lean_code_has_lowercase_secondary() {
        let code: BlendCode = "Sc".parse().unwrap();
        assert_eq!(code.primary(), DiscStyle::S);
        assert_eq!(code.secondary(), Some(DiscStyle::C));
        assert_eq!(code.kind(), BlendKind::Lean);
    }

    #[test]
    fn blend_code_serializes_as_string() {
        let code = BlendCode::lean(DiscStyle::D, DiscStyle::I);
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"Di\"");
        let parsed: BlendCode = serde_json::from_str("\"CD\"").unwrap();
        assert_eq!(parsed, BlendCode::equal(DiscStyle::C, DiscStyle::D));
        assert!(serde_json::from_str::<BlendCode>("\"DS\"").is_err());
    }
}
