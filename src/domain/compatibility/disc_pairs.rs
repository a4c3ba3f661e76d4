//! DISC pairing table and communication alignment.
//!
//! Ten canned entries cover every unordered pair of primary styles. Lookups
//! normalize the pair first, so `disc_pairing(D, S)` and `disc_pairing(S, D)`
//! return the same entry.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::pairing::{AlignmentLevel, CanonicalPair, PairProfile};
use crate::domain::frameworks::{BlendCode, DiscStyle};

static DISC_PAIRS: Lazy<HashMap<CanonicalPair<DiscStyle>, PairProfile>> = Lazy::new(|| {
    use DiscStyle::*;
    let mut m = HashMap::new();

    m.insert(
        CanonicalPair::new(D, D),
        PairProfile {
            chemistry: "Two drivers: fast, decisive, and prone to collisions over who is in charge.",
            strengths: &[
                "Decisions happen quickly",
                "Both push hard toward measurable results",
                "Directness is welcomed, not resented",
            ],
            friction: &[
                "Power struggles when ownership is unclear",
                "Neither naturally slows down to check details",
            ],
            communication_tips: &[
                "Lead with the bottom line",
                "Disagree openly and move on",
            ],
            delegation_tips: &[
                "Split ownership cleanly by outcome",
                "Agree who has the final call before starting",
            ],
        },
    );

    m.insert(
        CanonicalPair::new(D, I),
        PairProfile {
            chemistry: "Results meet enthusiasm: a high-energy pairing that moves fast and sells well.",
            strengths: &[
                "D sets direction while I rallies people behind it",
                "Both prefer action over analysis",
            ],
            friction: &[
                "D can read I as unfocused",
                "I can read D as dismissive of relationships",
            ],
            communication_tips: &[
                "D: give a moment for the human side before the task",
                "I: bring the headline first, the story second",
            ],
            delegation_tips: &[
                "Hand I the stakeholder-facing work",
                "Write down commitments so enthusiasm turns into follow-through",
            ],
        },
    );

    m.insert(
        CanonicalPair::new(D, S),
        PairProfile {
            chemistry: "Opposites on the circle: urgency meets steadiness, which stretches both.",
            strengths: &[
                "S provides the consistency that D's initiatives need",
                "D helps S move past hesitation on hard calls",
            ],
            friction: &[
                "D's pace and bluntness can feel like pressure to S",
                "S's need for process can feel like drag to D",
            ],
            communication_tips: &[
                "D: slow down, ask, and wait for the answer",
                "S: state your concern plainly rather than going quiet",
            ],
            delegation_tips: &[
                "Give S clear scope and time to plan",
                "Warn S early about changes",
            ],
        },
    );

    m.insert(
        CanonicalPair::new(D, C),
        PairProfile {
            chemistry: "Task-focused and logical: speed meets precision.",
            strengths: &[
                "Both keep conversations on the work",
                "C catches the risks D moves past",
            ],
            friction: &[
                "D wants an answer now while C wants to be right",
                "Criticism can feel personal in both directions",
            ],
            communication_tips: &[
                "D: bring data, not just conviction",
                "C: summarize the recommendation before the analysis",
            ],
            delegation_tips: &[
                "Define the quality bar explicitly",
                "Agree on a deadline that leaves room for checking",
            ],
        },
    );

    m.insert(
        CanonicalPair::new(I, I),
        PairProfile {
            chemistry: "Two connectors: lots of ideas, energy, and fun.",
            strengths: &[
                "Brainstorming and networking come naturally",
                "Morale stays high",
            ],
            friction: &[
                "Follow-through and detail fall through the cracks",
                "Meetings run long",
            ],
            communication_tips: &[
                "End every conversation with a named owner and date",
            ],
            delegation_tips: &[
                "Bring in a steadier partner for execution",
                "Use lightweight check-ins rather than heavy process",
            ],
        },
    );

    m.insert(
        CanonicalPair::new(I, S),
        PairProfile {
            chemistry: "Warm and people-centred: both care about the team.",
            strengths: &[
                "Trust builds quickly",
                "I brings energy while S brings reliability",
            ],
            friction: &[
                "I's spontaneity can unsettle S",
                "Both may dodge hard conversations",
            ],
            communication_tips: &[
                "I: give S time to respond",
                "S: say when a plan change is a problem",
            ],
            delegation_tips: &[
                "Let S own the process and I own the relationships",
            ],
        },
    );

    m.insert(
        CanonicalPair::new(I, C),
        PairProfile {
            chemistry: "Opposites on the circle: optimism meets scepticism.",
            strengths: &[
                "I sells the idea and C makes sure it holds up",
                "Balanced risk-taking when each listens",
            ],
            friction: &[
                "C's questions can deflate I",
                "I's loose facts can frustrate C",
            ],
            communication_tips: &[
                "I: bring specifics and sources",
                "C: acknowledge the idea before critiquing it",
            ],
            delegation_tips: &[
                "Give C the verification work and I the outreach",
                "Put agreements in writing",
            ],
        },
    );

    m.insert(
        CanonicalPair::new(S, S),
        PairProfile {
            chemistry: "Calm, loyal, and dependable together.",
            strengths: &[
                "Consistent, high-trust collaboration",
                "Few surprises",
            ],
            friction: &[
                "Change is resisted",
                "Conflict goes unspoken",
            ],
            communication_tips: &[
                "Check in one on one",
                "Name tensions early and kindly",
            ],
            delegation_tips: &[
                "Plan changes well in advance",
                "Pair the work with a clear long-term reason",
            ],
        },
    );

    m.insert(
        CanonicalPair::new(S, C),
        PairProfile {
            chemistry: "Careful and methodical: quality over speed.",
            strengths: &[
                "Thorough, well-documented work",
                "Low drama",
            ],
            friction: &[
                "Decisions can stall",
                "Both can wait for the other to speak up",
            ],
            communication_tips: &[
                "Use written agendas",
                "Set decision dates up front",
            ],
            delegation_tips: &[
                "Give complete information and clear standards",
            ],
        },
    );

    m.insert(
        CanonicalPair::new(C, C),
        PairProfile {
            chemistry: "Two analysts: rigorous, precise, and sometimes stuck.",
            strengths: &[
                "Exceptional accuracy",
                "Shared respect for evidence",
            ],
            friction: &[
                "Analysis paralysis",
                "Debates over details that do not change the outcome",
            ],
            communication_tips: &[
                "Agree what good enough means before starting",
            ],
            delegation_tips: &[
                "Timebox research phases",
                "Define acceptance criteria in writing",
            ],
        },
    );

    m
});

/// Pair entry for two primary styles, in either order.
pub fn disc_pairing(a: DiscStyle, b: DiscStyle) -> Option<&'static PairProfile> {
    DISC_PAIRS.get(&CanonicalPair::new(a, b))
}

/// Pair entry for two codes. Blend codes use their primary letter; unknown
/// codes yield `None`.
pub fn disc_pairing_codes(a: &str, b: &str) -> Option<&'static PairProfile> {
    let a = a.parse::<BlendCode>().ok()?;
    let b = b.parse::<BlendCode>().ok()?;
    disc_pairing(a.primary(), b.primary())
}

/// How easily the owner's style communicates with the visitor's style.
pub fn communication_alignment(owner: DiscStyle, visitor: DiscStyle) -> AlignmentLevel {
    use AlignmentLevel::*;
    use DiscStyle::*;
    match (owner, visitor) {
        (D, D) => Moderate,
        (D, I) => High,
        (D, S) => Low,
        (D, C) => Moderate,
        (I, D) => High,
        (I, I) => Moderate,
        (I, S) => High,
        (I, C) => Low,
        (S, D) => Low,
        (S, I) => High,
        (S, S) => High,
        (S, C) => Moderate,
        (C, D) => Moderate,
        (C, I) => Low,
        (C, S) => Moderate,
        (C, C) => High,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_all_ten_unordered_pairs() {
        assert_eq!(DISC_PAIRS.len(), 10);
        for a in DiscStyle::ALL {
            for b in DiscStyle::ALL {
                assert!(disc_pairing(a, b).is_some(), "{}{}", a, b);
            }
        }
    }

    #[test]
    fn pairing_is_order_independent() {
        for a in DiscStyle::ALL {
            for b in DiscStyle::ALL {
                assert_eq!(disc_pairing(a, b), disc_pairing(b, a));
            }
        }
    }

    #[test]
    fn codes_use_primary_letter() {
        assert_eq!(
            disc_pairing_codes("Di", "S"),
            disc_pairing(DiscStyle::D, DiscStyle::S)
        );
        assert_eq!(
            disc_pairing_codes("SC", "I"),
            disc_pairing(DiscStyle::I, DiscStyle::S)
        );
    }

    #[test]
    fn unknown_codes_mean_no_data() {
        assert!(disc_pairing_codes("X", "D").is_none());
        assert!(disc_pairing_codes("DS", "D").is_none());
        assert!(disc_pairing_codes("", "").is_none());
    }

    #[test]
    fn owner_d_alignment_row() {
        use DiscStyle::*;
        assert_eq!(communication_alignment(D, D), AlignmentLevel::Moderate);
        assert_eq!(communication_alignment(D, I), AlignmentLevel::High);
        assert_eq!(communication_alignment(D, S), AlignmentLevel::Low);
        assert_eq!(communication_alignment(D, C), AlignmentLevel::Moderate);
    }

    #[test]
    fn every_entry_has_content() {
        for profile in DISC_PAIRS.values() {
            assert!(!profile.chemistry.is_empty());
            assert!(!profile.strengths.is_empty());
            assert!(!profile.friction.is_empty());
            assert!(!profile.communication_tips.is_empty());
            assert!(!profile.delegation_tips.is_empty());
        }
    }
}
