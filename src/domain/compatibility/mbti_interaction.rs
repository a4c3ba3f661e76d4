//! MBTI interaction text generator.
//!
//! Builds five short paragraphs about how two types work together. Each
//! paragraph is a handful of conditional sentences driven by letter
//! matches, the relationship between dominant functions, and whether one
//! type's dominant function lands on the other's inferior function.

use serde::Serialize;

use super::fragment::{join_fragments, Fragment};
use super::pairing::{PairAlignment, PairingResult};
use crate::domain::frameworks::{CognitiveFunction, Dichotomy, MbtiType};

/// Generated narrative for a pair of types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MbtiInteraction {
    pub communication: String,
    pub decision_making: String,
    pub leadership: String,
    pub conflict: String,
    pub delegation: String,
}

/// One dichotomy compared between two types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DichotomyComparison {
    pub dichotomy: Dichotomy,
    #[serde(flatten)]
    pub result: PairingResult,
}

/// Which of the two types carries the left or right letter on an axis.
struct Split {
    left: MbtiType,
    right: MbtiType,
}

fn split(a: MbtiType, b: MbtiType, dichotomy: Dichotomy) -> Split {
    if a.letter(dichotomy) == dichotomy.poles().0 {
        Split { left: a, right: b }
    } else {
        Split { left: b, right: a }
    }
}

fn dominant(t: MbtiType) -> CognitiveFunction {
    t.entry().dominant()
}

fn inferior(t: MbtiType) -> CognitiveFunction {
    t.entry().inferior()
}

/// Generates all five interaction paragraphs for `a` working with `b`.
pub fn generate_interaction(a: MbtiType, b: MbtiType) -> MbtiInteraction {
    MbtiInteraction {
        communication: communication(a, b),
        decision_making: decision_making(a, b),
        leadership: leadership(a, b),
        conflict: conflict(a, b),
        delegation: delegation(a, b),
    }
}

/// True when `from`'s dominant function is `to`'s inferior function.
pub fn dominant_hits_inferior(from: MbtiType, to: MbtiType) -> bool {
    dominant(from) == inferior(to)
}

pub fn communication(a: MbtiType, b: MbtiType) -> String {
    let mut fragments = Vec::new();

    fragments.push(Fragment::new(
        0,
        if a.shares_letter(&b, Dichotomy::EnergyFocus) {
            if a.letter(Dichotomy::EnergyFocus) == 'E' {
                format!(
                    "{} and {} both think out loud, so conversations move fast; leave pauses so quieter ideas are not talked past.",
                    a, b
                )
            } else {
                format!(
                    "{} and {} both process internally; send agendas ahead and expect the best answers after a pause.",
                    a, b
                )
            }
        } else {
            let s = split(a, b, Dichotomy::EnergyFocus);
            format!(
                "{} thinks out loud while {} thinks before speaking; {} should leave gaps, and {} should share half-formed thoughts sooner.",
                s.left, s.right, s.left, s.right
            )
        },
    ));

    fragments.push(Fragment::new(
        1,
        if a.shares_letter(&b, Dichotomy::Perception) {
            if a.letter(Dichotomy::Perception) == 'N' {
                "You both speak in concepts and possibilities, so big-picture framing lands easily.".to_string()
            } else {
                "You both prefer concrete specifics and examples over abstractions.".to_string()
            }
        } else {
            let s = split(a, b, Dichotomy::Perception);
            format!(
                "{} leads with the big picture while {} wants concrete details; pair every idea with an example.",
                s.right, s.left
            )
        },
    ));

    let (da, db) = (dominant(a), dominant(b));
    if da == db {
        fragments.push(Fragment::new(
            2,
            format!(
                "Sharing a dominant {} means you reach for the same lens first.",
                da
            ),
        ));
    } else if da.is_attitude_opposite_of(&db) {
        fragments.push(Fragment::new(
            2,
            format!(
                "Your dominant functions ({} and {}) use the same process in opposite directions, which makes for a sharp, complementary dialogue.",
                da, db
            ),
        ));
    }

    join_fragments(fragments)
}

pub fn decision_making(a: MbtiType, b: MbtiType) -> String {
    let mut fragments = Vec::new();

    fragments.push(Fragment::new(
        0,
        if a.shares_letter(&b, Dichotomy::Judgment) {
            if a.letter(Dichotomy::Judgment) == 'T' {
                "Both of you weigh decisions on logic and measurable outcomes.".to_string()
            } else {
                "Both of you weigh decisions on values and how people will be affected.".to_string()
            }
        } else {
            let s = split(a, b, Dichotomy::Judgment);
            format!(
                "{} anchors on logic and outcomes while {} anchors on values and people; name both criteria before choosing.",
                s.left, s.right
            )
        },
    ));

    fragments.push(Fragment::new(
        1,
        if a.shares_letter(&b, Dichotomy::Lifestyle) {
            if a.letter(Dichotomy::Lifestyle) == 'J' {
                "You both like to close decisions quickly; guard against locking in before the options are explored.".to_string()
            } else {
                "You both like to keep options open; set a decision deadline so things do not drift.".to_string()
            }
        } else {
            let s = split(a, b, Dichotomy::Lifestyle);
            format!(
                "{} wants closure while {} wants more options; agree up front on when the decision is final.",
                s.left, s.right
            )
        },
    ));

    if !a.shares_letter(&b, Dichotomy::Perception) {
        let s = split(a, b, Dichotomy::Perception);
        fragments.push(Fragment::new(
            2,
            format!(
                "Expect {} to test the plan against what has worked before and {} to test it against what could be.",
                s.left, s.right
            ),
        ));
    }

    join_fragments(fragments)
}

pub fn leadership(a: MbtiType, b: MbtiType) -> String {
    let mut fragments = Vec::new();

    fragments.push(Fragment::new(
        0,
        if a.shares_letter(&b, Dichotomy::EnergyFocus) {
            if a.letter(Dichotomy::EnergyFocus) == 'E' {
                "Two visible leaders: divide the stage so you are not competing for the same room.".to_string()
            } else {
                "Two quiet leaders: decide early who carries the external messaging.".to_string()
            }
        } else {
            let s = split(a, b, Dichotomy::EnergyFocus);
            format!(
                "{} is likely the public face while {} shapes direction behind the scenes.",
                s.left, s.right
            )
        },
    ));

    fragments.push(Fragment::new(
        1,
        if a.shares_letter(&b, Dichotomy::Lifestyle) {
            if a.letter(Dichotomy::Lifestyle) == 'J' {
                "Structured leadership styles align on plans, milestones, and accountability.".to_string()
            } else {
                "Adaptive leadership styles thrive in ambiguity but need someone to own follow-through.".to_string()
            }
        } else {
            let s = split(a, b, Dichotomy::Lifestyle);
            format!(
                "{} brings structure and {} brings adaptability; let each lead the phase that fits.",
                s.left, s.right
            )
        },
    ));

    if dominant(a) == dominant(b) {
        fragments.push(Fragment::new(
            2,
            format!(
                "With the same dominant {}, you may both want the lead on the same kinds of problems.",
                dominant(a)
            ),
        ));
    }

    join_fragments(fragments)
}

pub fn conflict(a: MbtiType, b: MbtiType) -> String {
    let mut fragments = Vec::new();

    fragments.push(Fragment::new(
        0,
        if a.shares_letter(&b, Dichotomy::Judgment) {
            if a.letter(Dichotomy::Judgment) == 'T' {
                "Disagreements stay about ideas; blunt debate can still bruise.".to_string()
            } else {
                "You both feel conflict personally and may avoid it; schedule the hard conversation instead of waiting.".to_string()
            }
        } else {
            let s = split(a, b, Dichotomy::Judgment);
            format!(
                "{} may read as cold to {}, and {} may read as overly personal to {}; acknowledge the feeling, then the facts.",
                s.left, s.right, s.right, s.left
            )
        },
    ));

    let mut triggered = false;
    for (priority, (from, to)) in [(a, b), (b, a)].into_iter().enumerate() {
        if from != to && dominant_hits_inferior(from, to) {
            triggered = true;
            fragments.push(Fragment::new(
                1 + priority as u8,
                format!(
                    "{}'s dominant {} is {}'s inferior function, a likely friction point: under stress {} can feel steamrolled by exactly what {} does best.",
                    from,
                    dominant(from),
                    to,
                    to,
                    from
                ),
            ));
        }
    }

    if !triggered {
        fragments.push(Fragment::new(
            3,
            "Neither dominant function hits the other's inferior, so stress flare-ups are less likely to come from style alone.",
        ));
    }

    join_fragments(fragments)
}

pub fn delegation(a: MbtiType, b: MbtiType) -> String {
    let mut fragments = Vec::new();

    fragments.push(Fragment::new(
        0,
        if a.shares_letter(&b, Dichotomy::Lifestyle) {
            if a.letter(Dichotomy::Lifestyle) == 'J' {
                "Hand off with clear deadlines and you will both deliver.".to_string()
            } else {
                "Hand off outcomes rather than steps, and agree on checkpoints.".to_string()
            }
        } else {
            let s = split(a, b, Dichotomy::Lifestyle);
            format!(
                "When {} delegates to {}, fix the deadline and let the method flex; when {} delegates to {}, give more structure than feels necessary.",
                s.left, s.right, s.right, s.left
            )
        },
    ));

    fragments.push(Fragment::new(
        1,
        if a.shares_letter(&b, Dichotomy::Perception) {
            if a.letter(Dichotomy::Perception) == 'S' {
                "Concrete task lists and examples work for both of you.".to_string()
            } else {
                "Describe the goal and the why; you will both fill in the how.".to_string()
            }
        } else {
            let s = split(a, b, Dichotomy::Perception);
            format!(
                "{} should include specifics when handing work to {}; {} should share the purpose when handing work to {}.",
                s.right, s.left, s.left, s.right
            )
        },
    ));

    join_fragments(fragments)
}

/// Compares the four letters: same letter is matched, differing E/I or J/P
/// is complementary, differing S/N or T/F is partial.
pub fn compare_dichotomies(a: MbtiType, b: MbtiType) -> Vec<DichotomyComparison> {
    Dichotomy::ALL
        .iter()
        .map(|d| {
            let (la, lb) = (a.letter(*d), b.letter(*d));
            let result = if la == lb {
                PairingResult::new(
                    PairAlignment::Matched,
                    format!("Both {} on {}.", la, d.label()),
                )
            } else {
                match d {
                    Dichotomy::EnergyFocus | Dichotomy::Lifestyle => PairingResult::new(
                        PairAlignment::Complementary,
                        format!("{} and {} balance each other on {}.", la, lb, d.label()),
                    ),
                    Dichotomy::Perception | Dichotomy::Judgment => PairingResult::new(
                        PairAlignment::Partial,
                        format!(
                            "{} and {} differ on {}; expect to translate between perspectives.",
                            la,
                            lb,
                            d.label()
                        ),
                    ),
                }
            };
            DichotomyComparison {
                dichotomy: *d,
                result,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(code: &str) -> MbtiType {
        code.parse().unwrap()
    }

    fn sentence_count(text: &str) -> usize {
        text.matches(". ").count() + 1
    }

    #[test]
    fn every_field_has_two_to_four_sentences() {
        for a in MbtiType::ALL {
            for b in MbtiType::ALL {
                let i = generate_interaction(a, b);
                for text in [
                    &i.communication,
                    &i.decision_making,
                    &i.leadership,
                    &i.conflict,
                    &i.delegation,
                ] {
                    let n = sentence_count(text);
                    assert!((2..=4).contains(&n), "{} vs {}: {} sentences in {:?}", a, b, n, text);
                }
            }
        }
    }

    #[test]
    fn communication_names_the_extravert_first() {
        let text = communication(t("INTP"), t("ENTJ"));
        assert!(text.starts_with("ENTJ thinks out loud while INTP thinks before speaking"));
        assert!(text.contains("same process in opposite directions"));
    }

    #[test]
    fn identical_dominants_are_called_out() {
        let text = communication(t("ENTJ"), t("ESTJ"));
        assert!(text.contains("Sharing a dominant Te"));
        let lead = leadership(t("ENTJ"), t("ESTJ"));
        assert!(lead.contains("same dominant Te"));
    }

    #[test]
    fn inferior_trigger_is_flagged_as_friction() {
        // ENTJ dominant Te is INFP's inferior
        assert!(dominant_hits_inferior(t("ENTJ"), t("INFP")));
        let text = conflict(t("ENTJ"), t("INFP"));
        assert!(text.contains("ENTJ's dominant Te is INFP's inferior function"));
        assert!(!text.contains("Neither dominant function"));
    }

    #[test]
    fn mutual_inferior_triggers_are_both_listed() {
        // ENTJ (Te...Fi) and ISFP (Fi...Te) hit each other
        let text = conflict(t("ENTJ"), t("ISFP"));
        assert!(text.contains("ENTJ's dominant Te is ISFP's inferior"));
        assert!(text.contains("ISFP's dominant Fi is ENTJ's inferior"));
    }

    #[test]
    fn no_trigger_gets_reassurance() {
        let text = conflict(t("ENTJ"), t("INTJ"));
        assert!(text.contains("Neither dominant function"));
    }

    #[test]
    fn decision_making_mentions_perception_split_only_on_mismatch() {
        assert!(decision_making(t("ESTJ"), t("ENTJ")).contains("Expect ESTJ to test the plan"));
        assert!(!decision_making(t("INTJ"), t("ENTJ")).contains("Expect"));
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(
            generate_interaction(t("ENFP"), t("ISTJ")),
            generate_interaction(t("ENFP"), t("ISTJ"))
        );
    }

    #[test]
    fn dichotomy_comparison_classifies_each_axis() {
        let results = compare_dichotomies(t("ENTJ"), t("ISFJ"));
        let alignments: Vec<PairAlignment> = results.iter().map(|r| r.result.alignment).collect();
        assert_eq!(
            alignments,
            vec![
                PairAlignment::Complementary,
                PairAlignment::Partial,
                PairAlignment::Partial,
                PairAlignment::Matched
            ]
        );
    }
}
