//! ProScan trait, energy, and logic-style interactions.

use serde::Serialize;

use super::pairing::{PairAlignment, PairingResult};
use crate::domain::frameworks::{EnergyStyle, Level, LogicStyle, ProScanProfile, ProScanTrait};

/// Interaction note for one trait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraitInteraction {
    #[serde(rename = "trait")]
    pub trait_: ProScanTrait,
    pub visitor: Level,
    pub owner: Level,
    pub note: &'static str,
}

/// Unordered pair of trait levels; one variant per distinct combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LevelPair {
    HighHigh,
    HighMid,
    HighLow,
    MidMid,
    MidLow,
    LowLow,
}

impl LevelPair {
    pub fn new(a: Level, b: Level) -> Self {
        use Level::*;
        match (a, b) {
            (High, High) => Self::HighHigh,
            (High, Mid) | (Mid, High) => Self::HighMid,
            (High, Low) | (Low, High) => Self::HighLow,
            (Mid, Mid) => Self::MidMid,
            (Mid, Low) | (Low, Mid) => Self::MidLow,
            (Low, Low) => Self::LowLow,
        }
    }
}

/// Canned note for two levels of a trait, in either order.
pub fn trait_interaction(t: ProScanTrait, a: Level, b: Level) -> &'static str {
    use LevelPair::*;
    match (t, LevelPair::new(a, b)) {
        (ProScanTrait::Dominance, HighHigh) => "Two strong drivers: agree on who leads what, or you will compete for control.",
        (ProScanTrait::Dominance, HighMid) => "One leads firmly and the other asserts when it counts; a workable balance.",
        (ProScanTrait::Dominance, HighLow) => "One takes charge and the other prefers consensus; make sure the quieter voice is asked.",
        (ProScanTrait::Dominance, MidMid) => "You both assert when needed and collaborate otherwise.",
        (ProScanTrait::Dominance, MidLow) => "A cooperative pair; someone still needs to own the final call.",
        (ProScanTrait::Dominance, LowLow) => "Both prefer consensus; decisions can stall without an explicit decider.",
        (ProScanTrait::Extroversion, HighHigh) => "Lots of talk and energy; capture decisions in writing.",
        (ProScanTrait::Extroversion, HighMid) => "One thinks out loud and the other engages comfortably; conversations flow.",
        (ProScanTrait::Extroversion, HighLow) => "One is expressive and the other reserved; leave room for written input.",
        (ProScanTrait::Extroversion, MidMid) => "Balanced social energy on both sides.",
        (ProScanTrait::Extroversion, MidLow) => "Mostly task-focused conversations; make time for the relationship too.",
        (ProScanTrait::Extroversion, LowLow) => "Both reflective; asynchronous communication suits you.",
        (ProScanTrait::Pace, HighHigh) => "Both patient and steady; watch for slow responses to urgent change.",
        (ProScanTrait::Pace, HighMid) => "One steady, one adaptable; the pace is comfortable for both.",
        (ProScanTrait::Pace, HighLow) => "One wants steady focus and the other juggles many things at once; agree on priorities.",
        (ProScanTrait::Pace, MidMid) => "You share a balanced sense of urgency.",
        (ProScanTrait::Pace, MidLow) => "One moves fast and the other can keep up; check that follow-through is not lost.",
        (ProScanTrait::Pace, LowLow) => "Two fast movers; lots gets started, so guard the finishing.",
        (ProScanTrait::Conformity, HighHigh) => "Both detail-oriented and rule-respecting; quality is high and risk is low.",
        (ProScanTrait::Conformity, HighMid) => "One sets the standard and the other follows sensible structure.",
        (ProScanTrait::Conformity, HighLow) => "One wants rules and detail and the other wants freedom; define where structure is mandatory.",
        (ProScanTrait::Conformity, MidMid) => "You both follow structure that makes sense and bend the rest.",
        (ProScanTrait::Conformity, MidLow) => "A big-picture pair; name someone to own the details.",
        (ProScanTrait::Conformity, LowLow) => "Two independents; innovation comes easily but details may slip.",
    }
}

/// Interactions for every trait both profiles have set.
pub fn compare_traits(visitor: &ProScanProfile, owner: &ProScanProfile) -> Vec<TraitInteraction> {
    ProScanTrait::ALL
        .iter()
        .filter_map(|t| {
            let (v, o) = (visitor.level(*t)?, owner.level(*t)?);
            Some(TraitInteraction {
                trait_: *t,
                visitor: v,
                owner: o,
                note: trait_interaction(*t, v, o),
            })
        })
        .collect()
}

const SHARED_ENERGY: &str = "You share an energy style, so you naturally work at the same rhythm.";
const GENERIC_ENERGY: &str = "Your energy styles differ; talk about how each of you likes to pace effort.";

/// Message for two sets of energy styles.
pub fn energy_interaction(a: &[EnergyStyle], b: &[EnergyStyle]) -> &'static str {
    if a.iter().any(|s| b.contains(s)) {
        return SHARED_ENERGY;
    }
    for x in a {
        for y in b {
            if let Some(note) = energy_pair_note(*x, *y) {
                return note;
            }
        }
    }
    GENERIC_ENERGY
}

fn energy_pair_note(a: EnergyStyle, b: EnergyStyle) -> Option<&'static str> {
    use EnergyStyle::*;
    let key = if a <= b { (a, b) } else { (b, a) };
    match key {
        (Thrust, Allegiance) => Some(
            "Thrust brings bursts of drive toward goals while Allegiance brings sustained commitment to people; aim the bursts at shared causes.",
        ),
        (Thrust, SteNacity) => Some(
            "Thrust sprints and Ste-Nacity endures; one starts strong and the other outlasts the obstacles.",
        ),
        (Allegiance, SteNacity) => Some(
            "Allegiance commits to people and Ste-Nacity to the long haul; a loyal, persistent combination.",
        ),
        _ => None,
    }
}

/// Compares logic styles.
pub fn logic_interaction(visitor: LogicStyle, owner: LogicStyle) -> PairingResult {
    if visitor == owner {
        return PairingResult::new(
            PairAlignment::Matched,
            format!("You both decide the same way: {}.", visitor.describe()),
        );
    }
    let alignment = match (visitor, owner) {
        (LogicStyle::Intuitive, _) | (_, LogicStyle::Intuitive) => PairAlignment::Complementary,
        _ => PairAlignment::Partial,
    };
    PairingResult::new(
        alignment,
        format!(
            "{} logic meets {} logic: one {}, the other {}.",
            visitor,
            owner,
            visitor.describe(),
            owner.describe()
        ),
    )
}
