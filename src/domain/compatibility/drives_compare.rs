//! Instinctive Drives comparator.
//!
//! Each drive is classified independently for both people and the pair of
//! bands is mapped to an interaction with a canned note.

use serde::Serialize;

use crate::domain::frameworks::{Drive, DriveBand, DriveScores};

/// How two people's bands on one drive combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DriveInteraction {
    BothUse,
    BothAvoid,
    /// One uses the drive, the other avoids it.
    Contrast,
    NeutralPlusUse,
    NeutralPlusAvoid,
    BothNeutral,
}

impl DriveInteraction {
    /// Order of the bands does not matter.
    pub fn from_bands(a: DriveBand, b: DriveBand) -> Self {
        use DriveBand::*;
        match (a, b) {
            (Use, Use) => Self::BothUse,
            (Avoid, Avoid) => Self::BothAvoid,
            (Use, Avoid) | (Avoid, Use) => Self::Contrast,
            (Neutral, Use) | (Use, Neutral) => Self::NeutralPlusUse,
            (Neutral, Avoid) | (Avoid, Neutral) => Self::NeutralPlusAvoid,
            (Neutral, Neutral) => Self::BothNeutral,
        }
    }
}

/// Comparison of one drive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriveComparison {
    pub drive: Drive,
    pub visitor_score: u8,
    pub owner_score: u8,
    pub interaction: DriveInteraction,
    pub note: &'static str,
}

pub fn interaction_note(drive: Drive, interaction: DriveInteraction) -> &'static str {
    use DriveInteraction::*;
    match (drive, interaction) {
        (Drive::Verify, BothUse) => "You both need evidence before committing; decisions are well-founded but can take longer than necessary.",
        (Drive::Verify, BothAvoid) => "Neither of you wants to over-research; you move fast on instinct, so assign someone to double-check the critical facts.",
        (Drive::Verify, Contrast) => "One of you wants proof and the other trusts gut feel; agree in advance how much evidence is enough.",
        (Drive::Verify, NeutralPlusUse) => "One of you researches deeply and the other adapts; let the researcher set the fact base.",
        (Drive::Verify, NeutralPlusAvoid) => "One of you moves on instinct while the other checks when it matters; lean on the flexible one for spot checks.",
        (Drive::Verify, BothNeutral) => "You both verify when the situation calls for it, so this drive rarely causes friction.",
        (Drive::Authenticate, BothUse) => "You both want to see it working; prototypes and demos will beat slide decks.",
        (Drive::Authenticate, BothAvoid) => "You are both comfortable with abstractions; check that ideas eventually become something tangible.",
        (Drive::Authenticate, Contrast) => "One of you needs to see and touch it, the other is happy with the concept; show a prototype early.",
        (Drive::Authenticate, NeutralPlusUse) => "One of you insists on tangible proof and the other goes along with it; let that need shape the demos.",
        (Drive::Authenticate, NeutralPlusAvoid) => "One of you prefers working in concepts; the other can bridge to concrete examples when needed.",
        (Drive::Authenticate, BothNeutral) => "Neither of you insists on hands-on proof or pure theory, so you meet in the middle easily.",
        (Drive::Complete, BothUse) => "You both like structure and closure; projects finish cleanly, but watch for rigidity.",
        (Drive::Complete, BothAvoid) => "Neither of you enjoys routine follow-through; bring in process or a finisher for the last mile.",
        (Drive::Complete, Contrast) => "One of you needs order and closure, the other resists structure; agree which parts need a system.",
        (Drive::Complete, NeutralPlusUse) => "One of you drives structure and the other adapts to it; let the structured one own the plan.",
        (Drive::Complete, NeutralPlusAvoid) => "One of you avoids routine and the other can tolerate it; hand the follow-through to the flexible one.",
        (Drive::Complete, BothNeutral) => "You both adapt to as much structure as the work needs.",
        (Drive::Improvise, BothUse) => "You both thrive on urgency and variety; great in a crisis, but plans may be abandoned too quickly.",
        (Drive::Improvise, BothAvoid) => "You both prefer a plan and dislike surprises; build in buffers for the unexpected.",
        (Drive::Improvise, Contrast) => "One of you thrives on last-minute changes, the other needs a plan; signal changes early and explain why.",
        (Drive::Improvise, NeutralPlusUse) => "One of you loves improvising and the other can keep up; let the improviser handle the curveballs.",
        (Drive::Improvise, NeutralPlusAvoid) => "One of you dislikes surprises while the other can flex; give the planner notice before pivots.",
        (Drive::Improvise, BothNeutral) => "You both improvise when needed without seeking chaos.",
    }
}

/// Compares all four drives, in drive order.
pub fn compare_drives(visitor: &DriveScores, owner: &DriveScores) -> Vec<DriveComparison> {
    Drive::ALL
        .iter()
        .map(|drive| {
            let (v, o) = (visitor.get(*drive), owner.get(*drive));
            let interaction = DriveInteraction::from_bands(v.band(), o.band());
            DriveComparison {
                drive: *drive,
                visitor_score: v.value(),
                owner_score: o.value(),
                interaction,
                note: interaction_note(*drive, interaction),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> DriveScores {
        DriveScores::new(3, 7, 2, 8).unwrap()
    }

    #[test]
    fn interactions_against_default_owner() {
        let visitor = DriveScores::new(8, 7, 5, 3).unwrap();
        let result = compare_drives(&visitor, &owner());
        let kinds: Vec<DriveInteraction> = result.iter().map(|c| c.interaction).collect();
        assert_eq!(
            kinds,
            vec![
                DriveInteraction::Contrast,
                DriveInteraction::BothUse,
                DriveInteraction::NeutralPlusAvoid,
                DriveInteraction::Contrast,
            ]
        );
        assert_eq!(result[0].visitor_score, 8);
        assert_eq!(result[0].owner_score, 3);
    }

    #[test]
    fn neutral_visitor_yields_neutral_combinations() {
        let result = compare_drives(&DriveScores::default(), &owner());
        assert_eq!(result[0].interaction, DriveInteraction::NeutralPlusAvoid);
        assert_eq!(result[1].interaction, DriveInteraction::NeutralPlusUse);

        let both = compare_drives(&DriveScores::default(), &DriveScores::default());
        assert!(both
            .iter()
            .all(|c| c.interaction == DriveInteraction::BothNeutral));
    }

    #[test]
    fn interaction_is_symmetric_in_bands() {
        use DriveBand::*;
        for a in [Use, Neutral, Avoid] {
            for b in [Use, Neutral, Avoid] {
                assert_eq!(
                    DriveInteraction::from_bands(a, b),
                    DriveInteraction::from_bands(b, a)
                );
            }
        }
    }

    #[test]
    fn note_matches_drive_and_interaction() {
        let result = compare_drives(&DriveScores::new(9, 5, 5, 5).unwrap(), &owner());
        assert_eq!(
            result[0].note,
            interaction_note(Drive::Verify, DriveInteraction::Contrast)
        );
    }
}
