//! Enneagram lens: pair table, triads, and stress/growth arrows.

use super::dimension::CollaborationDimension;
use super::lens::{Contribution, FrameworkLens, Tip};
use crate::domain::compatibility::enneagram_pairing;
use crate::domain::frameworks::{FrameworkId, FrameworkProfile, OwnerProfile, Triad};

pub struct EnneagramLens;

fn triad_decision(triad: Triad) -> &'static str {
    match triad {
        Triad::Gut => "from instinct and a sense of what is right",
        Triad::Heart => "from how the choice lands with people",
        Triad::Head => "from analysis and thinking through scenarios",
    }
}

impl FrameworkLens for EnneagramLens {
    fn framework(&self) -> FrameworkId {
        FrameworkId::Enneagram
    }

    fn contribute(
        &self,
        dimension: CollaborationDimension,
        owner: &OwnerProfile,
        visitor: &FrameworkProfile,
    ) -> Option<Contribution> {
        let v = visitor.enneagram_type()?;
        let o = owner.profile.enneagram_type()?;
        let name = owner.name.as_str();
        let pair = enneagram_pairing(v, o)?;
        let (ve, oe) = (v.entry(), o.entry());
        let label = format!("Type {} ({}) with Type {} ({})", v, ve.name, o, oe.name);

        let contribution = match dimension {
            CollaborationDimension::Communication => Contribution::new(
                label,
                format!("{} {}.", pair.chemistry, pair.communication_tips.join("; ")),
            )
            .with_tips(pair.communication_tips.iter().map(|t| Tip::visitor(*t))),
            CollaborationDimension::DecisionMaking => Contribution::new(
                label,
                format!(
                    "A {} decides {}; {} decides {}.",
                    ve.name,
                    triad_decision(v.triad()),
                    name,
                    triad_decision(o.triad())
                ),
            ),
            CollaborationDimension::Conflict => Contribution::new(
                label,
                format!(
                    "{} Where it gets hard: {}.",
                    pair.chemistry,
                    pair.friction.join("; ")
                ),
            )
            .with_watch_out(pair.friction.first().map(|f| f.to_string())),
            CollaborationDimension::Feedback => Contribution::new(
                label,
                format!(
                    "A {} hears criticism through a fear of {}; {} through a fear of {}.",
                    ve.name, ve.core_fear, name, oe.core_fear
                ),
            )
            .with_tip(Tip::owner(format!(
                "Frame feedback so it does not touch the fear of {}.",
                ve.core_fear
            ))),
            CollaborationDimension::Leadership => Contribution::new(
                label,
                format!("Together you bring: {}.", pair.strengths.join("; ")),
            )
            .with_tips(pair.delegation_tips.iter().map(|t| Tip::owner(*t))),
            CollaborationDimension::Stress => {
                let watch_out = if v.stress() == o {
                    Some(format!(
                        "Under stress you move toward Type {}, which is {}'s core type; the tension can mirror back.",
                        o, name
                    ))
                } else if o.stress() == v {
                    Some(format!(
                        "Under stress {} moves toward your type; expect {} to look like your worst day.",
                        name, name
                    ))
                } else {
                    None
                };
                Contribution::new(
                    label,
                    format!(
                        "Under stress a {} takes on traits of Type {} ({}) and grows toward Type {} ({}); {} moves toward Type {} under stress.",
                        ve.name,
                        v.stress(),
                        v.stress().entry().name,
                        v.growth(),
                        v.growth().entry().name,
                        name,
                        o.stress()
                    ),
                )
                .with_watch_out(watch_out)
            }
            CollaborationDimension::Motivation => Contribution::new(
                label,
                format!(
                    "You are driven {}; {} is driven {}.",
                    ve.core_motivation, name, oe.core_motivation
                ),
            ),
            CollaborationDimension::Delegation => return None,
        };
        Some(contribution)
    }
}
