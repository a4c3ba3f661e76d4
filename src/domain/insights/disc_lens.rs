//! DISC lens: style pairing, alignment, and feedback preferences per dimension.

use super::dimension::CollaborationDimension;
use super::lens::{Contribution, FrameworkLens, Tip};
use crate::domain::compatibility::{communication_alignment, disc_pairing, join_fragments, Fragment};
use crate::domain::frameworks::{DiscStyle, FrameworkId, FrameworkProfile, OwnerProfile};

pub struct DiscLens;

fn decision_tendency(style: DiscStyle) -> &'static str {
    match style {
        DiscStyle::D => "decides fast and owns the outcome",
        DiscStyle::I => "decides by gut feel and the energy in the room",
        DiscStyle::S => "decides carefully, weighing the impact on the team",
        DiscStyle::C => "decides after the analysis is done",
    }
}

fn leadership_note(visitor: DiscStyle, owner: DiscStyle) -> &'static str {
    if visitor == owner {
        "You share a style, so you lead the same way; agree who leads which work."
    } else if visitor.is_opposite(&owner) {
        "You sit opposite each other on the DISC circle; your leadership styles cover each other's blind spots when you respect the difference."
    } else {
        "You are neighbours on the DISC circle, sharing one axis of how you lead."
    }
}

impl FrameworkLens for DiscLens {
    fn framework(&self) -> FrameworkId {
        FrameworkId::Disc
    }

    fn contribute(
        &self,
        dimension: CollaborationDimension,
        owner: &OwnerProfile,
        visitor: &FrameworkProfile,
    ) -> Option<Contribution> {
        let v = visitor.disc_primary()?;
        let o = owner.profile.disc_primary()?;
        let name = owner.name.as_str();
        let pair = disc_pairing(v, o)?;
        let friction = pair.friction.first().map(|f| f.to_string());

        let contribution = match dimension {
            CollaborationDimension::Communication => Contribution::new(
                format!("{} meets {}: {}", v.name(), o.name(), pair.chemistry),
                join_fragments(vec![
                    Fragment::new(0, pair.chemistry),
                    Fragment::new(1, format!("Communication tips: {}.", pair.communication_tips.join("; "))),
                ]),
            )
            .with_tips(pair.communication_tips.iter().map(|t| Tip::visitor(*t)))
            .with_tip(Tip::owner(format!(
                "A {} style is motivated by {}.",
                v.name(),
                v.motivator()
            )))
            .with_watch_out(friction)
            .with_alignment(communication_alignment(o, v)),
            CollaborationDimension::DecisionMaking => Contribution::new(
                format!("{} and {} decision styles.", v.name(), o.name()),
                format!(
                    "As a {} you likely {}, while {} {}.",
                    v.name(),
                    decision_tendency(v),
                    name,
                    decision_tendency(o)
                ),
            ),
            CollaborationDimension::Conflict => Contribution::new(
                format!("Friction points for {} and {}.", v.name(), o.name()),
                format!("Likely friction: {}.", pair.friction.join("; ")),
            )
            .with_watch_out(friction),
            CollaborationDimension::Delegation => Contribution::new(
                format!("Delegating between {} and {}.", v.name(), o.name()),
                format!(
                    "{} Strengths to build on: {}.",
                    pair.chemistry,
                    pair.strengths.join("; ")
                ),
            )
            .with_tips(pair.delegation_tips.iter().map(|t| Tip::owner(*t))),
            CollaborationDimension::Feedback => Contribution::new(
                format!("Feedback for a {} style.", v.name()),
                format!(
                    "As a {} you probably want feedback that is {}. {} prefers feedback that is {}.",
                    v.name(),
                    v.feedback_preference(),
                    name,
                    o.feedback_preference()
                ),
            )
            .with_tip(Tip::visitor(format!(
                "Keep feedback to {} {}.",
                name,
                o.feedback_preference()
            )))
            .with_tip(Tip::owner(format!(
                "Keep feedback {}.",
                v.feedback_preference()
            ))),
            CollaborationDimension::Leadership => Contribution::new(
                format!("{} and {} leadership.", v.name(), o.name()),
                leadership_note(v, o),
            ),
            CollaborationDimension::Motivation => Contribution::new(
                format!("What motivates a {} style.", v.name()),
                format!(
                    "You are energized by {}; {} is energized by {}.",
                    v.motivator(),
                    name,
                    o.motivator()
                ),
            ),
            CollaborationDimension::Stress => return None,
        };
        Some(contribution)
    }
}
