//! ProScan lens: trait, logic, and energy interactions.

use super::dimension::CollaborationDimension;
use super::lens::{Contribution, FrameworkLens, Tip};
use crate::domain::compatibility::{energy_interaction, logic_interaction, trait_interaction};
use crate::domain::frameworks::{FrameworkId, FrameworkProfile, OwnerProfile, ProScanTrait};

pub struct ProScanLens;

fn relevant_traits(dimension: CollaborationDimension) -> &'static [ProScanTrait] {
    use CollaborationDimension::*;
    use ProScanTrait::*;
    match dimension {
        Communication => &[Extroversion],
        DecisionMaking => &[Dominance],
        Conflict => &[Dominance, Conformity],
        Delegation => &[Conformity, Pace],
        Feedback => &[Extroversion, Conformity],
        Leadership => &[Dominance, Extroversion],
        Stress => &[Pace],
        Motivation => &[],
    }
}

impl FrameworkLens for ProScanLens {
    fn framework(&self) -> FrameworkId {
        FrameworkId::ProScan
    }

    fn contribute(
        &self,
        dimension: CollaborationDimension,
        owner: &OwnerProfile,
        visitor: &FrameworkProfile,
    ) -> Option<Contribution> {
        let (v, o) = (&visitor.proscan, &owner.profile.proscan);
        if !v.is_complete() || !o.is_complete() {
            return None;
        }
        let traits = relevant_traits(dimension);
        if traits.is_empty() {
            return None;
        }
        let name = owner.name.as_str();

        let mut sentences = Vec::new();
        let mut tips = Vec::new();
        let mut watch_out = None;
        for t in traits {
            let (vl, ol) = (v.level(*t)?, o.level(*t)?);
            sentences.push(format!("{}: {}", t, trait_interaction(*t, vl, ol)));
            tips.push(Tip::visitor(format!(
                "{} is {} on {}: {}.",
                name,
                ol.to_string().to_lowercase(),
                t,
                t.describe(ol)
            )));
            if watch_out.is_none() && vl.distance(&ol) == 2 {
                watch_out = Some(format!(
                    "You and {} sit at opposite ends of {} ({} vs {}).",
                    name, t, vl, ol
                ));
            }
        }

        match dimension {
            CollaborationDimension::Communication | CollaborationDimension::DecisionMaking => {
                if let (Some(vl), Some(ol)) = (v.logic, o.logic) {
                    sentences.push(logic_interaction(vl, ol).note);
                }
            }
            CollaborationDimension::Stress => {
                sentences.push(energy_interaction(&v.energy, &o.energy).to_string());
            }
            _ => {}
        }

        let summary = format!(
            "ProScan {}.",
            traits
                .iter()
                .map(|t| t.name())
                .collect::<Vec<_>>()
                .join(" and ")
        );
        Some(
            Contribution::new(summary, sentences.join(" "))
                .with_tips(tips)
                .with_watch_out(watch_out),
        )
    }
}
