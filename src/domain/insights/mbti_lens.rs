//! MBTI lens built on the compatibility scorer and interaction generator.

use super::dimension::CollaborationDimension;
use super::lens::{Contribution, FrameworkLens, Tip};
use crate::domain::compatibility::{
    dominant_hits_inferior, generate_interaction, AlignmentLevel, CompatibilityTier,
    MbtiCompatibility,
};
use crate::domain::frameworks::{Dichotomy, FrameworkId, FrameworkProfile, MbtiType, OwnerProfile};

pub struct MbtiLens;

fn tier_alignment(tier: CompatibilityTier) -> AlignmentLevel {
    match tier {
        CompatibilityTier::Excellent | CompatibilityTier::Good => AlignmentLevel::High,
        CompatibilityTier::Moderate => AlignmentLevel::Moderate,
        CompatibilityTier::Challenging => AlignmentLevel::Low,
    }
}

fn inferior_warning(visitor: MbtiType, owner: MbtiType, owner_name: &str) -> Option<String> {
    if dominant_hits_inferior(owner, visitor) {
        Some(format!(
            "{}'s dominant {} is your inferior function; under pressure it can feel relentless.",
            owner_name,
            owner.entry().dominant()
        ))
    } else if dominant_hits_inferior(visitor, owner) {
        Some(format!(
            "Your dominant {} is {}'s inferior function; lean on it gently when stakes are high.",
            visitor.entry().dominant(),
            owner_name
        ))
    } else {
        None
    }
}

impl FrameworkLens for MbtiLens {
    fn framework(&self) -> FrameworkId {
        FrameworkId::Mbti
    }

    fn contribute(
        &self,
        dimension: CollaborationDimension,
        owner: &OwnerProfile,
        visitor: &FrameworkProfile,
    ) -> Option<Contribution> {
        let v = visitor.mbti?;
        let o = owner.profile.mbti?;
        let name = owner.name.as_str();
        let score = MbtiCompatibility::score(v, o);
        let interaction = generate_interaction(v, o);
        let (ve, oe) = (v.entry(), o.entry());

        let contribution = match dimension {
            CollaborationDimension::Communication => Contribution::new(
                format!(
                    "{} and {} ({}): {} type compatibility, {}/100.",
                    v, o, name, score.tier, score.score
                ),
                interaction.communication,
            )
            .with_tip(Tip::visitor(format!(
                "{} leads with {}; frame points the way that function listens.",
                name,
                oe.dominant()
            )))
            .with_tip(Tip::owner(format!(
                "The {} ({}) leads with {}; meet them there first.",
                ve.nickname,
                v,
                ve.dominant()
            )))
            .with_alignment(tier_alignment(score.tier)),
            CollaborationDimension::DecisionMaking => Contribution::new(
                format!("How {} and {} reach decisions.", v, o),
                interaction.decision_making,
            )
            .with_tip(Tip::visitor(if o.letter(Dichotomy::Judgment) == 'T' {
                format!("Bring {} the logic and the numbers behind a recommendation.", name)
            } else {
                format!("Show {} who is affected and why it matters.", name)
            })),
            CollaborationDimension::Conflict => Contribution::new(
                format!("Where {} and {} rub.", v, o),
                interaction.conflict,
            )
            .with_watch_out(inferior_warning(v, o, name)),
            CollaborationDimension::Delegation => Contribution::new(
                format!("Handing work between {} and {}.", v, o),
                interaction.delegation,
            ),
            CollaborationDimension::Feedback => {
                let style = |t: MbtiType| {
                    if t.letter(Dichotomy::Judgment) == 'T' {
                        "direct and reasoned"
                    } else {
                        "warm and personal"
                    }
                };
                Contribution::new(
                    format!("Feedback between {} and {}.", v, o),
                    format!(
                        "As a {} you likely prefer feedback that is {}; {} tends to give feedback that is {}.",
                        v,
                        style(v),
                        name,
                        style(o)
                    ),
                )
                .with_tip(Tip::owner(format!(
                    "Make feedback to a {} {}.",
                    v,
                    style(v)
                )))
            }
            CollaborationDimension::Leadership => Contribution::new(
                format!("Leadership chemistry between {} and {}.", v, o),
                interaction.leadership,
            ),
            CollaborationDimension::Stress => Contribution::new(
                format!("{} and {} under stress.", v, o),
                format!(
                    "Under stress a {} can fall into inferior {} while {} falls into inferior {}.",
                    v,
                    ve.inferior(),
                    name,
                    oe.inferior()
                ),
            )
            .with_watch_out(inferior_warning(v, o, name)),
            CollaborationDimension::Motivation => Contribution::new(
                format!("What energizes {} and {}.", v, o),
                format!(
                    "A {} is energized by using {}; {} is energized by {}.",
                    v,
                    ve.dominant(),
                    name,
                    oe.dominant()
                ),
            ),
        };
        Some(contribution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visitor(code: &str) -> FrameworkProfile {
        FrameworkProfile {
            mbti: Some(code.parse().unwrap()),
            ..Default::default()
        }
    }

    #[test]
    fn contributes_to_every_dimension_when_both_have_mbti() {
        let owner = OwnerProfile::default();
        for d in CollaborationDimension::ALL {
            let c = MbtiLens.contribute(d, &owner, &visitor("INFP"));
            assert!(c.is_some(), "{}", d);
            assert!(!c.unwrap().narrative.is_empty());
        }
    }

    #[test]
    fn communication_summary_names_the_tier() {
        let owner = OwnerProfile::default();
        let c = MbtiLens
            .contribute(CollaborationDimension::Communication, &owner, &visitor("ENTJ"))
            .unwrap();
        assert_eq!(
            c.summary,
            "ENTJ and ENTJ (Cain): Excellent type compatibility, 84/100."
        );
    }

    #[test]
    fn missing_visitor_mbti_gives_nothing() {
        let owner = OwnerProfile::default();
        assert!(MbtiLens
            .contribute(CollaborationDimension::Communication, &owner, &FrameworkProfile::default())
            .is_none());
    }

    #[test]
    fn inferior_trigger_becomes_watch_out() {
        // Cain is ENTJ; INFP's inferior is Te
        let owner = OwnerProfile::default();
        let c = MbtiLens
            .contribute(CollaborationDimension::Conflict, &owner, &visitor("INFP"))
            .unwrap();
        assert!(c.watch_out.unwrap().contains("Cain's dominant Te"));

        let c = MbtiLens
            .contribute(CollaborationDimension::Conflict, &owner, &visitor("INTJ"))
            .unwrap();
        assert!(c.watch_out.is_none());
    }

    #[test]
    fn communication_alignment_follows_tier() {
        let owner = OwnerProfile::default();
        let c = MbtiLens
            .contribute(CollaborationDimension::Communication, &owner, &visitor("ENTJ"))
            .unwrap();
        assert_eq!(c.alignment, Some(AlignmentLevel::High));
        let c = MbtiLens
            .contribute(CollaborationDimension::Communication, &owner, &visitor("ISFP"))
            .unwrap();
        assert_eq!(c.alignment, Some(AlignmentLevel::Low));
    }
}
