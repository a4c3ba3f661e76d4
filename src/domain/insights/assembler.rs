//! Insight assembly: runs every framework lens over every dimension and
//! merges the contributions into insight cards.

use serde::Serialize;

use super::dimension::{CollaborationDimension, DimensionSet};
use super::disc_lens::DiscLens;
use super::drives_lens::DrivesLens;
use super::enneagram_lens::EnneagramLens;
use super::lens::{Contribution, FrameworkLens, Tip};
use super::mbti_lens::MbtiLens;
use super::proscan_lens::ProScanLens;
use crate::domain::compatibility::AlignmentLevel;
use crate::domain::frameworks::{FrameworkId, FrameworkProfile, OwnerProfile};

/// Suggestion to fill in one more framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deepen {
    pub framework: FrameworkId,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightDetail {
    pub narrative: String,
    pub tips: Vec<Tip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch_out: Option<String>,
    pub based_on: Vec<FrameworkId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deepen: Option<Deepen>,
}

/// One insight card for a collaboration dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightResult {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<AlignmentLevel>,
    pub sources_used: usize,
    pub detail: InsightDetail,
}

/// Holds one lens per framework and assembles insights from them.
pub struct InsightAssembler {
    lenses: Vec<Box<dyn FrameworkLens>>,
}

impl Default for InsightAssembler {
    fn default() -> Self {
        Self::new(vec![
            Box::new(MbtiLens),
            Box::new(DiscLens),
            Box::new(EnneagramLens),
            Box::new(DrivesLens),
            Box::new(ProScanLens),
        ])
    }
}

impl InsightAssembler {
    pub fn new(lenses: Vec<Box<dyn FrameworkLens>>) -> Self {
        Self { lenses }
    }

    fn lens(&self, framework: FrameworkId) -> Option<&dyn FrameworkLens> {
        self.lenses
            .iter()
            .find(|l| l.framework() == framework)
            .map(|l| l.as_ref())
    }

    /// Builds one insight, or `None` when no framework contributed.
    pub fn build_insight(
        &self,
        dimension: CollaborationDimension,
        owner: &OwnerProfile,
        visitor: &FrameworkProfile,
    ) -> Option<InsightResult> {
        let contributions: Vec<(FrameworkId, Contribution)> = dimension
            .priority()
            .iter()
            .filter(|f| visitor.has(**f))
            .filter_map(|f| {
                let contribution = self.lens(*f)?.contribute(dimension, owner, visitor)?;
                Some((*f, contribution))
            })
            .collect();

        let (_, first) = contributions.first()?;
        let summary = first.summary.clone();

        let narrative = contributions
            .iter()
            .map(|(_, c)| c.narrative.trim())
            .filter(|n| !n.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        let tips = contributions
            .iter()
            .flat_map(|(_, c)| c.tips.iter().cloned())
            .collect();
        let watch_out = contributions
            .iter()
            .find_map(|(_, c)| c.watch_out.clone().filter(|w| !w.is_empty()));
        let alignment = contributions.iter().find_map(|(_, c)| c.alignment);
        let based_on: Vec<FrameworkId> = contributions.iter().map(|(f, _)| *f).collect();

        let deepen = dimension
            .priority()
            .iter()
            .find(|f| !visitor.has(**f))
            .map(|f| Deepen {
                framework: *f,
                message: format!(
                    "Add your {} results to deepen this {} insight.",
                    f.label(),
                    dimension.title().to_lowercase()
                ),
            });

        Some(InsightResult {
            id: dimension.id(),
            title: dimension.title(),
            icon: dimension.icon(),
            summary,
            alignment,
            sources_used: based_on.len(),
            detail: InsightDetail {
                narrative,
                tips,
                watch_out,
                based_on,
                deepen,
            },
        })
    }

    /// All insights for a dimension set; dimensions with no data are omitted.
    pub fn build_all(
        &self,
        owner: &OwnerProfile,
        visitor: &FrameworkProfile,
        set: DimensionSet,
    ) -> Vec<InsightResult> {
        set.dimensions()
            .iter()
            .filter_map(|d| self.build_insight(*d, owner, visitor))
            .collect()
    }
}

/// Builds all insights with the standard lenses.
pub fn build_all_insights(
    owner: &OwnerProfile,
    visitor: &FrameworkProfile,
    set: DimensionSet,
) -> Vec<InsightResult> {
    InsightAssembler::default().build_all(owner, visitor, set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::frameworks::DriveScores;

    fn disc_only(code: &str) -> FrameworkProfile {
        FrameworkProfile {
            disc: Some(code.parse().unwrap()),
            ..Default::default()
        }
    }

    #[test]
    fn empty_visitor_gets_no_insights() {
        let insights = build_all_insights(
            &OwnerProfile::default(),
            &FrameworkProfile::default(),
            DimensionSet::Full,
        );
        assert!(insights.is_empty());
    }

    #[test]
    fn disc_s_visitor_has_low_communication_alignment() {
        let insights =
            build_all_insights(&OwnerProfile::default(), &disc_only("S"), DimensionSet::Full);
        let comm = insights.iter().find(|i| i.id == "communication").unwrap();
        assert!(comm.sources_used >= 1);
        assert!(comm.detail.based_on.contains(&FrameworkId::Disc));
        assert_eq!(comm.alignment, Some(AlignmentLevel::Low));
    }

    #[test]
    fn single_framework_insights_have_one_source() {
        let insights =
            build_all_insights(&OwnerProfile::default(), &disc_only("Cd"), DimensionSet::Full);
        assert!(!insights.is_empty());
        for insight in &insights {
            assert_eq!(insight.sources_used, 1);
            assert_eq!(insight.detail.based_on, vec![FrameworkId::Disc]);
        }
        // DISC has nothing for stress
        assert!(insights.iter().all(|i| i.id != "stress"));
    }

    fn only(framework: FrameworkId, from: &FrameworkProfile) -> FrameworkProfile {
        let mut profile = FrameworkProfile::default();
        match framework {
            FrameworkId::Mbti => profile.mbti = from.mbti,
            FrameworkId::Disc => profile.disc = from.disc,
            FrameworkId::Enneagram => profile.enneagram = from.enneagram,
            FrameworkId::Drives => profile.drives = from.drives,
            FrameworkId::ProScan => profile.proscan = from.proscan.clone(),
        }
        profile
    }

    #[test]
    fn each_framework_alone_is_the_only_source() {
        let owner = OwnerProfile::default();
        for framework in FrameworkId::ALL {
            let visitor = only(framework, &owner.profile);
            assert_eq!(visitor.filled(), vec![framework]);

            let insights = build_all_insights(&owner, &visitor, DimensionSet::Full);
            assert!(!insights.is_empty(), "{:?}", framework);
            for insight in &insights {
                assert_eq!(insight.sources_used, 1, "{:?} {}", framework, insight.id);
                assert_eq!(insight.detail.based_on, vec![framework]);
            }
        }
    }

    #[test]
    fn deepen_names_first_missing_framework() {
        let insights =
            build_all_insights(&OwnerProfile::default(), &disc_only("D"), DimensionSet::Full);
        let comm = insights.iter().find(|i| i.id == "communication").unwrap();
        assert_eq!(comm.detail.deepen.as_ref().unwrap().framework, FrameworkId::Mbti);
    }

    #[test]
    fn full_visitor_gets_every_dimension_and_no_deepen() {
        let owner = OwnerProfile::default();
        let visitor = FrameworkProfile {
            drives: DriveScores::new(6, 4, 7, 3).unwrap(),
            ..owner.profile.clone()
        };
        let insights = build_all_insights(&owner, &visitor, DimensionSet::Full);
        assert_eq!(insights.len(), 8);
        for insight in &insights {
            assert!(insight.detail.deepen.is_none());
            assert_eq!(insight.sources_used, insight.detail.based_on.len());
        }
        let comm = &insights[0];
        assert_eq!(
            comm.detail.based_on,
            vec![
                FrameworkId::Disc,
                FrameworkId::Mbti,
                FrameworkId::ProScan,
                FrameworkId::Enneagram,
                FrameworkId::Drives
            ]
        );
    }

    #[test]
    fn compact_set_drops_two_dimensions() {
        let owner = OwnerProfile::default();
        let insights = build_all_insights(&owner, &owner.profile, DimensionSet::Compact);
        assert_eq!(insights.len(), 6);
        assert!(insights.iter().all(|i| i.id != "feedback" && i.id != "motivation"));
    }

    #[test]
    fn insight_serializes_expected_shape() {
        let insights =
            build_all_insights(&OwnerProfile::default(), &disc_only("S"), DimensionSet::Full);
        let json = serde_json::to_value(&insights[0]).unwrap();
        assert_eq!(json["id"], "communication");
        assert_eq!(json["alignment"], "low");
        assert_eq!(json["sources_used"], 1);
        assert_eq!(json["detail"]["based_on"][0], "disc");
        assert_eq!(json["detail"]["deepen"]["framework"], "mbti");
    }
}
