//! Instinctive Drives lens.

use super::dimension::CollaborationDimension;
use super::lens::{Contribution, FrameworkLens, Tip};
use crate::domain::compatibility::{compare_drives, DriveComparison, DriveInteraction};
use crate::domain::frameworks::{Drive, DriveScores, FrameworkId, FrameworkProfile, OwnerProfile};

pub struct DrivesLens;

/// Drives that speak to each dimension.
fn relevant_drives(dimension: CollaborationDimension) -> &'static [Drive] {
    use CollaborationDimension::*;
    match dimension {
        Communication => &[Drive::Authenticate, Drive::Verify],
        DecisionMaking => &[Drive::Verify, Drive::Improvise],
        Delegation => &[Drive::Complete, Drive::Authenticate],
        Stress => &[Drive::Improvise, Drive::Complete],
        Motivation => &Drive::ALL,
        Conflict | Feedback | Leadership => &[],
    }
}

impl FrameworkLens for DrivesLens {
    fn framework(&self) -> FrameworkId {
        FrameworkId::Drives
    }

    fn contribute(
        &self,
        dimension: CollaborationDimension,
        owner: &OwnerProfile,
        visitor: &FrameworkProfile,
    ) -> Option<Contribution> {
        if !visitor.drives.is_engaged() || !owner.profile.drives.is_engaged() {
            return None;
        }
        let drives = relevant_drives(dimension);
        if drives.is_empty() {
            return None;
        }
        let name = owner.name.as_str();
        let comparisons: Vec<DriveComparison> = compare_drives(&visitor.drives, &owner.profile.drives)
            .into_iter()
            .filter(|c| drives.contains(&c.drive))
            .collect();

        if dimension == CollaborationDimension::Motivation {
            let strongest = |scores: &DriveScores| {
                scores
                    .strongest_use()
                    .map(|d| d.name())
                    .unwrap_or("no single drive")
            };
            return Some(Contribution::new(
                "Your Instinctive Drives side by side.",
                format!(
                    "Your strongest drive is {}; {}'s is {}.",
                    strongest(&visitor.drives),
                    name,
                    strongest(&owner.profile.drives)
                ),
            ));
        }

        let narrative = comparisons
            .iter()
            .map(|c| format!("{} ({} vs {}): {}", c.drive, c.visitor_score, c.owner_score, c.note))
            .collect::<Vec<_>>()
            .join(" ");
        let watch_out = comparisons
            .iter()
            .find(|c| c.interaction == DriveInteraction::Contrast)
            .map(|c| format!("You and {} sit at opposite ends of {}.", name, c.drive));
        let tips = comparisons.iter().map(|c| {
            let band = owner.profile.drives.get(c.drive).band();
            Tip::visitor(format!("{} {}.", name, c.drive.describe(band)))
        });

        Some(
            Contribution::new(
                format!(
                    "Instinctive Drives: {}.",
                    drives.iter().map(|d| d.name()).collect::<Vec<_>>().join(" and ")
                ),
                narrative,
            )
            .with_tips(tips)
            .with_watch_out(watch_out),
        )
    }
}
