//! Property tests for the pairwise scorers.

use proptest::prelude::*;

use profile_compass::domain::compatibility::{
    compare_drives, CompatibilityTier, DriveInteraction, MbtiCompatibility,
};
use profile_compass::domain::frameworks::{DriveBand, DriveScores, MbtiType};

fn mbti_type() -> impl Strategy<Value = MbtiType> {
    prop::sample::select(MbtiType::ALL.to_vec())
}

fn drive_scores() -> impl Strategy<Value = DriveScores> {
    (1u8..=9, 1u8..=9, 1u8..=9, 1u8..=9)
        .prop_map(|(v, a, c, i)| DriveScores::new(v, a, c, i).unwrap())
}

proptest! {
    #[test]
    fn mbti_score_ignores_argument_order(a in mbti_type(), b in mbti_type()) {
        let ab = MbtiCompatibility::score(a, b);
        let ba = MbtiCompatibility::score(b, a);
        prop_assert_eq!(ab.score, ba.score);
        prop_assert_eq!(ab.tier, ba.tier);
    }

    #[test]
    fn mbti_score_stays_in_bounds(a in mbti_type(), b in mbti_type()) {
        let result = MbtiCompatibility::score(a, b);
        prop_assert!(result.score <= 100);
        prop_assert_eq!(result.tier, CompatibilityTier::from_score(result.score));
    }

    #[test]
    fn tier_never_drops_as_score_rises(x in 0u8..=100, y in 0u8..=100) {
        let (lo, hi) = if x <= y { (x, y) } else { (y, x) };
        prop_assert!(CompatibilityTier::from_score(lo) <= CompatibilityTier::from_score(hi));
    }

    #[test]
    fn unknown_codes_are_neutral(code in "[0-9]{0,6}") {
        let result = MbtiCompatibility::score_codes(&code, "ENTJ");
        prop_assert_eq!(result.score, 50);
        prop_assert_eq!(result.tier, CompatibilityTier::Moderate);
    }

    #[test]
    fn drive_interaction_is_symmetric(visitor in drive_scores(), owner in drive_scores()) {
        let forward = compare_drives(&visitor, &owner);
        let backward = compare_drives(&owner, &visitor);
        prop_assert_eq!(forward.len(), 4);
        for (f, b) in forward.iter().zip(backward.iter()) {
            prop_assert_eq!(f.drive, b.drive);
            prop_assert_eq!(f.interaction, b.interaction);
        }
    }

    #[test]
    fn drive_bands_partition_the_scale(score in 1u8..=9) {
        let expected = if score >= 6 {
            DriveBand::Use
        } else if score == 5 {
            DriveBand::Neutral
        } else {
            DriveBand::Avoid
        };
        prop_assert_eq!(DriveBand::classify(score), expected);
    }
}

#[test]
fn contrast_only_for_use_against_avoid() {
    use DriveBand::*;
    for a in [Use, Neutral, Avoid] {
        for b in [Use, Neutral, Avoid] {
            let contrast = DriveInteraction::from_bands(a, b) == DriveInteraction::Contrast;
            assert_eq!(contrast, matches!((a, b), (Use, Avoid) | (Avoid, Use)));
        }
    }
}
