//! Compatibility Module - Pairwise rule tables and generators.
//!
//! Stateless functions that compare two framework values and return a
//! score, a canned text block, or generated narrative.
//!
//! # Components
//!
//! - `MbtiCompatibility` - 0-100 score and tier for two MBTI types
//! - `mbti_interaction` - Generated narrative for two MBTI types
//! - `disc_pairs` - DISC pair table and communication alignment matrix
//! - `enneagram_pairs` - Enneagram pair table (45 entries)
//! - `drives_compare` - Per-drive USE/NEUTRAL/AVOID comparison
//! - `proscan_interaction` - Trait, energy, and logic-style interactions
//!
//! Unknown inputs never fail: scorers fall back to a neutral result and
//! tables return `None`.

mod disc_pairs;
mod drives_compare;
mod enneagram_pairs;
mod fragment;
mod mbti_interaction;
mod mbti_score;
mod pairing;
mod proscan_interaction;

pub use disc_pairs::{communication_alignment, disc_pairing, disc_pairing_codes};
pub use drives_compare::{compare_drives, interaction_note, DriveComparison, DriveInteraction};
pub use enneagram_pairs::{enneagram_pairing, enneagram_pairing_numbers};
pub use fragment::{join_fragments, Fragment};
pub use mbti_interaction::{
    compare_dichotomies, dominant_hits_inferior, generate_interaction, DichotomyComparison,
    MbtiInteraction,
};
pub use mbti_score::{CompatibilityScore, CompatibilityTier, MbtiCompatibility};
pub use pairing::{AlignmentLevel, CanonicalPair, PairAlignment, PairProfile, PairingResult};
pub use proscan_interaction::{
    compare_traits, energy_interaction, logic_interaction, trait_interaction, LevelPair,
    TraitInteraction,
};
