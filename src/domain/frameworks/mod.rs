//! Frameworks module - Type registries and profile types.
//!
//! Each framework module owns its immutable reference data (loaded once,
//! read-only) and the value types used to describe a person in that
//! framework. Lookups by code never fail loudly: unknown codes yield `None`.
//!
//! - `mbti` - 16 types with cognitive-function stacks and quadras
//! - `disc` - styles, blend codes, and the 16-position DISC circle
//! - `enneagram` - 9 types with wings, arrows, and triads
//! - `proscan` - trait levels, logic style, energy style
//! - `drives` - Instinctive Drives scores and bands
//! - `profile` - sparse visitor/owner profiles

pub mod disc;
pub mod drives;
pub mod enneagram;
pub mod mbti;
pub mod proscan;
mod profile;

pub use disc::{BlendCode, BlendKind, DiscBlendEntry, DiscStyle};
pub use drives::{Drive, DriveBand, DriveScore, DriveScores};
pub use enneagram::{EnneagramEntry, EnneagramProfile, EnneagramType, Triad};
pub use mbti::{Attitude, CognitiveFunction, Dichotomy, MbtiEntry, MbtiType, Process, Quadra};
pub use profile::{FrameworkId, FrameworkProfile, OwnerProfile, OwnerProfileError};
pub use proscan::{EnergyStyle, Level, LogicStyle, ProScanProfile, ProScanTrait};
