//! Insights Module - Collaboration-dimension insight cards.
//!
//! Each dimension (communication, conflict, ...) lists the frameworks that
//! inform it in priority order. A `FrameworkLens` per framework turns the
//! owner and visitor profiles into a `Contribution`; the assembler merges
//! contributions into an `InsightResult` and drops dimensions nobody
//! contributed to.
//!
//! The owner profile is always passed in explicitly.

mod assembler;
mod dimension;
mod disc_lens;
mod drives_lens;
mod enneagram_lens;
mod lens;
mod mbti_lens;
mod proscan_lens;

pub use assembler::{build_all_insights, Deepen, InsightAssembler, InsightDetail, InsightResult};
pub use dimension::{CollaborationDimension, DimensionSet};
pub use disc_lens::DiscLens;
pub use drives_lens::DrivesLens;
pub use enneagram_lens::EnneagramLens;
pub use lens::{Contribution, FrameworkLens, Tip, TipAudience};
pub use mbti_lens::MbtiLens;
pub use proscan_lens::ProScanLens;
