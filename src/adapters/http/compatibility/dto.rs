//! HTTP DTOs for compatibility endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::MbtiComparison;
use crate::domain::compatibility::{
    CompatibilityTier, DichotomyComparison, DriveComparison, MbtiInteraction,
};
use crate::domain::frameworks::{CognitiveFunction, DriveScores, MbtiType};

/// `?a=&b=` query for pairwise endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct PairQuery {
    pub a: String,
    pub b: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MbtiCompatibilityResponse {
    pub a: MbtiType,
    pub b: MbtiType,
    pub score: u8,
    pub tier: CompatibilityTier,
    pub shared_functions: Vec<CognitiveFunction>,
    pub shadow_pair: bool,
}

impl From<&MbtiComparison> for MbtiCompatibilityResponse {
    fn from(c: &MbtiComparison) -> Self {
        Self {
            a: c.a,
            b: c.b,
            score: c.compatibility.score,
            tier: c.compatibility.tier,
            shared_functions: c.compatibility.shared_functions.clone(),
            shadow_pair: c.shadow_pair,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MbtiInteractionResponse {
    pub a: MbtiType,
    pub b: MbtiType,
    #[serde(flatten)]
    pub interaction: MbtiInteraction,
    pub dichotomies: Vec<DichotomyComparison>,
}

impl From<MbtiComparison> for MbtiInteractionResponse {
    fn from(c: MbtiComparison) -> Self {
        Self {
            a: c.a,
            b: c.b,
            interaction: c.interaction,
            dichotomies: c.dichotomies,
        }
    }
}

/// Request body for `POST /api/drives/compare`.
#[derive(Debug, Clone, Deserialize)]
pub struct DrivesCompareRequest {
    pub visitor: DriveScores,
}

#[derive(Debug, Clone, Serialize)]
pub struct DrivesCompareResponse {
    pub comparisons: Vec<DriveComparison>,
}
