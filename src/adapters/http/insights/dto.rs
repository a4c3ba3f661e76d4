//! HTTP DTOs for insight and owner endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::frameworks::{
    DiscBlendEntry, EnneagramEntry, FrameworkProfile, MbtiEntry, OwnerProfile,
};
use crate::domain::insights::DimensionSet;

/// Request body for `POST /api/insights`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InsightsRequest {
    #[serde(default)]
    pub visitor: FrameworkProfile,
    #[serde(default)]
    pub dimension_set: Option<DimensionSet>,
}

/// The owner's profile plus registry entries for display.
#[derive(Debug, Clone, Serialize)]
pub struct OwnerResponse {
    pub name: String,
    pub profile: FrameworkProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mbti: Option<&'static MbtiEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disc: Option<&'static DiscBlendEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enneagram: Option<&'static EnneagramEntry>,
}

impl From<&OwnerProfile> for OwnerResponse {
    fn from(owner: &OwnerProfile) -> Self {
        let profile = &owner.profile;
        Self {
            name: owner.name.clone(),
            profile: profile.clone(),
            mbti: profile.mbti.map(|t| t.entry()),
            disc: profile.disc.and_then(|c| c.entry()),
            enneagram: profile.enneagram_type().map(|t| t.entry()),
        }
    }
}
