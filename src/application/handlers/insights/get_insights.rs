//! GetInsightsHandler - Query handler assembling collaboration insights.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::frameworks::{FrameworkId, FrameworkProfile, OwnerProfile};
use crate::domain::insights::{DimensionSet, InsightAssembler, InsightResult};

/// Query for insight cards against the owner profile.
#[derive(Debug, Clone, Default)]
pub struct GetInsightsQuery {
    pub visitor: FrameworkProfile,
    /// Falls back to the handler's configured set.
    pub dimension_set: Option<DimensionSet>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GetInsightsResult {
    pub owner_name: String,
    pub dimension_set: DimensionSet,
    pub frameworks_used: Vec<FrameworkId>,
    pub insights: Vec<InsightResult>,
}

/// Handler for building insights.
pub struct GetInsightsHandler {
    owner: Arc<OwnerProfile>,
    assembler: InsightAssembler,
    default_set: DimensionSet,
}

impl GetInsightsHandler {
    pub fn new(owner: Arc<OwnerProfile>, default_set: DimensionSet) -> Self {
        Self {
            owner,
            assembler: InsightAssembler::default(),
            default_set,
        }
    }

    pub fn handle(&self, query: GetInsightsQuery) -> GetInsightsResult {
        let set = query.dimension_set.unwrap_or(self.default_set);
        let insights = self.assembler.build_all(&self.owner, &query.visitor, set);
        let frameworks_used = query.visitor.filled();

        tracing::debug!(
            frameworks = frameworks_used.len(),
            insights = insights.len(),
            dimension_set = ?set,
            "assembled insights"
        );

        GetInsightsResult {
            owner_name: self.owner.name.clone(),
            dimension_set: set,
            frameworks_used,
            insights,
        }
    }
}
