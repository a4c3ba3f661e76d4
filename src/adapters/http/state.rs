//! Shared application state for all HTTP handlers.

use std::sync::Arc;

use crate::application::handlers::{
    CompareDrivesHandler, CompareMbtiHandler, GetInsightsHandler, GetQuestionsHandler,
    LookupPairingHandler, ScoreQuizHandler, SubmitContactHandler,
};
use crate::config::SiteInfo;
use crate::domain::frameworks::OwnerProfile;
use crate::domain::insights::DimensionSet;
use crate::ports::ContactRelay;

/// Cloned for each request; every dependency is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub owner: Arc<OwnerProfile>,
    pub relay: Arc<dyn ContactRelay>,
    pub fallback_email: Arc<str>,
    pub site: Arc<SiteInfo>,
    pub dimension_set: DimensionSet,
}

impl AppState {
    pub fn new(
        owner: OwnerProfile,
        relay: Arc<dyn ContactRelay>,
        fallback_email: impl Into<String>,
        site: SiteInfo,
        dimension_set: DimensionSet,
    ) -> Self {
        Self {
            owner: Arc::new(owner),
            relay,
            fallback_email: Arc::from(fallback_email.into()),
            site: Arc::new(site),
            dimension_set,
        }
    }

    /// Create handlers on demand from the shared state.
    pub fn insights_handler(&self) -> GetInsightsHandler {
        GetInsightsHandler::new(self.owner.clone(), self.dimension_set)
    }

    pub fn compare_mbti_handler(&self) -> CompareMbtiHandler {
        CompareMbtiHandler::new()
    }

    pub fn lookup_pairing_handler(&self) -> LookupPairingHandler {
        LookupPairingHandler::new()
    }

    pub fn compare_drives_handler(&self) -> CompareDrivesHandler {
        CompareDrivesHandler::new(self.owner.clone())
    }

    pub fn questions_handler(&self) -> GetQuestionsHandler {
        GetQuestionsHandler::new()
    }

    pub fn score_quiz_handler(&self) -> ScoreQuizHandler {
        ScoreQuizHandler::new()
    }

    pub fn submit_contact_handler(&self) -> SubmitContactHandler {
        SubmitContactHandler::new(self.relay.clone(), self.fallback_email.to_string())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::adapters::contact::InMemoryContactRelay;

    pub fn test_state() -> AppState {
        test_state_with_relay(Arc::new(InMemoryContactRelay::new()))
    }

    pub fn test_state_with_relay(relay: Arc<dyn ContactRelay>) -> AppState {
        AppState::new(
            OwnerProfile::default(),
            relay,
            "cain@example.com",
            SiteInfo {
                title: "Profile Compass".to_string(),
                description: "Compare profiles".to_string(),
                dashboards: vec!["https://dash.example/one".to_string()],
            },
            DimensionSet::Full,
        )
    }
}
