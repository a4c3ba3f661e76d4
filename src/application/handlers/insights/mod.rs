//! Insight handlers.

mod get_insights;

pub use get_insights::{GetInsightsHandler, GetInsightsQuery, GetInsightsResult};
