//! Framework lenses: one strategy per framework that turns a pair of
//! profiles into text for a collaboration dimension.

use serde::{Deserialize, Serialize};

use super::dimension::CollaborationDimension;
use crate::domain::compatibility::AlignmentLevel;
use crate::domain::frameworks::{FrameworkId, FrameworkProfile, OwnerProfile};

/// Who a tip is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TipAudience {
    #[serde(rename = "visitor")]
    Visitor,
    /// The site owner.
    #[serde(rename = "cain")]
    Owner,
}

/// A single actionable suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tip {
    #[serde(rename = "for")]
    pub audience: TipAudience,
    pub text: String,
}

impl Tip {
    pub fn visitor(text: impl Into<String>) -> Self {
        Self {
            audience: TipAudience::Visitor,
            text: text.into(),
        }
    }

    pub fn owner(text: impl Into<String>) -> Self {
        Self {
            audience: TipAudience::Owner,
            text: text.into(),
        }
    }
}

/// What one framework adds to one dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contribution {
    pub summary: String,
    pub narrative: String,
    pub tips: Vec<Tip>,
    pub watch_out: Option<String>,
    pub alignment: Option<AlignmentLevel>,
}

impl Contribution {
    pub fn new(summary: impl Into<String>, narrative: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            narrative: narrative.into(),
            ..Default::default()
        }
    }

    pub fn with_tip(mut self, tip: Tip) -> Self {
        self.tips.push(tip);
        self
    }

    pub fn with_tips(mut self, tips: impl IntoIterator<Item = Tip>) -> Self {
        self.tips.extend(tips);
        self
    }

    pub fn with_watch_out(mut self, warning: Option<String>) -> Self {
        self.watch_out = warning;
        self
    }

    pub fn with_alignment(mut self, alignment: AlignmentLevel) -> Self {
        self.alignment = Some(alignment);
        self
    }
}

/// Strategy for one framework.
///
/// `contribute` returns `None` when either side lacks the framework's data
/// or the framework has nothing to say about the dimension.
pub trait FrameworkLens: Send + Sync {
    fn framework(&self) -> FrameworkId;

    fn contribute(
        &self,
        dimension: CollaborationDimension,
        owner: &OwnerProfile,
        visitor: &FrameworkProfile,
    ) -> Option<Contribution>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tip_audience_serializes_as_for() {
        let json = serde_json::to_value(Tip::owner("Slow down")).unwrap();
        assert_eq!(json["for"], "cain");
        assert_eq!(json["text"], "Slow down");
        let json = serde_json::to_value(Tip::visitor("Lead with results")).unwrap();
        assert_eq!(json["for"], "visitor");
    }

    #[test]
    fn contribution_builder_collects_parts() {
        let c = Contribution::new("Summary", "Narrative")
            .with_tip(Tip::visitor("a"))
            .with_tips(vec![Tip::owner("b")])
            .with_watch_out(Some("careful".into()))
            .with_alignment(AlignmentLevel::Low);
        assert_eq!(c.tips.len(), 2);
        assert_eq!(c.watch_out.as_deref(), Some("careful"));
        assert_eq!(c.alignment, Some(AlignmentLevel::Low));
    }
}
