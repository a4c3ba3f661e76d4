//! CompareMbtiHandler - Score and narrative for two MBTI types.

use serde::Serialize;

use crate::domain::compatibility::{
    compare_dichotomies, generate_interaction, CompatibilityScore, DichotomyComparison,
    MbtiCompatibility, MbtiInteraction,
};
use crate::domain::foundation::DomainError;
use crate::domain::frameworks::MbtiType;

#[derive(Debug, Clone)]
pub struct CompareMbtiQuery {
    pub a: String,
    pub b: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MbtiComparison {
    pub a: MbtiType,
    pub b: MbtiType,
    #[serde(flatten)]
    pub compatibility: CompatibilityScore,
    pub shadow_pair: bool,
    pub interaction: MbtiInteraction,
    pub dichotomies: Vec<DichotomyComparison>,
}

/// Stateless handler; codes are validated here rather than defaulted.
#[derive(Debug, Default)]
pub struct CompareMbtiHandler;

impl CompareMbtiHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: CompareMbtiQuery) -> Result<MbtiComparison, DomainError> {
        let a: MbtiType = query.a.parse()?;
        let b: MbtiType = query.b.parse()?;

        Ok(MbtiComparison {
            a,
            b,
            compatibility: MbtiCompatibility::score(a, b),
            shadow_pair: MbtiCompatibility::is_shadow_pair(a, b),
            interaction: generate_interaction(a, b),
            dichotomies: compare_dichotomies(a, b),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::compatibility::CompatibilityTier;
    use crate::domain::foundation::ErrorCode;

    fn query(a: &str, b: &str) -> CompareMbtiQuery {
        CompareMbtiQuery {
            a: a.to_string(),
            b: b.to_string(),
        }
    }

    #[test]
    fn same_type_scores_excellent() {
        let result = CompareMbtiHandler::new().handle(query("entj", "ENTJ")).unwrap();
        assert_eq!(result.compatibility.score, 84);
        assert_eq!(result.compatibility.tier, CompatibilityTier::Excellent);
        assert_eq!(result.dichotomies.len(), 4);
        assert!(!result.shadow_pair);
    }

    #[test]
    fn shadow_pair_is_flagged() {
        let result = CompareMbtiHandler::new().handle(query("ENTJ", "ISFP")).unwrap();
        assert!(result.shadow_pair);
    }

    #[test]
    fn unknown_code_is_rejected() {
        let err = CompareMbtiHandler::new().handle(query("XXXX", "ENTJ")).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownCode);
    }
}
