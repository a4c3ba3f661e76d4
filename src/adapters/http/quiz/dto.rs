//! HTTP DTOs for quiz endpoints.

use serde::Deserialize;

use crate::domain::quiz::{Choice, DiscAnswer};

/// `?seed=` for question order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionsQuery {
    pub seed: Option<u64>,
}

/// Answers in bank order, not presentation order.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswersRequest<A> {
    pub answers: Vec<A>,
}

pub type DiscAnswersRequest = AnswersRequest<DiscAnswer>;
pub type EnneagramAnswersRequest = AnswersRequest<Choice>;
pub type MbtiAnswersRequest = AnswersRequest<u8>;
