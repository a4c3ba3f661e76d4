//! Quiz handlers.

mod get_questions;
mod score_quiz;

pub use get_questions::{GetQuestionsHandler, GetQuestionsQuery, QuestionSet, QuizKind};
pub use score_quiz::{QuizOutcome, ScoreQuizCommand, ScoreQuizHandler, ScoreQuizResult};
