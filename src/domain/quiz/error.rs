//! Quiz errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised while answering or scoring a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("Quiz incomplete: {answered} of {total} questions answered")]
    Incomplete { answered: usize, total: usize },

    #[error("Invalid answer to question {question}: {reason}")]
    InvalidAnswer { question: usize, reason: String },

    #[error("Quiz is already finished")]
    Finished,
}

impl QuizError {
    pub fn invalid_answer(question: usize, reason: impl Into<String>) -> Self {
        QuizError::InvalidAnswer {
            question,
            reason: reason.into(),
        }
    }

    /// Checks that exactly `total` answers were given.
    pub fn check_count(answered: usize, total: usize) -> Result<(), QuizError> {
        if answered == total {
            Ok(())
        } else {
            Err(QuizError::Incomplete { answered, total })
        }
    }
}

impl From<QuizError> for DomainError {
    fn from(err: QuizError) -> Self {
        let code = match err {
            QuizError::Incomplete { .. } | QuizError::Finished => ErrorCode::QuizIncomplete,
            QuizError::InvalidAnswer { .. } => ErrorCode::InvalidAnswer,
        };
        DomainError::new(code, err.to_string())
    }
}
