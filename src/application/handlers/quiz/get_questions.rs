//! GetQuestionsHandler - Question banks in presentation order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;
use crate::domain::quiz::{
    DiscQuestion, EnneagramQuestion, MbtiQuestion, QuizSession, DISC_QUESTIONS,
    ENNEAGRAM_QUESTIONS, MBTI_QUESTIONS,
};

/// The three self-assessments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizKind {
    Disc,
    Enneagram,
    Mbti,
}

impl fmt::Display for QuizKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuizKind::Disc => "disc",
            QuizKind::Enneagram => "enneagram",
            QuizKind::Mbti => "mbti",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for QuizKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "disc" => Ok(Self::Disc),
            "enneagram" => Ok(Self::Enneagram),
            "mbti" => Ok(Self::Mbti),
            _ => Err(ValidationError::unknown_code("quiz", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GetQuestionsQuery {
    pub kind: QuizKind,
    /// Shuffle seed; DISC only. A random seed is drawn when absent.
    pub seed: Option<u64>,
}

/// A question bank plus the order to present it in.
///
/// `order` holds bank indexes; answers are always submitted in bank order.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionSet {
    Disc {
        seed: u64,
        order: Vec<usize>,
        questions: &'static [DiscQuestion],
    },
    Enneagram {
        order: Vec<usize>,
        questions: &'static [EnneagramQuestion],
    },
    Mbti {
        order: Vec<usize>,
        questions: &'static [MbtiQuestion],
    },
}

impl QuestionSet {
    pub fn order(&self) -> &[usize] {
        match self {
            QuestionSet::Disc { order, .. }
            | QuestionSet::Enneagram { order, .. }
            | QuestionSet::Mbti { order, .. } => order,
        }
    }
}

/// Drawn seeds stay below 2^53 so they survive a JSON number round trip in
/// a browser.
pub const MAX_DRAWN_SEED: u64 = 1 << 53;

fn draw_seed() -> u64 {
    rand::random::<u64>() >> (u64::BITS - MAX_DRAWN_SEED.trailing_zeros())
}

#[derive(Debug, Default)]
pub struct GetQuestionsHandler;

impl GetQuestionsHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: GetQuestionsQuery) -> QuestionSet {
        match query.kind {
            QuizKind::Disc => {
                let seed = query.seed.unwrap_or_else(draw_seed);
                let session = QuizSession::<()>::shuffled(DISC_QUESTIONS.len(), seed);
                QuestionSet::Disc {
                    seed,
                    order: session.order().to_vec(),
                    questions: &DISC_QUESTIONS,
                }
            }
            QuizKind::Enneagram => {
                let questions: &'static [EnneagramQuestion] = &ENNEAGRAM_QUESTIONS;
                QuestionSet::Enneagram {
                    order: QuizSession::<()>::new(questions.len()).order().to_vec(),
                    questions,
                }
            }
            QuizKind::Mbti => QuestionSet::Mbti {
                order: QuizSession::<()>::new(MBTI_QUESTIONS.len()).order().to_vec(),
                questions: &MBTI_QUESTIONS,
            },
        }
    }
}
