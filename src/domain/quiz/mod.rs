//! Quiz Module - Question banks and scorers for the DISC, Enneagram, and
//! MBTI self-assessments.
//!
//! Scorers take answers in bank order and are pure. `QuizSession` tracks
//! presentation order and back/forward navigation; only the DISC quiz is
//! shuffled, with a caller-supplied seed.

mod disc_quiz;
mod enneagram_quiz;
mod error;
mod mbti_quiz;
mod session;

pub use disc_quiz::{
    map_to_blend_code, normalize, raw_totals, score_disc, DiscAnswer, DiscQuestion,
    DiscQuizResult, DiscScores, DiscWord, DISC_QUESTIONS, EQUAL_GAP, PURE_GAP,
};
pub use enneagram_quiz::{
    score_enneagram, tally, Choice, EnneagramQuestion, EnneagramQuizResult, EnneagramStatement,
    ENNEAGRAM_QUESTIONS,
};
pub use error::QuizError;
pub use mbti_quiz::{
    confidence, score_mbti, AxisResult, Identity, MbtiAxis, MbtiQuestion, MbtiQuizResult,
    MBTI_QUESTIONS,
};
pub use session::QuizSession;
