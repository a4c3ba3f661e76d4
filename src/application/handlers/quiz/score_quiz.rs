//! ScoreQuizHandler - Scores a completed quiz and returns a profile patch.

use serde::Serialize;

use crate::domain::frameworks::FrameworkProfile;
use crate::domain::quiz::{
    score_disc, score_enneagram, score_mbti, Choice, DiscAnswer, DiscQuizResult,
    EnneagramQuizResult, MbtiQuizResult, QuizError,
};

/// Answers in bank order.
#[derive(Debug, Clone)]
pub enum ScoreQuizCommand {
    Disc(Vec<DiscAnswer>),
    Enneagram(Vec<Choice>),
    Mbti(Vec<u8>),
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuizOutcome {
    Disc(DiscQuizResult),
    Enneagram(EnneagramQuizResult),
    Mbti(MbtiQuizResult),
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreQuizResult {
    pub result: QuizOutcome,
    /// Visitor profile holding only the scored framework, for merging.
    pub profile: FrameworkProfile,
}

#[derive(Debug, Default)]
pub struct ScoreQuizHandler;

impl ScoreQuizHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: ScoreQuizCommand) -> Result<ScoreQuizResult, QuizError> {
        let mut profile = FrameworkProfile::default();
        let result = match cmd {
            ScoreQuizCommand::Disc(answers) => {
                let scored = score_disc(&answers)?;
                profile.disc = Some(scored.code);
                QuizOutcome::Disc(scored)
            }
            ScoreQuizCommand::Enneagram(answers) => {
                let scored = score_enneagram(&answers)?;
                profile.enneagram = Some(scored.profile);
                QuizOutcome::Enneagram(scored)
            }
            ScoreQuizCommand::Mbti(responses) => {
                let scored = score_mbti(&responses)?;
                profile.mbti = Some(scored.mbti);
                QuizOutcome::Mbti(scored)
            }
        };

        tracing::info!(frameworks = ?profile.filled(), "quiz scored");
        Ok(ScoreQuizResult { result, profile })
    }
}
