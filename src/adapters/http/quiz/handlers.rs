//! HTTP handlers for quiz endpoints.

use axum::extract::{Json, Path, Query, State};

use crate::application::handlers::{
    GetQuestionsQuery, QuestionSet, QuizKind, ScoreQuizCommand, ScoreQuizResult,
};

use super::super::error::ApiError;
use super::super::state::AppState;
use super::dto::{DiscAnswersRequest, EnneagramAnswersRequest, MbtiAnswersRequest, QuestionsQuery};

/// GET /api/quiz/:kind/questions
pub async fn get_questions(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(query): Query<QuestionsQuery>,
) -> Result<Json<QuestionSet>, ApiError> {
    let kind: QuizKind = kind.parse()?;
    let set = state.questions_handler().handle(GetQuestionsQuery {
        kind,
        seed: query.seed,
    });
    Ok(Json(set))
}

fn score(state: &AppState, cmd: ScoreQuizCommand) -> Result<Json<ScoreQuizResult>, ApiError> {
    Ok(Json(state.score_quiz_handler().handle(cmd)?))
}

/// POST /api/quiz/disc
pub async fn score_disc(
    State(state): State<AppState>,
    Json(request): Json<DiscAnswersRequest>,
) -> Result<Json<ScoreQuizResult>, ApiError> {
    score(&state, ScoreQuizCommand::Disc(request.answers))
}

/// POST /api/quiz/enneagram
pub async fn score_enneagram(
    State(state): State<AppState>,
    Json(request): Json<EnneagramAnswersRequest>,
) -> Result<Json<ScoreQuizResult>, ApiError> {
    score(&state, ScoreQuizCommand::Enneagram(request.answers))
}

/// POST /api/quiz/mbti
pub async fn score_mbti(
    State(state): State<AppState>,
    Json(request): Json<MbtiAnswersRequest>,
) -> Result<Json<ScoreQuizResult>, ApiError> {
    score(&state, ScoreQuizCommand::Mbti(request.answers))
}
