//! Axum router configuration for quiz endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::super::state::AppState;
use super::handlers::{get_questions, score_disc, score_enneagram, score_mbti};

/// # Routes
/// - `GET /quiz/:kind/questions` - Question bank and presentation order
/// - `POST /quiz/disc`, `/quiz/enneagram`, `/quiz/mbti` - Score answers
pub fn quiz_routes() -> Router<AppState> {
    Router::new()
        .route("/quiz/:kind/questions", get(get_questions))
        .route("/quiz/disc", post(score_disc))
        .route("/quiz/enneagram", post(score_enneagram))
        .route("/quiz/mbti", post(score_mbti))
}
