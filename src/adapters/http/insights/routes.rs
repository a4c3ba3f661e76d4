//! Axum router configuration for insight endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::super::state::AppState;
use super::handlers::{get_owner, post_insights};

/// # Routes
/// - `GET /owner` - Owner profile with registry entries
/// - `POST /insights` - Insight cards for a visitor
pub fn insights_routes() -> Router<AppState> {
    Router::new()
        .route("/owner", get(get_owner))
        .route("/insights", post(post_insights))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::state::test_support::test_state;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn post_json(uri: &str, body: &str) -> (StatusCode, Value) {
        let app = insights_routes().with_state(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn disc_s_visitor_gets_low_communication_alignment() {
        let (status, json) = post_json("/insights", r#"{"visitor": {"disc": "S"}}"#).await;

        assert_eq!(status, StatusCode::OK);
        let communication = json["insights"]
            .as_array()
            .unwrap()
            .iter()
            .find(|i| i["id"] == "communication")
            .unwrap();
        assert_eq!(communication["alignment"], "low");
        assert_eq!(communication["sources_used"], 1);
    }

    #[tokio::test]
    async fn empty_visitor_returns_no_cards() {
        let (status, json) = post_json("/insights", "{}").await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["insights"].as_array().unwrap().is_empty());
        assert_eq!(json["dimension_set"], "full");
    }

    #[tokio::test]
    async fn owner_endpoint_returns_profile() {
        let app = insights_routes().with_state(test_state());
        let response = app
            .oneshot(Request::builder().uri("/owner").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["profile"]["mbti"], "ENTJ");
    }
}
