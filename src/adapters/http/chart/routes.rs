//! Axum router configuration for chart endpoints.

use axum::{routing::get, Router};

use super::super::state::AppState;
use super::handlers::{disc_chart, mbti_chart};

/// # Routes
/// - `GET /chart/disc` - DISC circle layout
/// - `GET /chart/mbti` - MBTI quadra wheel layout
pub fn chart_routes() -> Router<AppState> {
    Router::new()
        .route("/chart/disc", get(disc_chart))
        .route("/chart/mbti", get(mbti_chart))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::state::test_support::test_state;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let app = chart_routes().with_state(test_state());
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn disc_chart_uses_default_frame() {
        let (status, json) = get_json("/chart/disc").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["frame"]["r"], 150.0);
        assert_eq!(json["nodes"].as_array().unwrap().len(), 16);
        assert_eq!(json["sectors"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn mbti_chart_honours_custom_frame() {
        let (status, json) = get_json("/chart/mbti?cx=100&cy=100&r=50").await;
        assert_eq!(status, StatusCode::OK);
        // first node sits at 12 o'clock
        assert_eq!(json["nodes"][0]["position"]["x"], 100.0);
        assert_eq!(json["nodes"][0]["position"]["y"], 50.0);
    }

    #[tokio::test]
    async fn non_positive_radius_is_rejected() {
        let (status, _) = get_json("/chart/disc?r=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
