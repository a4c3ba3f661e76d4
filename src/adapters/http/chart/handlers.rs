//! HTTP handlers for chart layout endpoints.

use axum::extract::{Json, Query};
use serde::Deserialize;

use crate::domain::chart::{disc_circle_layout, mbti_wheel_layout, ChartFrame, ChartLayout};

use super::super::error::ApiError;

/// `?cx=&cy=&r=`; missing values fall back to the default frame.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FrameQuery {
    pub cx: Option<f64>,
    pub cy: Option<f64>,
    pub r: Option<f64>,
}

impl FrameQuery {
    fn frame(&self) -> Result<ChartFrame, ApiError> {
        let default = ChartFrame::default();
        let frame = ChartFrame {
            cx: self.cx.unwrap_or(default.cx),
            cy: self.cy.unwrap_or(default.cy),
            r: self.r.unwrap_or(default.r),
        };
        if !(frame.r > 0.0) || !frame.cx.is_finite() || !frame.cy.is_finite() || !frame.r.is_finite() {
            return Err(ApiError::bad_request("cx, cy must be finite and r positive"));
        }
        Ok(frame)
    }
}

/// GET /api/chart/disc
pub async fn disc_chart(Query(query): Query<FrameQuery>) -> Result<Json<ChartLayout>, ApiError> {
    Ok(Json(disc_circle_layout(query.frame()?)))
}

/// GET /api/chart/mbti
pub async fn mbti_chart(Query(query): Query<FrameQuery>) -> Result<Json<ChartLayout>, ApiError> {
    Ok(Json(mbti_wheel_layout(query.frame()?)))
}
