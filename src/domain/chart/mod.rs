//! Chart Module - Radial chart geometry for the DISC circle and MBTI wheel.
//!
//! Pure functions of (center, radius, angle); the front end only draws.

mod geometry;
mod layout;

pub use geometry::{label_anchor, polar_to_cartesian, sector_path, Point, TextAnchor};
pub use layout::{
    disc_circle_layout, mbti_wheel_layout, ChartFrame, ChartLayout, ChartNode, ChartSector,
    MBTI_WHEEL_ORDER, NODE_STEP,
};
