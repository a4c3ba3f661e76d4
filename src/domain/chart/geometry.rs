//! Clock-angle geometry for radial charts.
//!
//! Angles are in degrees, 0° at 12 o'clock, increasing clockwise. SVG's y
//! axis points down, hence `y = cy - r·cos θ`.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// SVG `text-anchor` for a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Within this of zero, `sin θ` counts as the vertical axis.
const ANCHOR_EPSILON: f64 = 0.1;

pub fn polar_to_cartesian(cx: f64, cy: f64, r: f64, angle_deg: f64) -> Point {
    let theta = angle_deg.to_radians();
    Point {
        x: cx + r * theta.sin(),
        y: cy - r * theta.cos(),
    }
}

/// Pie slice from `start_deg` clockwise to `end_deg`.
pub fn sector_path(cx: f64, cy: f64, r: f64, start_deg: f64, end_deg: f64) -> String {
    let p1 = polar_to_cartesian(cx, cy, r, start_deg);
    let p2 = polar_to_cartesian(cx, cy, r, end_deg);
    let large_arc = u8::from(end_deg - start_deg > 180.0);
    format!(
        "M {} {} L {} {} A {} {} 0 {} 1 {} {} Z",
        fmt_coord(cx),
        fmt_coord(cy),
        fmt_coord(p1.x),
        fmt_coord(p1.y),
        fmt_coord(r),
        fmt_coord(r),
        large_arc,
        fmt_coord(p2.x),
        fmt_coord(p2.y)
    )
}

/// Right half of the circle anchors at the start, left half at the end.
pub fn label_anchor(angle_deg: f64) -> TextAnchor {
    let s = angle_deg.to_radians().sin();
    if s > ANCHOR_EPSILON {
        TextAnchor::Start
    } else if s < -ANCHOR_EPSILON {
        TextAnchor::End
    } else {
        TextAnchor::Middle
    }
}

/// Two decimals, trailing zeros trimmed, no negative zero.
fn fmt_coord(v: f64) -> String {
    let rounded = (v * 100.0).round() / 100.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let s = format!("{:.2}", rounded);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
