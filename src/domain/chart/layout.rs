//! Node and sector layouts for the DISC circle and the MBTI wheel.

use serde::Serialize;

use super::geometry::{label_anchor, polar_to_cartesian, sector_path, Point, TextAnchor};
use crate::domain::frameworks::disc::{self, DISC_BLENDS};
use crate::domain::frameworks::{DiscStyle, MbtiType, Quadra};

/// Labels sit this far outside the node ring, as a fraction of the radius.
const LABEL_OFFSET: f64 = 0.15;

/// Degrees between adjacent nodes on both charts.
pub const NODE_STEP: f64 = 22.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartFrame {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self {
            cx: 200.0,
            cy: 200.0,
            r: 150.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartNode {
    pub code: String,
    pub label: String,
    pub angle: f64,
    pub position: Point,
    pub label_position: Point,
    pub anchor: TextAnchor,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSector {
    pub label: String,
    pub start: f64,
    pub end: f64,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub frame: ChartFrame,
    pub nodes: Vec<ChartNode>,
    pub sectors: Vec<ChartSector>,
}

fn node(frame: &ChartFrame, code: &str, label: &str, angle: f64) -> ChartNode {
    ChartNode {
        code: code.to_string(),
        label: label.to_string(),
        angle,
        position: polar_to_cartesian(frame.cx, frame.cy, frame.r, angle),
        label_position: polar_to_cartesian(
            frame.cx,
            frame.cy,
            frame.r * (1.0 + LABEL_OFFSET),
            angle,
        ),
        anchor: label_anchor(angle),
    }
}

fn sector(frame: &ChartFrame, label: &str, start: f64, end: f64) -> ChartSector {
    ChartSector {
        label: label.to_string(),
        start,
        end,
        path: sector_path(frame.cx, frame.cy, frame.r, start, end),
    }
}

/// 16 blend positions plus one 90° quadrant per style, centred on the style.
pub fn disc_circle_layout(frame: ChartFrame) -> ChartLayout {
    let nodes = DISC_BLENDS
        .iter()
        .map(|entry| node(&frame, entry.code, entry.name, entry.angle))
        .collect();
    let sectors = DiscStyle::ALL
        .iter()
        .filter_map(|style| {
            let centre = disc::get(&style.to_string())?.angle;
            Some(sector(&frame, style.name(), centre - 45.0, centre + 45.0))
        })
        .collect();
    ChartLayout {
        frame,
        nodes,
        sectors,
    }
}

/// Wheel order: quadras Alpha to Delta, four types each.
pub const MBTI_WHEEL_ORDER: [MbtiType; 16] = [
    MbtiType::Entp,
    MbtiType::Isfj,
    MbtiType::Esfj,
    MbtiType::Intp,
    MbtiType::Enfj,
    MbtiType::Istp,
    MbtiType::Estp,
    MbtiType::Infj,
    MbtiType::Entj,
    MbtiType::Isfp,
    MbtiType::Esfp,
    MbtiType::Intj,
    MbtiType::Estj,
    MbtiType::Infp,
    MbtiType::Enfp,
    MbtiType::Istj,
];

const QUADRAS: [Quadra; 4] = [Quadra::Alpha, Quadra::Beta, Quadra::Gamma, Quadra::Delta];

/// 16 types 22.5° apart, with one sector spanning each quadra.
pub fn mbti_wheel_layout(frame: ChartFrame) -> ChartLayout {
    let nodes = MBTI_WHEEL_ORDER
        .iter()
        .enumerate()
        .map(|(i, t)| node(&frame, t.code(), t.entry().nickname, i as f64 * NODE_STEP))
        .collect();
    let sectors = QUADRAS
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let start = i as f64 * 4.0 * NODE_STEP - NODE_STEP / 2.0;
            sector(&frame, &q.to_string(), start, start + 4.0 * NODE_STEP)
        })
        .collect();
    ChartLayout {
        frame,
        nodes,
        sectors,
    }
}
