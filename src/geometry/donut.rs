//! Regime probability donut.
//!
//! Segments are stroke dashes around a full circle: each one is a
//! `(length, gap, offset)` triple along the circumference, laid out clockwise
//! from the top (-90°).

use crate::config::DonutConfig;
use crate::geometry::Point;
use crate::models::{Regime, RegimeProbabilities};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

pub const DONUT_START_ANGLE: f64 = -90.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonutSegment {
    pub regime: Regime,
    /// Normalized probability, 0..=1.
    pub probability: f64,
    pub color: String,
    /// Dash length along the circumference.
    pub length: f64,
    /// Remainder of the circumference after the dash.
    pub gap: f64,
    /// Sum of the lengths of all preceding segments.
    pub offset: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl DonutSegment {
    /// Value for an SVG `stroke-dasharray` attribute.
    pub fn dash_array(&self) -> String {
        format!("{:.3} {:.3}", self.length, self.gap)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CenterLabel {
    pub regime: Regime,
    pub percent: u32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonutGeometry {
    pub center: Point,
    pub radius: f64,
    pub stroke_width: f64,
    pub circumference: f64,
    pub start_angle: f64,
    pub segments: Vec<DonutSegment>,
    pub center_label: Option<CenterLabel>,
}

pub fn build_donut(probabilities: &RegimeProbabilities, config: &DonutConfig) -> DonutGeometry {
    let circumference = if config.radius.is_finite() && config.radius > 0.0 {
        2.0 * PI * config.radius
    } else {
        0.0
    };
    let total: f64 = Regime::ALL.iter().map(|&r| probabilities.get(r)).sum();

    let mut geometry = DonutGeometry {
        center: config.center,
        radius: config.radius,
        stroke_width: config.stroke_width,
        circumference,
        start_angle: DONUT_START_ANGLE,
        segments: Vec::new(),
        center_label: None,
    };

    if !(total.is_finite() && total > 0.0) {
        return geometry;
    }

    let mut offset = 0.0;
    let mut cumulative = 0.0;
    let mut leader: Option<(Regime, f64)> = None;
    for regime in Regime::ALL {
        let probability = probabilities.get(regime) / total;
        let length = probability * circumference;
        let start_angle = DONUT_START_ANGLE + cumulative * 360.0;
        let end_angle = DONUT_START_ANGLE + (cumulative + probability) * 360.0;

        geometry.segments.push(DonutSegment {
            regime,
            probability,
            color: config.colors.color(regime).to_string(),
            length,
            gap: circumference - length,
            offset,
            start_angle,
            end_angle,
        });
        offset += length;
        cumulative += probability;

        // Strict comparison: ties go to the earlier regime.
        if leader.map_or(true, |(_, best)| probability > best) {
            leader = Some((regime, probability));
        }
    }

    geometry.center_label = leader.map(|(regime, probability)| CenterLabel {
        regime,
        percent: (probability * 100.0).round() as u32,
        color: config.colors.color(regime).to_string(),
    });

    geometry
}
