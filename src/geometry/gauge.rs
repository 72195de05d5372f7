//! Semicircular score gauge.
//!
//! The dial runs from 180° (score -1, Strong Sell, left) to 0° (score +1,
//! Strong Buy, right) across five equal 36° zones. Canvas Y points down, so a
//! point at angle θ is `center + r * (cos θ, -sin θ)`.

use crate::config::{GaugeConfig, Palette};
use crate::geometry::{ArcPath, Point};
use crate::models::{ClassifiedSignal, SignalLabel};
use serde::{Deserialize, Serialize};

pub const GAUGE_START_ANGLE: f64 = 180.0;
pub const GAUGE_END_ANGLE: f64 = 0.0;
pub const ZONE_COUNT: usize = 5;
pub const ZONE_SPAN: f64 = (GAUGE_START_ANGLE - GAUGE_END_ANGLE) / ZONE_COUNT as f64;

/// A colored arc between two angles, start above end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcSegment {
    pub start_angle: f64,
    pub end_angle: f64,
    pub radius: f64,
    pub color: String,
    pub path: ArcPath,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeZone {
    pub label: SignalLabel,
    pub arc: ArcSegment,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugeTick {
    pub angle: f64,
    pub inner: Point,
    pub outer: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Needle {
    pub angle: f64,
    pub pivot: Point,
    pub tip: Point,
}

/// Everything needed to draw one gauge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeGeometry {
    pub zones: Vec<GaugeZone>,
    pub ticks: Vec<GaugeTick>,
    pub needle: Needle,
    pub label: SignalLabel,
    pub score: f64,
    pub color: String,
}

/// Needle angle in degrees for a score. Scores outside [-1, 1] are pinned to
/// the ends of the dial and NaN points straight up.
pub fn needle_angle(score: f64) -> f64 {
    let score = if score.is_nan() {
        0.0
    } else {
        score.clamp(-1.0, 1.0)
    };
    GAUGE_START_ANGLE - ((score + 1.0) / 2.0) * (GAUGE_START_ANGLE - GAUGE_END_ANGLE)
}

/// Canvas point at `angle` degrees on a circle of `radius` around `center`,
/// with Y inverted.
pub fn gauge_point(center: Point, radius: f64, angle: f64) -> Point {
    let theta = angle.to_radians();
    Point::new(
        center.x + radius * theta.cos(),
        center.y - radius * theta.sin(),
    )
}

/// Arc from `start_angle` down to `end_angle`.
///
/// The sweep always follows decreasing angles, which is clockwise on a
/// Y-down canvas. The large-arc flag is set only for spans above 180°.
pub fn describe_arc(center: Point, radius: f64, start_angle: f64, end_angle: f64) -> ArcPath {
    ArcPath {
        start: gauge_point(center, radius, start_angle),
        end: gauge_point(center, radius, end_angle),
        radius,
        large_arc: (start_angle - end_angle) > 180.0,
        sweep: true,
    }
}

/// Zone boundary angles, left to right: 180, 144, 108, 72, 36, 0.
pub fn zone_boundaries() -> [f64; ZONE_COUNT + 1] {
    let mut angles = [0.0; ZONE_COUNT + 1];
    for (i, angle) in angles.iter_mut().enumerate() {
        *angle = GAUGE_START_ANGLE - ZONE_SPAN * i as f64;
    }
    angles
}

/// Five colored zones, Strong Sell to Strong Buy. The stroke is centered on
/// the arc so its outer edge meets the gauge radius.
pub fn zone_arcs(config: &GaugeConfig, palette: &Palette) -> Vec<GaugeZone> {
    let radius = config.radius - config.zone_width / 2.0;
    let bounds = zone_boundaries();

    SignalLabel::ZONE_ORDER
        .iter()
        .zip(bounds.windows(2))
        .map(|(&label, pair)| {
            let (start_angle, end_angle) = (pair[0], pair[1]);
            GaugeZone {
                label,
                arc: ArcSegment {
                    start_angle,
                    end_angle,
                    radius,
                    color: palette.color(label).to_string(),
                    path: describe_arc(config.center, radius, start_angle, end_angle),
                },
            }
        })
        .collect()
}

/// Tick marks at each zone boundary, pointing outwards from the rim.
pub fn tick_marks(config: &GaugeConfig) -> Vec<GaugeTick> {
    zone_boundaries()
        .iter()
        .map(|&angle| GaugeTick {
            angle,
            inner: gauge_point(config.center, config.radius, angle),
            outer: gauge_point(config.center, config.radius + config.tick_length, angle),
        })
        .collect()
}

pub fn needle(score: f64, config: &GaugeConfig) -> Needle {
    let angle = needle_angle(score);
    Needle {
        angle,
        pivot: config.center,
        tip: gauge_point(config.center, config.needle_length, angle),
    }
}

/// Full gauge for a classified signal.
pub fn build_gauge(
    signal: &ClassifiedSignal,
    config: &GaugeConfig,
    palette: &Palette,
) -> GaugeGeometry {
    GaugeGeometry {
        zones: zone_arcs(config, palette),
        ticks: tick_marks(config),
        needle: needle(signal.score, config),
        label: signal.label,
        score: signal.score,
        color: signal.color.clone(),
    }
}
