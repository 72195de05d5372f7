//! Multi-axis risk radar.
//!
//! Axis `i` of `n` sits at `-90 + i * 360 / n` degrees, starting at the top
//! and moving clockwise. Unlike the gauge, Y is not inverted here: a point at
//! angle θ is `center + d * (cos θ, sin θ)`.

use crate::config::RadarConfig;
use crate::geometry::Point;
use crate::models::RadarMetric;
use serde::{Deserialize, Serialize};

pub const RADAR_START_ANGLE: f64 = -90.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarVertex {
    pub label: String,
    /// Metric value after clamping to 0..=100.
    pub value: f64,
    pub angle: f64,
    pub point: Point,
    pub label_anchor: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarAxis {
    pub angle: f64,
    pub start: Point,
    pub end: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarGeometry {
    pub center: Point,
    pub radius: f64,
    pub vertices: Vec<RadarVertex>,
    pub axes: Vec<RadarAxis>,
    /// One closed ring per configured grid level, innermost first.
    pub grid: Vec<Vec<Point>>,
}

impl RadarGeometry {
    pub fn polygon(&self) -> Vec<Point> {
        self.vertices.iter().map(|v| v.point).collect()
    }

    /// Polygon vertices in SVG `points` attribute form.
    pub fn to_svg_points(&self) -> String {
        self.vertices
            .iter()
            .map(|v| format!("{:.3},{:.3}", v.point.x, v.point.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub fn axis_angle(index: usize, count: usize) -> f64 {
    if count == 0 {
        return RADAR_START_ANGLE;
    }
    RADAR_START_ANGLE + index as f64 * 360.0 / count as f64
}

/// Canvas point `distance` from `center` at `angle` degrees, Y not inverted.
pub fn radar_point(center: Point, distance: f64, angle: f64) -> Point {
    let theta = angle.to_radians();
    Point::new(
        center.x + distance * theta.cos(),
        center.y + distance * theta.sin(),
    )
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

pub fn build_radar(metrics: &[RadarMetric], config: &RadarConfig) -> RadarGeometry {
    let count = metrics.len();
    let center = config.center;
    let radius = config.radius;

    let vertices = metrics
        .iter()
        .enumerate()
        .map(|(i, metric)| {
            let angle = axis_angle(i, count);
            let value = clamp_percent(metric.value);
            RadarVertex {
                label: metric.label.clone(),
                value,
                angle,
                point: radar_point(center, value / 100.0 * radius, angle),
                label_anchor: radar_point(center, config.label_factor * radius, angle),
            }
        })
        .collect();

    let axes = (0..count)
        .map(|i| {
            let angle = axis_angle(i, count);
            RadarAxis {
                angle,
                start: center,
                end: radar_point(center, radius, angle),
            }
        })
        .collect();

    let grid = if count == 0 {
        Vec::new()
    } else {
        config
            .grid_levels
            .iter()
            .map(|&level| {
                let distance = clamp_percent(level) / 100.0 * radius;
                (0..count)
                    .map(|i| radar_point(center, distance, axis_angle(i, count)))
                    .collect()
            })
            .collect()
    };

    RadarGeometry {
        center,
        radius,
        vertices,
        axes,
        grid,
    }
}
