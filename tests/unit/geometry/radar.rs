//! Unit tests for radar geometry

use stockdial::config::RadarConfig;
use stockdial::geometry::radar::{axis_angle, build_radar, radar_point};
use stockdial::geometry::Point;
use stockdial::models::RadarMetric;

const EPS: f64 = 1e-9;

fn metrics(values: &[f64]) -> Vec<RadarMetric> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| RadarMetric::new(format!("M{}", i), v))
        .collect()
}

#[test]
fn test_axis_angles() {
    let angles: Vec<f64> = (0..4).map(|i| axis_angle(i, 4)).collect();
    assert_eq!(angles, vec![-90.0, 0.0, 90.0, 180.0]);
    assert_eq!(axis_angle(1, 3), 30.0);
}

#[test]
fn test_radar_point_does_not_invert_y() {
    let center = Point::new(0.0, 0.0);
    let below = radar_point(center, 10.0, 90.0);
    assert!(below.x.abs() < EPS);
    assert!((below.y - 10.0).abs() < EPS);
    let top = radar_point(center, 10.0, -90.0);
    assert!((top.y + 10.0).abs() < EPS);
}

#[test]
fn test_four_full_metrics() {
    let config = RadarConfig::default();
    let radar = build_radar(&metrics(&[100.0, 100.0, 100.0, 100.0]), &config);

    assert_eq!(radar.vertices.len(), 4);
    let angles: Vec<f64> = radar.vertices.iter().map(|v| v.angle).collect();
    assert_eq!(angles, vec![-90.0, 0.0, 90.0, 180.0]);
    for vertex in &radar.vertices {
        assert!((crate::distance(vertex.point, config.center) - config.radius).abs() < EPS);
        assert!(
            (crate::distance(vertex.label_anchor, config.center) - 1.2 * config.radius).abs() < EPS
        );
    }
    // First axis points up on screen.
    let top = radar.vertices[0].point;
    assert!((top.x - config.center.x).abs() < EPS);
    assert!((top.y - (config.center.y - config.radius)).abs() < EPS);
    // Second axis points right.
    let right = radar.vertices[1].point;
    assert!((right.x - (config.center.x + config.radius)).abs() < EPS);
}

#[test]
fn test_partial_values_scale_distance() {
    let config = RadarConfig::default();
    let radar = build_radar(&metrics(&[50.0, 0.0, 25.0]), &config);
    let distances: Vec<f64> = radar
        .vertices
        .iter()
        .map(|v| crate::distance(v.point, config.center))
        .collect();
    assert!((distances[0] - config.radius * 0.5).abs() < EPS);
    assert!(distances[1].abs() < EPS);
    assert!((distances[2] - config.radius * 0.25).abs() < EPS);
}

#[test]
fn test_values_are_clamped() {
    let config = RadarConfig::default();
    let radar = build_radar(&metrics(&[150.0, -20.0, f64::NAN]), &config);
    assert_eq!(radar.vertices[0].value, 100.0);
    assert_eq!(radar.vertices[1].value, 0.0);
    assert_eq!(radar.vertices[2].value, 0.0);
    assert!(radar.vertices.iter().all(|v| v.point.x.is_finite() && v.point.y.is_finite()));
}

#[test]
fn test_empty_metrics() {
    let radar = build_radar(&[], &RadarConfig::default());
    assert!(radar.vertices.is_empty());
    assert!(radar.axes.is_empty());
    assert!(radar.grid.is_empty());
    assert_eq!(radar.to_svg_points(), "");
}

#[test]
fn test_grid_and_axes() {
    let config = RadarConfig::default();
    let radar = build_radar(&metrics(&[10.0, 20.0, 30.0, 40.0, 50.0]), &config);
    assert_eq!(radar.axes.len(), 5);
    assert_eq!(radar.grid.len(), config.grid_levels.len());
    for ring in &radar.grid {
        assert_eq!(ring.len(), 5);
    }
    let outer = radar.grid.last().unwrap();
    assert!((crate::distance(outer[0], config.center) - config.radius).abs() < EPS);
}

#[test]
fn test_svg_points() {
    let config = RadarConfig {
        center: Point::new(0.0, 0.0),
        radius: 10.0,
        ..RadarConfig::default()
    };
    let radar = build_radar(&metrics(&[100.0, 100.0]), &config);
    assert_eq!(radar.polygon().len(), 2);
    assert_eq!(radar.to_svg_points(), "0.000,-10.000 0.000,10.000");
}
