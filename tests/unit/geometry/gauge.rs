//! Unit tests for gauge geometry

use stockdial::config::{GaugeConfig, Palette};
use stockdial::geometry::gauge::{
    build_gauge, describe_arc, gauge_point, needle, needle_angle, tick_marks, zone_arcs,
    zone_boundaries,
};
use stockdial::geometry::Point;
use stockdial::models::SignalLabel;
use stockdial::signals::scoring::classify;

const EPS: f64 = 1e-9;

fn assert_point(actual: Point, x: f64, y: f64) {
    assert!(
        (actual.x - x).abs() < EPS && (actual.y - y).abs() < EPS,
        "expected ({}, {}), got ({}, {})",
        x,
        y,
        actual.x,
        actual.y
    );
}

#[test]
fn test_needle_angle_endpoints() {
    assert_eq!(needle_angle(-1.0), 180.0);
    assert_eq!(needle_angle(0.0), 90.0);
    assert_eq!(needle_angle(1.0), 0.0);
    assert_eq!(needle_angle(0.5), 45.0);
}

#[test]
fn test_needle_angle_clamps() {
    assert_eq!(needle_angle(2.0), 0.0);
    assert_eq!(needle_angle(-3.0), 180.0);
    assert_eq!(needle_angle(f64::NAN), 90.0);
}

#[test]
fn test_gauge_point_inverts_y() {
    let center = Point::new(100.0, 100.0);
    assert_point(gauge_point(center, 80.0, 90.0), 100.0, 20.0);
    assert_point(gauge_point(center, 80.0, 180.0), 20.0, 100.0);
    assert_point(gauge_point(center, 80.0, 0.0), 180.0, 100.0);
}

#[test]
fn test_needle_tip() {
    let config = GaugeConfig::default();
    let up = needle(0.0, &config);
    assert_eq!(up.pivot, config.center);
    assert_point(up.tip, config.center.x, config.center.y - config.needle_length);

    let right = needle(1.0, &config);
    assert_point(right.tip, config.center.x + config.needle_length, config.center.y);
}

#[test]
fn test_zone_boundaries() {
    assert_eq!(zone_boundaries(), [180.0, 144.0, 108.0, 72.0, 36.0, 0.0]);
}

#[test]
fn test_zone_arcs_order_and_colors() {
    let config = GaugeConfig::default();
    let palette = Palette::default();
    let zones = zone_arcs(&config, &palette);

    let labels: Vec<SignalLabel> = zones.iter().map(|z| z.label).collect();
    assert_eq!(
        labels,
        vec![
            SignalLabel::StrongSell,
            SignalLabel::Sell,
            SignalLabel::Neutral,
            SignalLabel::Buy,
            SignalLabel::StrongBuy,
        ]
    );
    assert_eq!(zones[0].arc.start_angle, 180.0);
    assert_eq!(zones[0].arc.end_angle, 144.0);
    assert_eq!(zones[4].arc.end_angle, 0.0);
    assert_eq!(zones[0].arc.color, palette.strong_sell);
    assert_eq!(zones[4].arc.color, palette.strong_buy);
    for zone in &zones {
        assert_eq!(zone.arc.start_angle - zone.arc.end_angle, 36.0);
        assert_eq!(zone.arc.radius, config.radius - config.zone_width / 2.0);
        assert!(!zone.arc.path.large_arc);
        assert!(zone.arc.path.sweep);
    }
}

#[test]
fn test_arc_flags() {
    let center = Point::new(0.0, 0.0);
    assert!(!describe_arc(center, 10.0, 180.0, 0.0).large_arc);
    assert!(describe_arc(center, 10.0, 270.0, 0.0).large_arc);
    assert!(describe_arc(center, 10.0, 270.0, 0.0).sweep);
}

#[test]
fn test_arc_svg_path() {
    let path = describe_arc(Point::new(100.0, 100.0), 80.0, 180.0, 0.0);
    assert_eq!(
        path.to_svg_path(),
        "M 20.000 100.000 A 80.000 80.000 0 0 1 180.000 100.000"
    );
}

#[test]
fn test_tick_marks() {
    let config = GaugeConfig::default();
    let ticks = tick_marks(&config);
    assert_eq!(ticks.len(), 6);
    assert_eq!(ticks[0].angle, 180.0);
    assert_eq!(ticks[5].angle, 0.0);
    let top = &ticks[0];
    assert!((crate::distance(top.inner, config.center) - config.radius).abs() < EPS);
    let outer_radius = config.radius + config.tick_length;
    assert!((crate::distance(top.outer, config.center) - outer_radius).abs() < EPS);
}

#[test]
fn test_build_gauge() {
    let palette = Palette::default();
    let signal = classify(-1.0, &palette);
    let gauge = build_gauge(&signal, &GaugeConfig::default(), &palette);
    assert_eq!(gauge.label, SignalLabel::StrongSell);
    assert_eq!(gauge.needle.angle, 180.0);
    assert_eq!(gauge.color, palette.strong_sell);
    assert_eq!(gauge.zones.len(), 5);
    assert_eq!(gauge.ticks.len(), 6);
}
