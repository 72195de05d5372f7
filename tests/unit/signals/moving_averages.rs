//! Unit tests for the moving-average composite

use stockdial::config::Palette;
use stockdial::models::{IndicatorSnapshot, SignalLabel};
use stockdial::signals::moving_averages::MovingAverageScorer;

fn snapshot(price: f64, sma20: Option<f64>, sma50: Option<f64>, sma200: Option<f64>) -> IndicatorSnapshot {
    IndicatorSnapshot::new()
        .with_price(price)
        .with_smas(sma20, sma50, sma200)
}

#[test]
fn test_price_above_all_smas() {
    let group = MovingAverageScorer::score(
        &snapshot(100.0, Some(95.0), Some(90.0), Some(80.0)),
        &Palette::default(),
    );
    assert_eq!(group.raw_score, 1.0);
    assert_eq!(group.signal.label, SignalLabel::StrongBuy);
    let names: Vec<&str> = group.votes.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["SMA20", "SMA50", "SMA200"]);
}

#[test]
fn test_price_equal_to_smas_counts_as_sell() {
    let group = MovingAverageScorer::score(
        &snapshot(100.0, Some(100.0), Some(100.0), Some(100.0)),
        &Palette::default(),
    );
    assert_eq!(group.raw_score, -1.0);
    assert_eq!(group.signal.label, SignalLabel::StrongSell);
}

#[test]
fn test_mixed_votes() {
    // Above SMA20, below SMA50 and SMA200.
    let group = MovingAverageScorer::score(
        &snapshot(100.0, Some(98.0), Some(105.0), Some(110.0)),
        &Palette::default(),
    );
    assert!((group.raw_score - (-1.0 / 3.0)).abs() < 1e-12);
    assert_eq!(group.signal.label, SignalLabel::Sell);
}

#[test]
fn test_partial_smas() {
    let group = MovingAverageScorer::score(
        &snapshot(100.0, Some(98.0), None, Some(120.0)),
        &Palette::default(),
    );
    assert_eq!(group.votes.len(), 2);
    assert_eq!(group.raw_score, 0.0);
    assert_eq!(group.signal.label, SignalLabel::Neutral);
}

#[test]
fn test_no_smas_is_neutral() {
    let group = MovingAverageScorer::score(&snapshot(100.0, None, None, None), &Palette::default());
    assert!(group.votes.is_empty());
    assert_eq!(group.raw_score, 0.0);
    assert_eq!(group.signal.label, SignalLabel::Neutral);
}

#[test]
fn test_missing_price_casts_no_votes() {
    let snapshot = IndicatorSnapshot::new().with_smas(Some(10.0), Some(20.0), Some(30.0));
    let group = MovingAverageScorer::score(&snapshot, &Palette::default());
    assert!(group.votes.is_empty());
    assert_eq!(group.raw_score, 0.0);
}

#[test]
fn test_non_finite_sma_is_skipped() {
    let group = MovingAverageScorer::score(
        &snapshot(100.0, Some(f64::NAN), Some(90.0), None),
        &Palette::default(),
    );
    assert_eq!(group.votes.len(), 1);
    assert_eq!(group.raw_score, 1.0);
}
