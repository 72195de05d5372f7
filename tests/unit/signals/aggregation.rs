//! Unit tests for summary aggregation

use stockdial::config::Palette;
use stockdial::models::{IndicatorSnapshot, MacdIndicator, SignalLabel};
use stockdial::signals::aggregation::{SignalAggregator, TOP_CONTRIBUTORS};
use stockdial::signals::moving_averages::MovingAverageScorer;
use stockdial::signals::oscillators::OscillatorScorer;

#[test]
fn test_summary_is_mean_of_raw_scores() {
    let summary = SignalAggregator::summarize(-0.1, 1.0, &Palette::default());
    assert!((summary.score - 0.45).abs() < 1e-12);
    assert_eq!(summary.label, SignalLabel::Buy);
}

#[test]
fn test_summary_uses_numbers_not_labels() {
    let palette = Palette::default();
    assert_eq!(SignalAggregator::summarize(0.09, 0.09, &palette).label, SignalLabel::Neutral);
    assert_eq!(SignalAggregator::summarize(0.1, 0.1, &palette).label, SignalLabel::Buy);
    // A Strong Sell and a Strong Buy cancel out.
    assert_eq!(SignalAggregator::summarize(-0.8, 0.8, &palette).label, SignalLabel::Neutral);
    // Sell plus Neutral lands on either side depending on magnitude.
    assert_eq!(SignalAggregator::summarize(-0.4, 0.0, &palette).label, SignalLabel::Sell);
    assert_eq!(SignalAggregator::summarize(-0.15, 0.0, &palette).label, SignalLabel::Neutral);
}

#[test]
fn test_generate_reasons() {
    let palette = Palette::default();
    let snapshot = IndicatorSnapshot::new()
        .with_price(100.0)
        .with_smas(Some(95.0), Some(90.0), Some(80.0))
        .with_rsi(75.0)
        .with_macd(MacdIndicator::new(1.0, 0.5));
    let oscillators = OscillatorScorer::score(&snapshot, &palette);
    let moving_averages = MovingAverageScorer::score(&snapshot, &palette);

    let reasons = SignalAggregator::generate_reasons(&[
        ("Oscillators", &oscillators),
        ("Moving Averages", &moving_averages),
    ]);

    assert_eq!(reasons.len(), 2 + TOP_CONTRIBUTORS);
    assert!(reasons[0].description.starts_with("Oscillators: Sell"));
    assert!(reasons[1].description.starts_with("Moving Averages: Strong Buy"));
    // SMA votes (weight 1.0) outrank RSI (0.8) and MACD (0.6).
    assert_eq!(reasons[2].description, "SMA20: +1.00");
    assert_eq!(reasons[3].description, "SMA50: +1.00");
    assert_eq!(reasons[4].description, "SMA200: +1.00");
}

#[test]
fn test_generate_reasons_without_votes() {
    let palette = Palette::default();
    let empty = OscillatorScorer::score(&IndicatorSnapshot::default(), &palette);
    let reasons = SignalAggregator::generate_reasons(&[("Oscillators", &empty)]);
    assert_eq!(reasons.len(), 1);
    assert_eq!(reasons[0].weight, 0.0);
}
