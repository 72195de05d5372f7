use dotenvy::dotenv;
use stockdial::logging;
use stockdial::{
    BollingerBandsIndicator, EngineConfig, IndicatorSnapshot, MacdIndicator, RadarMetric,
    RegimeProbabilities, SignalEngine, TechnicalSummary,
};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = EngineConfig::from_env()?;
    let engine = SignalEngine::new(config);
    info!(environment = %stockdial::config::get_environment(), "Starting stockdial demo");

    let snapshots = vec![
        IndicatorSnapshot::new()
            .with_symbol("AAPL")
            .with_price(100.0)
            .with_smas(Some(95.0), Some(90.0), Some(80.0))
            .with_rsi(75.0)
            .with_macd(MacdIndicator::new(1.0, 0.5)),
        IndicatorSnapshot::new()
            .with_symbol("TSLA")
            .with_price(180.0)
            .with_smas(Some(190.0), Some(205.0), None)
            .with_rsi(28.0)
            .with_macd(MacdIndicator::new(-2.1, -1.4))
            .with_bollinger(BollingerBandsIndicator::new(210.0, 195.0, 180.0)),
        IndicatorSnapshot::new().with_symbol("NEW"),
    ];

    for snapshot in &snapshots {
        let summary = engine.evaluate(snapshot);
        print_summary(&summary);
        let gauges = engine.gauges(&summary);
        info!(
            needle_angle = gauges.summary.needle.angle,
            "Summary gauge needle"
        );
    }

    let radar = engine.risk_radar(&[
        RadarMetric::new("Volatility", 72.0),
        RadarMetric::new("Drawdown", 45.0),
        RadarMetric::new("Beta", 60.0),
        RadarMetric::new("Liquidity", 20.0),
        RadarMetric::new("Leverage", 35.0),
    ]);
    println!("Risk radar: {}", radar.to_svg_points());

    let donut = engine.regime_donut(&RegimeProbabilities::new(0.55, 0.15, 0.30));
    println!("{}", serde_json::to_string_pretty(&donut)?);

    Ok(())
}

fn print_summary(summary: &TechnicalSummary) {
    println!("{}", summary.symbol.as_deref().unwrap_or("-"));
    println!(
        "  Oscillators:     {} ({:+.2})",
        summary.oscillators.signal.label, summary.oscillators.raw_score
    );
    println!(
        "  Moving Averages: {} ({:+.2})",
        summary.moving_averages.signal.label, summary.moving_averages.raw_score
    );
    println!(
        "  Summary:         {} ({:+.2})",
        summary.summary.label, summary.summary.score
    );
    let tally = summary.tallies.summary;
    println!(
        "  Tally:           buy {} / neutral {} / sell {}",
        tally.buy, tally.neutral, tally.sell
    );
    println!("  Reasons:");
    for (i, reason) in summary.reasons.iter().enumerate() {
        println!("    {}. {} (weight: {:.2})", i + 1, reason.description, reason.weight);
    }
}
