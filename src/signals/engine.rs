//! Signal engine: one call from an indicator snapshot to every panel the
//! dashboard draws.

use crate::config::EngineConfig;
use crate::geometry::{
    build_donut, build_gauge, build_radar, DonutGeometry, GaugeGeometry, RadarGeometry,
};
use crate::models::indicators::IndicatorSnapshot;
use crate::models::market::{RadarMetric, RegimeProbabilities};
use crate::models::signal::{ClassifiedSignal, ScoredGroup, SignalReason};
use crate::signals::aggregation::SignalAggregator;
use crate::signals::moving_averages::MovingAverageScorer;
use crate::signals::oscillators::OscillatorScorer;
use crate::signals::tally::{CountTally, TallySet};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Classified signals, tallies and reasons for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_of: Option<DateTime<Utc>>,
    pub oscillators: ScoredGroup,
    pub moving_averages: ScoredGroup,
    pub summary: ClassifiedSignal,
    pub tallies: TallySet,
    pub reasons: Vec<SignalReason>,
}

/// The three gauges shown on the technical panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalGauges {
    pub oscillators: GaugeGeometry,
    pub moving_averages: GaugeGeometry,
    pub summary: GaugeGeometry,
}

pub struct SignalEngine {
    config: EngineConfig,
}

impl SignalEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn evaluate(&self, snapshot: &IndicatorSnapshot) -> TechnicalSummary {
        let palette = &self.config.palette;
        let oscillators = OscillatorScorer::score(snapshot, palette);
        let moving_averages = MovingAverageScorer::score(snapshot, palette);
        let summary =
            SignalAggregator::summarize(oscillators.raw_score, moving_averages.raw_score, palette);
        let tallies = CountTally::all(snapshot);
        let reasons = SignalAggregator::generate_reasons(&[
            ("Oscillators", &oscillators),
            ("Moving Averages", &moving_averages),
        ]);

        debug!(
            symbol = snapshot.symbol.as_deref().unwrap_or("-"),
            oscillators = oscillators.raw_score,
            moving_averages = moving_averages.raw_score,
            summary = summary.score,
            label = %summary.label,
            "Evaluated technical signals"
        );

        TechnicalSummary {
            symbol: snapshot.symbol.clone(),
            as_of: snapshot.as_of,
            oscillators,
            moving_averages,
            summary,
            tallies,
            reasons,
        }
    }

    pub fn gauges(&self, summary: &TechnicalSummary) -> TechnicalGauges {
        let gauge = &self.config.gauge;
        let palette = &self.config.palette;
        TechnicalGauges {
            oscillators: build_gauge(&summary.oscillators.signal, gauge, palette),
            moving_averages: build_gauge(&summary.moving_averages.signal, gauge, palette),
            summary: build_gauge(&summary.summary, gauge, palette),
        }
    }

    pub fn risk_radar(&self, metrics: &[RadarMetric]) -> RadarGeometry {
        build_radar(metrics, &self.config.radar)
    }

    pub fn regime_donut(&self, probabilities: &RegimeProbabilities) -> DonutGeometry {
        build_donut(probabilities, &self.config.donut)
    }
}

impl Default for SignalEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
