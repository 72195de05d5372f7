//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod market;
pub mod signal;

pub use indicators::{BollingerBandsIndicator, IndicatorSnapshot, MacdIndicator};
pub use market::{RadarMetric, Regime, RegimeProbabilities};
pub use signal::{
    ClassifiedSignal, IndicatorVote, ScoredGroup, SignalLabel, SignalReason, VoteTally,
};
