//! Technical-signal synthesis and chart geometry for a stock-research
//! dashboard.
//!
//! Indicator snapshots go in; classified signals, vote tallies and drawable
//! gauge/radar/donut primitives come out. Everything here is a pure,
//! synchronous transform.

pub mod config;
pub mod geometry;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod signals;

pub use config::{ConfigError, EngineConfig, Palette};
pub use models::{
    BollingerBandsIndicator, ClassifiedSignal, IndicatorSnapshot, MacdIndicator, RadarMetric,
    Regime, RegimeProbabilities, SignalLabel, VoteTally,
};
pub use signals::{SignalEngine, TechnicalGauges, TechnicalSummary};
