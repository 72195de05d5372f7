//! Oscillator composite: RSI, MACD and Bollinger position.
//!
//! Each indicator contributes one sub-score when its inputs are present.
//! The composite is the mean of whatever was cast.

use crate::config::Palette;
use crate::models::indicators::IndicatorSnapshot;
use crate::models::signal::{IndicatorVote, ScoredGroup};
use crate::signals::scoring::{classify, mean};
use tracing::debug;

pub const RSI_VOTE: &str = "RSI";
pub const MACD_VOTE: &str = "MACD";
pub const BOLLINGER_VOTE: &str = "Bollinger Bands";

/// RSI step table. Deliberately non-monotonic: 50-60 leans bullish while
/// 40-50 leans bearish.
pub fn rsi_score(rsi: f64) -> f64 {
    if rsi > 70.0 {
        -0.8
    } else if rsi > 60.0 {
        -0.3
    } else if rsi > 50.0 {
        0.2
    } else if rsi > 40.0 {
        -0.2
    } else if rsi > 30.0 {
        0.3
    } else {
        0.8
    }
}

/// Sign of MACD minus signal, scaled to ±0.6.
pub fn macd_score(spread: f64) -> f64 {
    if spread > 0.0 {
        0.6
    } else if spread < 0.0 {
        -0.6
    } else {
        0.0
    }
}

/// Score for the price position inside the Bollinger band (0 = lower band,
/// 1 = upper band, unclamped).
pub fn bollinger_score(position: f64) -> f64 {
    if position > 0.9 {
        -0.7
    } else if position > 0.6 {
        -0.2
    } else if position > 0.4 {
        0.0
    } else if position > 0.1 {
        0.2
    } else {
        0.7
    }
}

pub struct OscillatorScorer;

impl OscillatorScorer {
    /// Sub-scores in fixed order RSI, MACD, Bollinger, skipping any indicator
    /// whose inputs are missing.
    pub fn votes(snapshot: &IndicatorSnapshot) -> Vec<IndicatorVote> {
        let mut votes = Vec::with_capacity(3);

        match snapshot.rsi() {
            Some(rsi) => votes.push(IndicatorVote::new(RSI_VOTE, rsi_score(rsi))),
            None => debug!("RSI unavailable, skipping oscillator vote"),
        }

        match snapshot.macd_spread() {
            Some(spread) => votes.push(IndicatorVote::new(MACD_VOTE, macd_score(spread))),
            None => debug!("MACD unavailable, skipping oscillator vote"),
        }

        match snapshot.bollinger_position() {
            Some(position) => {
                votes.push(IndicatorVote::new(BOLLINGER_VOTE, bollinger_score(position)))
            }
            None => debug!("Bollinger position unavailable, skipping oscillator vote"),
        }

        votes
    }

    pub fn score(snapshot: &IndicatorSnapshot, palette: &Palette) -> ScoredGroup {
        let votes = Self::votes(snapshot);
        let scores: Vec<f64> = votes.iter().map(|v| v.score).collect();
        let raw_score = mean(&scores);

        ScoredGroup {
            raw_score,
            signal: classify(raw_score, palette),
            votes,
        }
    }
}
