//! Buy/Neutral/Sell vote counts.
//!
//! A second, simpler classification shown beside the gauges. It uses its own
//! thresholds, counts votes instead of averaging, and never looks at the
//! composite scores, so the two views can disagree.

use crate::models::indicators::IndicatorSnapshot;
use crate::models::signal::VoteTally;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TallyVote {
    Buy,
    Neutral,
    Sell,
}

pub fn rsi_vote(rsi: f64) -> TallyVote {
    if rsi > 60.0 {
        TallyVote::Sell
    } else if rsi < 40.0 {
        TallyVote::Buy
    } else {
        TallyVote::Neutral
    }
}

/// MACD has no neutral option: a flat spread is a sell.
pub fn macd_vote(spread: f64) -> TallyVote {
    if spread > 0.0 {
        TallyVote::Buy
    } else {
        TallyVote::Sell
    }
}

pub fn bollinger_vote(position: f64) -> TallyVote {
    if position > 0.7 {
        TallyVote::Sell
    } else if position < 0.3 {
        TallyVote::Buy
    } else {
        TallyVote::Neutral
    }
}

/// SMAs have no neutral option: price on the average is a sell.
pub fn sma_vote(price: f64, sma: f64) -> TallyVote {
    if price > sma {
        TallyVote::Buy
    } else {
        TallyVote::Sell
    }
}

/// Tallies for the three panels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallySet {
    pub oscillators: VoteTally,
    pub moving_averages: VoteTally,
    pub summary: VoteTally,
}

pub struct CountTally;

impl CountTally {
    /// RSI, MACD and Bollinger.
    pub fn oscillators(snapshot: &IndicatorSnapshot) -> VoteTally {
        let mut tally = VoteTally::default();
        Self::count_rsi(snapshot, &mut tally);
        Self::count_macd(snapshot, &mut tally);
        if let Some(position) = snapshot.bollinger_position() {
            Self::record(&mut tally, bollinger_vote(position));
        }
        tally
    }

    pub fn moving_averages(snapshot: &IndicatorSnapshot) -> VoteTally {
        let mut tally = VoteTally::default();
        Self::count_smas(snapshot, &mut tally);
        tally
    }

    /// RSI, MACD and every SMA in a single pass. Bollinger is not part of the
    /// summary, so this is not the sum of the other two tallies.
    pub fn summary(snapshot: &IndicatorSnapshot) -> VoteTally {
        let mut tally = VoteTally::default();
        Self::count_rsi(snapshot, &mut tally);
        Self::count_macd(snapshot, &mut tally);
        Self::count_smas(snapshot, &mut tally);
        tally
    }

    pub fn all(snapshot: &IndicatorSnapshot) -> TallySet {
        TallySet {
            oscillators: Self::oscillators(snapshot),
            moving_averages: Self::moving_averages(snapshot),
            summary: Self::summary(snapshot),
        }
    }

    fn count_rsi(snapshot: &IndicatorSnapshot, tally: &mut VoteTally) {
        if let Some(rsi) = snapshot.rsi() {
            Self::record(tally, rsi_vote(rsi));
        }
    }

    fn count_macd(snapshot: &IndicatorSnapshot, tally: &mut VoteTally) {
        if let Some(spread) = snapshot.macd_spread() {
            Self::record(tally, macd_vote(spread));
        }
    }

    fn count_smas(snapshot: &IndicatorSnapshot, tally: &mut VoteTally) {
        let Some(price) = snapshot.price() else {
            return;
        };
        for (_, sma) in snapshot.smas() {
            Self::record(tally, sma_vote(price, sma));
        }
    }

    fn record(tally: &mut VoteTally, vote: TallyVote) {
        match vote {
            TallyVote::Buy => tally.buy += 1,
            TallyVote::Neutral => tally.neutral += 1,
            TallyVote::Sell => tally.sell += 1,
        }
    }
}
