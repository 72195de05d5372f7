//! Moving-average composite: price against SMA20, SMA50 and SMA200.

use crate::config::Palette;
use crate::models::indicators::IndicatorSnapshot;
use crate::models::signal::{IndicatorVote, ScoredGroup};
use crate::signals::scoring::classify;

pub struct MovingAverageScorer;

impl MovingAverageScorer {
    /// One vote per available SMA: +1 when price is above it, -1 otherwise.
    /// A price sitting exactly on the average counts as a sell.
    pub fn votes(snapshot: &IndicatorSnapshot) -> Vec<IndicatorVote> {
        let Some(price) = snapshot.price() else {
            return Vec::new();
        };

        snapshot
            .smas()
            .into_iter()
            .map(|(period, sma)| {
                let vote = if price > sma { 1.0 } else { -1.0 };
                IndicatorVote::new(format!("SMA{}", period), vote)
            })
            .collect()
    }

    /// `(buys - sells) / votes`, or 0 when no SMA could vote.
    pub fn score(snapshot: &IndicatorSnapshot, palette: &Palette) -> ScoredGroup {
        let votes = Self::votes(snapshot);
        let raw_score = if votes.is_empty() {
            0.0
        } else {
            let buys = votes.iter().filter(|v| v.score > 0.0).count() as f64;
            let sells = votes.len() as f64 - buys;
            (buys - sells) / votes.len() as f64
        };

        ScoredGroup {
            raw_score,
            signal: classify(raw_score, palette),
            votes,
        }
    }
}
