//! Summary aggregation and explainability breakdown

use crate::config::Palette;
use crate::models::signal::{ClassifiedSignal, ScoredGroup, SignalReason};
use crate::signals::scoring::{classify, mean};

/// Number of individual indicator votes listed after the group reasons.
pub const TOP_CONTRIBUTORS: usize = 3;

pub struct SignalAggregator;

impl SignalAggregator {
    /// Summary signal from the two raw composite scores.
    ///
    /// Works on the numbers, not the labels: a Sell and a Strong Buy can
    /// average into a Buy.
    pub fn summarize(
        oscillator_raw: f64,
        moving_average_raw: f64,
        palette: &Palette,
    ) -> ClassifiedSignal {
        classify(mean(&[oscillator_raw, moving_average_raw]), palette)
    }

    /// Group-level reasons followed by the strongest individual votes.
    pub fn generate_reasons(groups: &[(&str, &ScoredGroup)]) -> Vec<SignalReason> {
        let mut reasons: Vec<SignalReason> = groups
            .iter()
            .map(|(name, group)| SignalReason {
                description: format!(
                    "{}: {} ({:+.2})",
                    name, group.signal.label, group.raw_score
                ),
                weight: group.raw_score.abs(),
            })
            .collect();

        let mut indicator_reasons: Vec<SignalReason> = groups
            .iter()
            .flat_map(|(_, group)| group.votes.iter())
            .map(|vote| SignalReason {
                description: format!("{}: {:+.2}", vote.name, vote.score),
                weight: vote.score.abs(),
            })
            .collect();
        // Stable sort keeps input order among equal weights.
        indicator_reasons.sort_by(|a, b| b.weight.total_cmp(&a.weight));

        reasons.extend(indicator_reasons.into_iter().take(TOP_CONTRIBUTORS));
        reasons
    }
}
