//! Score classification and shared scoring helpers

use crate::config::Palette;
use crate::models::signal::{ClassifiedSignal, SignalLabel};

pub const STRONG_BUY_MIN: f64 = 0.5;
pub const BUY_MIN: f64 = 0.1;
/// Exclusive: a score equal to this is a Sell.
pub const NEUTRAL_FLOOR: f64 = -0.1;
/// Exclusive: a score equal to this is a Strong Sell.
pub const SELL_FLOOR: f64 = -0.5;

/// Map a score to its label. First match wins, top-down.
///
/// The score is not range-checked; anything at or above 0.5 is a Strong Buy
/// and anything at or below -0.5 a Strong Sell. NaN is Neutral.
pub fn classify_score(score: f64) -> SignalLabel {
    if score.is_nan() {
        SignalLabel::Neutral
    } else if score >= STRONG_BUY_MIN {
        SignalLabel::StrongBuy
    } else if score >= BUY_MIN {
        SignalLabel::Buy
    } else if score > NEUTRAL_FLOOR {
        SignalLabel::Neutral
    } else if score > SELL_FLOOR {
        SignalLabel::Sell
    } else {
        SignalLabel::StrongSell
    }
}

/// Classify a score and attach its palette color.
pub fn classify(score: f64, palette: &Palette) -> ClassifiedSignal {
    let label = classify_score(score);
    ClassifiedSignal {
        label,
        score: if score.is_nan() { 0.0 } else { score },
        color: palette.color(label).to_string(),
    }
}

/// Arithmetic mean, 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
