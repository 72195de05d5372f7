use serde::{Deserialize, Serialize};
use std::fmt;

/// One risk factor, already percentile-scaled to 0..=100 upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarMetric {
    pub label: String,
    pub value: f64,
}

impl RadarMetric {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    Bullish,
    Bearish,
    Neutral,
}

impl Regime {
    /// Donut layout order.
    pub const ALL: [Regime; 3] = [Regime::Bullish, Regime::Bearish, Regime::Neutral];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Bullish => "Bullish",
            Self::Bearish => "Bearish",
            Self::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Market regime probabilities; expected to sum to roughly 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RegimeProbabilities {
    pub bullish: f64,
    pub bearish: f64,
    pub neutral: f64,
}

impl RegimeProbabilities {
    pub fn new(bullish: f64, bearish: f64, neutral: f64) -> Self {
        Self {
            bullish,
            bearish,
            neutral,
        }
    }

    /// Probability for `regime`, with negative and non-finite values read as 0.
    pub fn get(&self, regime: Regime) -> f64 {
        let value = match regime {
            Regime::Bullish => self.bullish,
            Regime::Bearish => self.bearish,
            Regime::Neutral => self.neutral,
        };
        if value.is_finite() && value > 0.0 {
            value
        } else {
            0.0
        }
    }
}
