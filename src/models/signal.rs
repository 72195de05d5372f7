use serde::{Deserialize, Serialize};
use std::fmt;

/// Five-level signal label, ordered from most bullish to most bearish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalLabel {
    StrongBuy,
    Buy,
    Neutral,
    Sell,
    StrongSell,
}

impl SignalLabel {
    /// Labels in gauge-zone order, left (bearish) to right (bullish).
    pub const ZONE_ORDER: [SignalLabel; 5] = [
        SignalLabel::StrongSell,
        SignalLabel::Sell,
        SignalLabel::Neutral,
        SignalLabel::Buy,
        SignalLabel::StrongBuy,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::StrongBuy => "Strong Buy",
            Self::Buy => "Buy",
            Self::Neutral => "Neutral",
            Self::Sell => "Sell",
            Self::StrongSell => "Strong Sell",
        }
    }
}

impl fmt::Display for SignalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A score together with its label and display color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedSignal {
    pub label: SignalLabel,
    pub score: f64,
    pub color: String,
}

/// One indicator's contribution to a composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorVote {
    pub name: String,
    pub score: f64,
}

impl IndicatorVote {
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Result of a composite scorer: the raw mean, its classification and the
/// votes that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredGroup {
    pub raw_score: f64,
    pub signal: ClassifiedSignal,
    pub votes: Vec<IndicatorVote>,
}

/// Integer Buy/Neutral/Sell counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    pub buy: u32,
    pub neutral: u32,
    pub sell: u32,
}

impl VoteTally {
    pub fn new(buy: u32, neutral: u32, sell: u32) -> Self {
        Self { buy, neutral, sell }
    }

    pub fn total(&self) -> u32 {
        self.buy + self.neutral + self.sell
    }
}

/// Human-readable explanation line with a relevance weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalReason {
    pub description: String,
    pub weight: f64,
}
