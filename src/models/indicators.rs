use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Keep a value only when it is a usable number.
pub(crate) fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

impl MacdIndicator {
    pub fn new(macd: f64, signal: f64) -> Self {
        Self {
            macd,
            signal,
            histogram: macd - signal,
        }
    }

    /// Difference between the fast line and the signal line, if both are usable.
    pub fn spread(&self) -> Option<f64> {
        if self.macd.is_finite() && self.signal.is_finite() {
            Some(self.macd - self.signal)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerBandsIndicator {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

impl BollingerBandsIndicator {
    pub fn new(upper: f64, middle: f64, lower: f64) -> Self {
        Self {
            upper,
            middle,
            lower,
        }
    }

    /// Relative position of `price` inside the band, 0 at the lower band and
    /// 1 at the upper band. Not clamped: prices outside the band land below 0
    /// or above 1. `None` when the band has no positive width.
    pub fn position(&self, price: f64) -> Option<f64> {
        let range = self.upper - self.lower;
        if !price.is_finite() || !self.lower.is_finite() || !range.is_finite() || range <= 0.0 {
            return None;
        }
        Some((price - self.lower) / range)
    }
}

/// Point-in-time indicator readings for one instrument.
///
/// Every field is optional. Scorers read through the accessor methods, which
/// also drop NaN and infinite values, so a malformed reading behaves exactly
/// like a missing one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sma20: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sma50: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sma200: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsi: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macd: Option<MacdIndicator>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bollinger: Option<BollingerBandsIndicator>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of: Option<DateTime<Utc>>,
}

impl IndicatorSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_smas(
        mut self,
        sma20: Option<f64>,
        sma50: Option<f64>,
        sma200: Option<f64>,
    ) -> Self {
        self.sma20 = sma20;
        self.sma50 = sma50;
        self.sma200 = sma200;
        self
    }

    pub fn with_rsi(mut self, rsi: f64) -> Self {
        self.rsi = Some(rsi);
        self
    }

    pub fn with_macd(mut self, macd: MacdIndicator) -> Self {
        self.macd = Some(macd);
        self
    }

    pub fn with_bollinger(mut self, bands: BollingerBandsIndicator) -> Self {
        self.bollinger = Some(bands);
        self
    }

    pub fn with_as_of(mut self, as_of: DateTime<Utc>) -> Self {
        self.as_of = Some(as_of);
        self
    }

    pub fn price(&self) -> Option<f64> {
        finite(self.price)
    }

    pub fn rsi(&self) -> Option<f64> {
        finite(self.rsi)
    }

    /// MACD minus signal, when both lines are usable.
    pub fn macd_spread(&self) -> Option<f64> {
        self.macd.as_ref().and_then(MacdIndicator::spread)
    }

    /// Price position inside the Bollinger band; needs a price and a band
    /// with positive width.
    pub fn bollinger_position(&self) -> Option<f64> {
        let price = self.price()?;
        self.bollinger.as_ref()?.position(price)
    }

    /// Usable SMAs in period order 20, 50, 200, tagged with their period.
    pub fn smas(&self) -> Vec<(u32, f64)> {
        [(20, self.sma20), (50, self.sma50), (200, self.sma200)]
            .into_iter()
            .filter_map(|(period, value)| finite(value).map(|v| (period, v)))
            .collect()
    }
}
