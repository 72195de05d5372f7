//! Engine configuration: palette and chart dimensions.
//!
//! Defaults are usable as-is. `from_env` overlays `STOCKDIAL_*` variables,
//! `from_json` reads a full or partial JSON document.

use crate::geometry::Point;
use crate::models::{Regime, SignalLabel};
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Invalid {field}: {reason}")]
    InvalidDimension { field: &'static str, reason: String },

    #[error("Malformed config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Deployment environment name, from `APP_ENV`.
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

/// Fixed label colors. Passed around by reference and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub strong_buy: String,
    pub buy: String,
    pub neutral: String,
    pub sell: String,
    pub strong_sell: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            strong_buy: "#16a34a".to_string(),
            buy: "#4ade80".to_string(),
            neutral: "#9ca3af".to_string(),
            sell: "#f87171".to_string(),
            strong_sell: "#dc2626".to_string(),
        }
    }
}

impl Palette {
    pub fn color(&self, label: SignalLabel) -> &str {
        match label {
            SignalLabel::StrongBuy => &self.strong_buy,
            SignalLabel::Buy => &self.buy,
            SignalLabel::Neutral => &self.neutral,
            SignalLabel::Sell => &self.sell,
            SignalLabel::StrongSell => &self.strong_sell,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaugeConfig {
    pub center: Point,
    pub radius: f64,
    pub needle_length: f64,
    pub zone_width: f64,
    pub tick_length: f64,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            center: Point::new(100.0, 100.0),
            radius: 80.0,
            needle_length: 70.0,
            zone_width: 12.0,
            tick_length: 8.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarConfig {
    pub center: Point,
    pub radius: f64,
    /// Label anchors sit at `label_factor * radius`.
    pub label_factor: f64,
    /// Grid ring levels on the 0..=100 scale.
    pub grid_levels: Vec<f64>,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            center: Point::new(120.0, 120.0),
            radius: 90.0,
            label_factor: 1.2,
            grid_levels: vec![25.0, 50.0, 75.0, 100.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegimeColors {
    pub bullish: String,
    pub bearish: String,
    pub neutral: String,
}

impl Default for RegimeColors {
    fn default() -> Self {
        Self {
            bullish: "#22c55e".to_string(),
            bearish: "#ef4444".to_string(),
            neutral: "#eab308".to_string(),
        }
    }
}

impl RegimeColors {
    pub fn color(&self, regime: Regime) -> &str {
        match regime {
            Regime::Bullish => &self.bullish,
            Regime::Bearish => &self.bearish,
            Regime::Neutral => &self.neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonutConfig {
    pub center: Point,
    pub radius: f64,
    pub stroke_width: f64,
    pub colors: RegimeColors,
}

impl Default for DonutConfig {
    fn default() -> Self {
        Self {
            center: Point::new(60.0, 60.0),
            radius: 45.0,
            stroke_width: 14.0,
            colors: RegimeColors::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub palette: Palette,
    pub gauge: GaugeConfig,
    pub radar: RadarConfig,
    pub donut: DonutConfig,
}

impl EngineConfig {
    /// Defaults overlaid with any `STOCKDIAL_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(v) = env_f64("STOCKDIAL_GAUGE_RADIUS")? {
            config.gauge.radius = v;
        }
        if let Some(v) = env_f64("STOCKDIAL_GAUGE_NEEDLE_LENGTH")? {
            config.gauge.needle_length = v;
        }
        if let Some(v) = env_f64("STOCKDIAL_GAUGE_ZONE_WIDTH")? {
            config.gauge.zone_width = v;
        }
        if let Some(v) = env_f64("STOCKDIAL_GAUGE_CENTER_X")? {
            config.gauge.center.x = v;
        }
        if let Some(v) = env_f64("STOCKDIAL_GAUGE_CENTER_Y")? {
            config.gauge.center.y = v;
        }
        if let Some(v) = env_f64("STOCKDIAL_RADAR_RADIUS")? {
            config.radar.radius = v;
        }
        if let Some(v) = env_f64("STOCKDIAL_RADAR_CENTER_X")? {
            config.radar.center.x = v;
        }
        if let Some(v) = env_f64("STOCKDIAL_RADAR_CENTER_Y")? {
            config.radar.center.y = v;
        }
        if let Some(v) = env_f64("STOCKDIAL_DONUT_RADIUS")? {
            config.donut.radius = v;
        }
        if let Some(v) = env_f64("STOCKDIAL_DONUT_STROKE_WIDTH")? {
            config.donut.stroke_width = v;
        }

        config.validate()?;
        debug!(
            gauge_radius = config.gauge.radius,
            radar_radius = config.radar.radius,
            donut_radius = config.donut.radius,
            "Loaded engine config"
        );
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("gauge.radius", self.gauge.radius)?;
        positive("gauge.needle_length", self.gauge.needle_length)?;
        positive("gauge.zone_width", self.gauge.zone_width)?;
        non_negative("gauge.tick_length", self.gauge.tick_length)?;
        if self.gauge.needle_length > self.gauge.radius {
            return Err(ConfigError::InvalidDimension {
                field: "gauge.needle_length",
                reason: format!(
                    "{} exceeds gauge radius {}",
                    self.gauge.needle_length, self.gauge.radius
                ),
            });
        }
        finite_point("gauge.center", self.gauge.center)?;

        positive("radar.radius", self.radar.radius)?;
        positive("radar.label_factor", self.radar.label_factor)?;
        finite_point("radar.center", self.radar.center)?;
        for level in &self.radar.grid_levels {
            if !level.is_finite() || *level <= 0.0 || *level > 100.0 {
                return Err(ConfigError::InvalidDimension {
                    field: "radar.grid_levels",
                    reason: format!("{} is outside (0, 100]", level),
                });
            }
        }

        positive("donut.radius", self.donut.radius)?;
        positive("donut.stroke_width", self.donut.stroke_width)?;
        finite_point("donut.center", self.donut.center)?;
        Ok(())
    }
}

fn env_f64(key: &str) -> Result<Option<f64>, ConfigError> {
    match env::var(key) {
        Ok(raw) => match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Some(v)),
            _ => Err(ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw,
            }),
        },
        Err(_) => Ok(None),
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidDimension {
            field,
            reason: format!("{} must be a positive number", value),
        })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidDimension {
            field,
            reason: format!("{} must be zero or positive", value),
        })
    }
}

fn finite_point(field: &'static str, point: Point) -> Result<(), ConfigError> {
    if point.x.is_finite() && point.y.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidDimension {
            field,
            reason: format!("({}, {}) is not a finite point", point.x, point.y),
        })
    }
}
