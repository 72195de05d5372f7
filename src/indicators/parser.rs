use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::debug;

use crate::indicators::error::IndicatorError;
use crate::models::indicators::*;

pub fn parse_f64(value: &str) -> Result<f64, IndicatorError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| IndicatorError::InvalidNumericFormat(value.to_string()))
}

pub fn parse_price(value: f64) -> Result<f64, IndicatorError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(IndicatorError::OutOfRange {
            field: "price".to_string(),
            value,
        })
    }
}

pub fn parse_rsi(value: f64) -> Result<f64, IndicatorError> {
    if (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(IndicatorError::OutOfRange {
            field: "rsi".to_string(),
            value,
        })
    }
}

pub fn parse_sma(field: &str, value: f64) -> Result<f64, IndicatorError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(IndicatorError::OutOfRange {
            field: field.to_string(),
            value,
        })
    }
}

/// Histogram defaults to `macd - signal` when the source omits it.
pub fn parse_macd(
    macd_val: f64,
    signal_val: f64,
    histogram_val: Option<f64>,
) -> Result<MacdIndicator, IndicatorError> {
    if !macd_val.is_finite() {
        return Err(IndicatorError::InvalidNumericFormat("macd".to_string()));
    }
    if !signal_val.is_finite() {
        return Err(IndicatorError::InvalidNumericFormat("signal".to_string()));
    }
    Ok(MacdIndicator {
        macd: macd_val,
        signal: signal_val,
        histogram: histogram_val.unwrap_or(macd_val - signal_val),
    })
}

/// Rejects inverted bands. A zero-width band is accepted; scorers skip it.
pub fn parse_bollinger(
    upper: f64,
    middle: f64,
    lower: f64,
) -> Result<BollingerBandsIndicator, IndicatorError> {
    if upper < lower {
        return Err(IndicatorError::OutOfRange {
            field: "bollinger.upper".to_string(),
            value: upper,
        });
    }
    Ok(BollingerBandsIndicator::new(upper, middle, lower))
}

pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, IndicatorError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|_| IndicatorError::InvalidTimestamp(value.to_string()))
}

fn map_f64(data: &HashMap<String, String>, key: &str) -> Result<f64, IndicatorError> {
    let raw = data
        .get(key)
        .ok_or_else(|| IndicatorError::MissingField(key.to_string()))?;
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| IndicatorError::InvalidNumericFormat(key.to_string()))
}

pub fn parse_macd_from_map(
    data: &HashMap<String, String>,
) -> Result<MacdIndicator, IndicatorError> {
    let macd_val = map_f64(data, "macd")?;
    let signal_val = map_f64(data, "signal")?;
    let histogram = match map_f64(data, "histogram") {
        Ok(h) => Some(h),
        Err(IndicatorError::MissingField(_)) => None,
        Err(e) => return Err(e),
    };
    parse_macd(macd_val, signal_val, histogram)
}

pub fn parse_bollinger_from_map(
    data: &HashMap<String, String>,
) -> Result<BollingerBandsIndicator, IndicatorError> {
    parse_bollinger(
        map_f64(data, "bb_upper")?,
        map_f64(data, "bb_middle")?,
        map_f64(data, "bb_lower")?,
    )
}

/// Keep a parsed field, or drop it. Missing fields are dropped silently,
/// malformed ones with a debug log.
fn keep<T>(result: Result<T, IndicatorError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(IndicatorError::MissingField(_)) => None,
        Err(e) => {
            debug!(error = %e, "Dropping indicator field");
            None
        }
    }
}

/// Build a snapshot from flat string key/value pairs.
///
/// Never fails: every field that is missing or does not parse is left
/// empty, which keeps that indicator out of the vote.
pub fn parse_snapshot_from_map(data: &HashMap<String, String>) -> IndicatorSnapshot {
    let sma = |key: &str| keep(map_f64(data, key).and_then(|v| parse_sma(key, v)));

    IndicatorSnapshot {
        symbol: data.get("symbol").cloned(),
        price: keep(map_f64(data, "price").and_then(parse_price)),
        sma20: sma("sma20"),
        sma50: sma("sma50"),
        sma200: sma("sma200"),
        rsi: keep(map_f64(data, "rsi").and_then(parse_rsi)),
        macd: keep(parse_macd_from_map(data)),
        bollinger: keep(parse_bollinger_from_map(data)),
        as_of: data.get("as_of").and_then(|s| keep(parse_timestamp(s))),
    }
}

/// Numbers and numeric strings are both accepted; `null` counts as missing.
fn json_f64(object: &Value, key: &str) -> Result<f64, IndicatorError> {
    match object.get(key) {
        None | Some(Value::Null) => Err(IndicatorError::MissingField(key.to_string())),
        Some(Value::Number(n)) => n
            .as_f64()
            .filter(|v| v.is_finite())
            .ok_or_else(|| IndicatorError::InvalidNumericFormat(key.to_string())),
        Some(Value::String(s)) => {
            parse_f64(s).map_err(|_| IndicatorError::InvalidNumericFormat(key.to_string()))
        }
        Some(_) => Err(IndicatorError::InvalidNumericFormat(key.to_string())),
    }
}

fn json_object<'a>(object: &'a Value, keys: &[&str]) -> Result<&'a Value, IndicatorError> {
    keys.iter()
        .find_map(|key| object.get(*key).filter(|v| v.is_object()))
        .ok_or_else(|| IndicatorError::MissingField(keys[0].to_string()))
}

pub fn parse_macd_from_json(object: &Value) -> Result<MacdIndicator, IndicatorError> {
    let macd = json_object(object, &["macd"])?;
    let histogram = match json_f64(macd, "histogram") {
        Ok(h) => Some(h),
        Err(IndicatorError::MissingField(_)) => None,
        Err(e) => return Err(e),
    };
    parse_macd(json_f64(macd, "macd")?, json_f64(macd, "signal")?, histogram)
}

pub fn parse_bollinger_from_json(
    object: &Value,
) -> Result<BollingerBandsIndicator, IndicatorError> {
    let bands = json_object(object, &["bollinger", "bollinger_bands", "bollingerBands"])?;
    parse_bollinger(
        json_f64(bands, "upper")?,
        json_f64(bands, "middle")?,
        json_f64(bands, "lower")?,
    )
}

/// Build a snapshot from a JSON object as delivered by the data layer.
///
/// Like [`parse_snapshot_from_map`], malformed fields are dropped rather than
/// reported. A non-object value yields an empty snapshot.
pub fn parse_snapshot_from_json(object: &Value) -> IndicatorSnapshot {
    if !object.is_object() {
        debug!("Indicator payload is not a JSON object");
        return IndicatorSnapshot::default();
    }
    let sma = |key: &str| keep(json_f64(object, key).and_then(|v| parse_sma(key, v)));

    IndicatorSnapshot {
        symbol: object
            .get("symbol")
            .and_then(Value::as_str)
            .map(str::to_string),
        price: keep(json_f64(object, "price").and_then(parse_price)),
        sma20: sma("sma20"),
        sma50: sma("sma50"),
        sma200: sma("sma200"),
        rsi: keep(json_f64(object, "rsi").and_then(parse_rsi)),
        macd: keep(parse_macd_from_json(object)),
        bollinger: keep(parse_bollinger_from_json(object)),
        as_of: object
            .get("as_of")
            .and_then(Value::as_str)
            .and_then(|s| keep(parse_timestamp(s))),
    }
}
