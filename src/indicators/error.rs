use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IndicatorError {
    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Invalid numeric format for {0}")]
    InvalidNumericFormat(String),

    #[error("{field} out of range: {value}")]
    OutOfRange { field: String, value: f64 },

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
