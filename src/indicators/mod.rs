//! Conversion of loosely-typed upstream indicator data into snapshots.

pub mod error;
pub mod parser;

pub use error::IndicatorError;
pub use parser::*;
