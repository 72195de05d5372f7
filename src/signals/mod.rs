//! Signal scoring, classification and tallies.

pub mod aggregation;
pub mod engine;
pub mod moving_averages;
pub mod oscillators;
pub mod scoring;
pub mod tally;

pub use aggregation::*;
pub use engine::*;
pub use moving_averages::*;
pub use oscillators::*;
pub use scoring::*;
pub use tally::*;
