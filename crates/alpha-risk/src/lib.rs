//! Position sizing for the alpha order pipeline.
//!
//! Converts per-instrument signals into risk-sized market orders and
//! protective stops through a pluggable [`SizingAlgorithm`].

mod initial_risk;
mod position_sizer;
mod simple;

pub use initial_risk::InitialRiskSizer;
pub use position_sizer::{PositionSizer, SizingAlgorithm, SizingContext};
pub use simple::SimpleSizer;

#[cfg(test)]
pub(crate) mod doubles;
