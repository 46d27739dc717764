//! Strategy orchestration for the alpha order pipeline.
//!
//! [`AlphaModelStrategy`] runs one trading cycle at a time: it pulls
//! the position snapshot, asks each model for signals, enforces the
//! open-position cap, delegates sizing, merges futures-rolling close
//! orders, applies order filters and re-issues the full order list to
//! the broker.

mod alpha_model_strategy;

pub use alpha_model_strategy::{enforce_position_cap, AlphaModelStrategy, StrategyConfig};
