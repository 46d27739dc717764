//! Core data types for the order pipeline.

mod exposure;
mod frequency;
mod order;
mod position;
mod signal;
mod ticker;

pub use exposure::Exposure;
pub use frequency::Frequency;
pub use order::{ExecutionStyle, Order, TimeInForce};
pub use position::{quantity_snapshot, Position};
pub use signal::Signal;
pub use ticker::{FutureTicker, Instrument, Ticker};
