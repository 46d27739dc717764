//! Core types and traits for the alpha signal-to-order pipeline.
//!
//! This crate provides the foundational building blocks including:
//! - Instrument identity (tickers and futures families)
//! - Signals, exposures, orders and execution styles
//! - Collaborator traits for the broker, alpha models, the order
//!   factory, contract resolution, futures rolling and order filters
//! - The pipeline error taxonomy

pub mod error;
pub mod traits;
pub mod types;

pub use error::{AlphaError, AlphaResult};
pub use traits::*;
pub use types::*;
