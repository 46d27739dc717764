//! Broker-reported positions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Exposure, Ticker};
use crate::error::ExposureError;

/// A position in a single specific contract, as reported by the broker.
///
/// Positions are read-only snapshots within a cycle: only the broker
/// mutates them, in response to submitted orders, and only visibly in a
/// subsequent cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Specific contract held
    pub ticker: Ticker,
    /// Signed contract count: positive long, negative short
    pub quantity: i64,
    /// Average entry price
    pub avg_entry_price: Decimal,
}

impl Position {
    pub fn new(ticker: Ticker, quantity: i64, avg_entry_price: Decimal) -> Self {
        Self {
            ticker,
            quantity,
            avg_entry_price,
        }
    }

    pub fn exposure(&self) -> Exposure {
        Exposure::from_quantity(self.quantity)
    }

    pub fn is_long(&self) -> bool {
        self.quantity > 0
    }

    pub fn is_short(&self) -> bool {
        self.quantity < 0
    }
}

/// Build the ticker→quantity view of a cycle-start position snapshot.
///
/// The portfolio invariant allows at most one open position per exact
/// ticker; a second entry for the same ticker is fatal.
pub fn quantity_snapshot(positions: &[Position]) -> Result<HashMap<Ticker, i64>, ExposureError> {
    let mut quantities = HashMap::with_capacity(positions.len());
    for position in positions {
        if quantities
            .insert(position.ticker.clone(), position.quantity)
            .is_some()
        {
            return Err(ExposureError::DuplicatePosition(position.ticker.clone()));
        }
    }
    Ok(quantities)
}
