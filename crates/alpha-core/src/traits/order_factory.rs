//! Order factory trait definition.

use std::collections::HashMap;

use crate::error::FactoryError;
use crate::types::{ExecutionStyle, Frequency, Order, Ticker, TimeInForce};

/// Turns target allocations or explicit quantity deltas into orders.
///
/// Contract: each call returns exactly one order per contract key that
/// requires a change and none for keys already at the target. Callers
/// sizing a single contract treat any other cardinality as a breach.
pub trait OrderFactory: Send + Sync {
    /// Orders that move each contract to a target percentage of current
    /// portfolio value.
    fn target_percent_orders(
        &self,
        targets: HashMap<Ticker, f64>,
        execution_style: ExecutionStyle,
        time_in_force: TimeInForce,
        frequency: Frequency,
    ) -> Result<Vec<Order>, FactoryError>;

    /// Orders for explicit signed quantities.
    fn orders(
        &self,
        quantities: HashMap<Ticker, i64>,
        execution_style: ExecutionStyle,
        time_in_force: TimeInForce,
    ) -> Result<Vec<Order>, FactoryError>;
}
