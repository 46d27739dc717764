//! Broker trait definition.

use crate::error::BrokerError;
use crate::types::{Order, Position};

/// Trait for broker integrations.
///
/// The broker reflects committed state only: orders placed during a
/// cycle become visible in `get_positions` no earlier than the next
/// cycle, never mid-cycle.
pub trait Broker: Send + Sync {
    /// Get all open positions.
    fn get_positions(&self) -> Result<Vec<Position>, BrokerError>;

    /// Cancel every currently open order.
    fn cancel_all_open_orders(&self) -> Result<(), BrokerError>;

    /// Submit the full order list for this cycle.
    ///
    /// An empty list is a valid submission: it effects "cancel all,
    /// replace with nothing".
    fn place_orders(&self, orders: Vec<Order>) -> Result<(), BrokerError>;

    /// Get the broker name.
    fn name(&self) -> &str;
}
