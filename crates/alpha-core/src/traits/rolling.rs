//! Futures rolling trait definition.

use crate::error::BrokerError;
use crate::types::Order;

/// Produces close orders for expiring futures contracts.
///
/// The output is appended to the cycle's order list unconditionally: it
/// bypasses sizing and the open-position cap.
pub trait RollingOrdersGenerator: Send + Sync {
    fn generate_close_orders(&self) -> Result<Vec<Order>, BrokerError>;
}
