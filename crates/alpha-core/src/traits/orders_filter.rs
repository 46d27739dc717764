//! Order filter trait definition.

use crate::types::Order;

/// Post-processing hook applied to the final order list, in configured
/// order, before submission.
pub trait OrdersFilter: Send + Sync {
    /// Adjust (drop, resize, rewrite) the given orders.
    fn adjust_orders(&self, orders: Vec<Order>) -> Vec<Order>;

    /// Get the filter name, used for logging.
    fn name(&self) -> &str;
}
