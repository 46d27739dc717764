//! Exposure-only position sizing.

use std::collections::HashMap;

use alpha_core::{AlphaResult, ExecutionStyle, Order, Signal, Ticker};

use crate::position_sizer::{single_order, SizingAlgorithm, SizingContext};

/// The trivial sizer: target the full portfolio value in the direction
/// the signal suggests (+100%, -100% or 0%), ignoring the signal's risk
/// fraction. Useful for single-instrument strategies and as a baseline.
pub struct SimpleSizer;

impl SizingAlgorithm for SimpleSizer {
    fn market_order(
        &self,
        ctx: &SizingContext<'_>,
        contract: &Ticker,
        signal: &Signal,
    ) -> AlphaResult<Option<Order>> {
        let target_percentage = signal.suggested_exposure.sign() as f64;

        let market_orders = ctx.order_factory().target_percent_orders(
            HashMap::from([(contract.clone(), target_percentage)]),
            ExecutionStyle::Market,
            ctx.time_in_force,
            ctx.frequency,
        )?;
        single_order(market_orders, contract)
    }

    fn name(&self) -> &str {
        "SimpleSizer"
    }
}
