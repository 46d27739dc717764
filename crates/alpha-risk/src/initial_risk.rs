//! Initial-risk position sizing.
//!
//! Sizes every signal from a fixed risk budget:
//! `target percentage = initial_risk / signal.fraction_at_risk`,
//! signed by the suggested exposure. A 2% budget against a signal
//! risking 4% per contract targets 50% of portfolio value.

use std::collections::HashMap;

use alpha_core::error::SizingError;
use alpha_core::{AlphaResult, ExecutionStyle, Order, Signal, Ticker};

use crate::position_sizer::{single_order, SizingAlgorithm, SizingContext};

/// Converts signals to orders using a predefined initial risk value.
pub struct InitialRiskSizer {
    initial_risk: f64,
}

impl InitialRiskSizer {
    /// `initial_risk` is the fraction of portfolio value the strategy
    /// is willing to lose on a single trade if the stop is hit
    /// (0.02 means 2%). Must be a finite fraction in (0, 1].
    pub fn new(initial_risk: f64) -> Result<Self, SizingError> {
        if !initial_risk.is_finite() || initial_risk <= 0.0 || initial_risk > 1.0 {
            return Err(SizingError::InvalidInitialRisk(initial_risk));
        }
        Ok(Self { initial_risk })
    }

    pub fn initial_risk(&self) -> f64 {
        self.initial_risk
    }
}

impl SizingAlgorithm for InitialRiskSizer {
    fn market_order(
        &self,
        ctx: &SizingContext<'_>,
        contract: &Ticker,
        signal: &Signal,
    ) -> AlphaResult<Option<Order>> {
        if !signal.fraction_at_risk.is_finite() {
            return Err(SizingError::NonFiniteFractionAtRisk {
                ticker: contract.clone(),
                value: signal.fraction_at_risk,
            }
            .into());
        }

        let risk_budget_ratio = self.initial_risk / signal.fraction_at_risk;
        if !risk_budget_ratio.is_finite() {
            return Err(SizingError::NonFiniteTargetPercentage {
                ticker: contract.clone(),
                value: risk_budget_ratio,
            }
            .into());
        }

        // An OUT exposure signs the target to zero, which flattens any
        // existing position.
        let target_percentage = risk_budget_ratio * signal.suggested_exposure.sign() as f64;

        let market_orders = ctx.order_factory().target_percent_orders(
            HashMap::from([(contract.clone(), target_percentage)]),
            ExecutionStyle::Market,
            ctx.time_in_force,
            ctx.frequency,
        )?;
        single_order(market_orders, contract)
    }

    fn name(&self) -> &str {
        "InitialRiskSizer"
    }
}
