//! Signal-to-order conversion engine.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use alpha_core::error::SizingError;
use alpha_core::{
    quantity_snapshot, AlphaResult, Broker, ContractResolver, ExecutionStyle, Frequency, Order,
    OrderFactory, Signal, Ticker, TimeInForce,
};

/// Per-cycle inputs shared by the sizing hooks.
pub struct SizingContext<'a> {
    order_factory: &'a dyn OrderFactory,
    held: &'a HashMap<Ticker, i64>,
    pub time_in_force: TimeInForce,
    pub frequency: Frequency,
}

impl SizingContext<'_> {
    pub fn order_factory(&self) -> &dyn OrderFactory {
        self.order_factory
    }

    /// Broker-reported signed quantity for a contract at cycle start,
    /// 0 if none. Orders generated earlier in the same pass are
    /// deliberately not reflected here.
    pub fn existing_position_quantity(&self, contract: &Ticker) -> i64 {
        self.held.get(contract).copied().unwrap_or(0)
    }
}

/// Sizing strategy hooks.
///
/// An implementation turns one signal into at most one market order
/// and, optionally, one protective stop. Returning `Ok(None)` from the
/// market hook means the target resolves to a no-op at current
/// holdings.
pub trait SizingAlgorithm: Send + Sync {
    /// The market order that moves the position toward the signal's
    /// target.
    fn market_order(
        &self,
        ctx: &SizingContext<'_>,
        contract: &Ticker,
        signal: &Signal,
    ) -> AlphaResult<Option<Order>>;

    /// The protective stop for the position resulting from this cycle.
    ///
    /// The stop quantity is the negative of the existing position plus
    /// the just-generated market quantity, so a triggered stop always
    /// flattens the whole position, not just the new trade.
    fn stop_order(
        &self,
        ctx: &SizingContext<'_>,
        contract: &Ticker,
        signal: &Signal,
        market_order: Option<&Order>,
    ) -> AlphaResult<Option<Order>> {
        let Some(stop_price) = signal.stop_price() else {
            return Ok(None);
        };

        let mut stop_quantity = ctx.existing_position_quantity(contract);
        if let Some(order) = market_order {
            stop_quantity += order.quantity;
        }

        let stop_orders = ctx.order_factory().orders(
            HashMap::from([(contract.clone(), -stop_quantity)]),
            ExecutionStyle::Stop { stop_price },
            ctx.time_in_force,
        )?;
        single_order(stop_orders, contract)
    }

    /// Get the algorithm name, used for logging.
    fn name(&self) -> &str;
}

/// A single-contract factory request must yield zero or one order;
/// anything else is an upstream contract breach.
pub(crate) fn single_order(mut orders: Vec<Order>, contract: &Ticker) -> AlphaResult<Option<Order>> {
    match orders.len() {
        0 => Ok(None),
        1 => Ok(Some(orders.remove(0))),
        count => Err(SizingError::OrderCardinality {
            ticker: contract.clone(),
            count,
        }
        .into()),
    }
}

/// Converts a cycle's signals into broker orders through a pluggable
/// sizing algorithm.
pub struct PositionSizer {
    broker: Arc<dyn Broker>,
    order_factory: Arc<dyn OrderFactory>,
    resolver: Arc<dyn ContractResolver>,
    algorithm: Box<dyn SizingAlgorithm>,
}

impl PositionSizer {
    pub fn new(
        broker: Arc<dyn Broker>,
        order_factory: Arc<dyn OrderFactory>,
        resolver: Arc<dyn ContractResolver>,
        algorithm: Box<dyn SizingAlgorithm>,
    ) -> Self {
        Self {
            broker,
            order_factory,
            resolver,
            algorithm,
        }
    }

    pub fn algorithm_name(&self) -> &str {
        self.algorithm.name()
    }

    /// Convert signals into orders.
    ///
    /// Positions are snapshotted once at entry; every stop quantity is
    /// computed against that snapshot, never against orders generated
    /// earlier in the same pass. Signals whose instrument has no
    /// resolvable contract are skipped.
    pub fn size_signals(
        &self,
        signals: &[Signal],
        use_stop_losses: bool,
        time_in_force: TimeInForce,
        frequency: Frequency,
    ) -> AlphaResult<Vec<Order>> {
        let positions = self.broker.get_positions()?;
        let held = quantity_snapshot(&positions)?;
        let ctx = SizingContext {
            order_factory: self.order_factory.as_ref(),
            held: &held,
            time_in_force,
            frequency,
        };

        let mut orders = Vec::new();
        for signal in signals {
            let contract = match self.resolver.resolve(&signal.instrument) {
                Ok(contract) => contract,
                Err(err) => {
                    warn!(instrument = %signal.instrument, %err, "skipping signal without a tradable contract");
                    continue;
                }
            };

            let market_order = self.algorithm.market_order(&ctx, &contract, signal)?;
            if market_order.is_none() {
                debug!(%contract, "no position change required");
            }

            if use_stop_losses {
                let stop_order =
                    self.algorithm
                        .stop_order(&ctx, &contract, signal, market_order.as_ref())?;
                orders.extend(market_order);
                orders.extend(stop_order);
            } else {
                orders.extend(market_order);
            }
        }

        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doubles::{StaticResolver, StubBroker, StubOrderFactory};
    use crate::InitialRiskSizer;
    use alpha_core::error::AlphaError;
    use alpha_core::{Exposure, FutureTicker, Instrument, Position, Signal};
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn sizer_with(
        positions: Vec<Position>,
        factory: StubOrderFactory,
        resolver: StaticResolver,
    ) -> (PositionSizer, Arc<StubOrderFactory>) {
        let factory = Arc::new(factory);
        (
            PositionSizer::new(
                Arc::new(StubBroker::new(positions)),
                factory.clone(),
                Arc::new(resolver),
                Box::new(InitialRiskSizer::new(0.02).unwrap()),
            ),
            factory,
        )
    }

    fn long_signal(symbol: &str, fraction_at_risk: f64) -> Signal {
        Signal::new(
            Instrument::Single(Ticker::from(symbol)),
            Exposure::Long,
            fraction_at_risk,
            dec!(100),
            Utc::now(),
        )
    }

    #[test]
    fn test_stop_unwinds_existing_plus_market_quantity() {
        let positions = vec![Position::new(Ticker::from("AAPL"), 30, dec!(90))];
        let factory = StubOrderFactory::new().with_market_quantity(Ticker::from("AAPL"), 20);
        let (sizer, factory) = sizer_with(positions, factory, StaticResolver::empty());

        let orders = sizer
            .size_signals(
                &[long_signal("AAPL", 0.04)],
                true,
                TimeInForce::Opg,
                Frequency::Daily,
            )
            .unwrap();

        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].quantity, 20);
        assert_eq!(orders[0].execution_style, ExecutionStyle::Market);
        // Stop flattens existing 30 plus the new 20.
        assert_eq!(orders[1].quantity, -50);
        assert!(matches!(
            orders[1].execution_style,
            ExecutionStyle::Stop { .. }
        ));

        let targets = factory.recorded_targets.lock().unwrap();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].1, 0.5);
    }

    #[test]
    fn test_no_stop_when_disabled() {
        let factory = StubOrderFactory::new().with_market_quantity(Ticker::from("AAPL"), 20);
        let (sizer, _) = sizer_with(vec![], factory, StaticResolver::empty());

        let orders = sizer
            .size_signals(
                &[long_signal("AAPL", 0.04)],
                false,
                TimeInForce::Opg,
                Frequency::Daily,
            )
            .unwrap();

        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].execution_style, ExecutionStyle::Market);
    }

    #[test]
    fn test_out_signal_stop_never_exceeds_flatten_quantity() {
        // Existing long of 10 gets flattened by a -10 market order; the
        // combined quantity is zero so no stop order is produced at all.
        let positions = vec![Position::new(Ticker::from("AAPL"), 10, dec!(90))];
        let factory = StubOrderFactory::new().with_market_quantity(Ticker::from("AAPL"), -10);
        let (sizer, _) = sizer_with(positions, factory, StaticResolver::empty());

        let signal = Signal::new(
            Instrument::Single(Ticker::from("AAPL")),
            Exposure::Out,
            0.04,
            dec!(100),
            Utc::now(),
        );
        let orders = sizer
            .size_signals(&[signal], true, TimeInForce::Opg, Frequency::Daily)
            .unwrap();

        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].quantity, -10);
        assert_eq!(orders[0].execution_style, ExecutionStyle::Market);
    }

    #[test]
    fn test_future_signal_sizes_the_current_contract() {
        let factory = StubOrderFactory::new().with_market_quantity(Ticker::from("GCM6"), 3);
        let resolver = StaticResolver::empty().with_contract("GC", Ticker::from("GCM6"));
        let (sizer, factory) = sizer_with(vec![], factory, resolver);

        let signal = Signal::new(
            Instrument::Future(FutureTicker::new("GC")),
            Exposure::Long,
            0.04,
            dec!(1900),
            Utc::now(),
        );
        let orders = sizer
            .size_signals(&[signal], false, TimeInForce::Opg, Frequency::Daily)
            .unwrap();

        // The order and the recorded target land on the resolved
        // contract, not the family symbol.
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].ticker, Ticker::from("GCM6"));
        assert_eq!(orders[0].quantity, 3);
        let targets = factory.recorded_targets.lock().unwrap();
        assert_eq!(targets[0].0, Ticker::from("GCM6"));
    }

    #[test]
    fn test_unresolvable_instrument_is_skipped() {
        let factory = StubOrderFactory::new().with_market_quantity(Ticker::from("AAPL"), 20);
        let (sizer, factory) = sizer_with(vec![], factory, StaticResolver::empty());

        let dead_future = Signal::new(
            Instrument::Future(FutureTicker::new("XX")),
            Exposure::Long,
            0.04,
            dec!(100),
            Utc::now(),
        );
        let orders = sizer
            .size_signals(
                &[dead_future, long_signal("AAPL", 0.04)],
                false,
                TimeInForce::Opg,
                Frequency::Daily,
            )
            .unwrap();

        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].ticker, Ticker::from("AAPL"));
        assert_eq!(factory.recorded_targets.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_factory_cardinality_breach_is_fatal() {
        let factory = StubOrderFactory::new()
            .with_market_quantity(Ticker::from("AAPL"), 20)
            .with_orders_per_key(2);
        let (sizer, _) = sizer_with(vec![], factory, StaticResolver::empty());

        let err = sizer
            .size_signals(
                &[long_signal("AAPL", 0.04)],
                false,
                TimeInForce::Opg,
                Frequency::Daily,
            )
            .unwrap_err();

        assert!(matches!(
            err,
            AlphaError::Sizing(SizingError::OrderCardinality { count: 2, .. })
        ));
    }
}
