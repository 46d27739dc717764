//! Test doubles for the sizing engine.

use std::collections::HashMap;
use std::sync::Mutex;

use alpha_core::error::{BrokerError, FactoryError, NoValidContract};
use alpha_core::{
    Broker, ContractResolver, ExecutionStyle, Frequency, FutureTicker, Order, OrderFactory,
    Position, Ticker, TimeInForce,
};

/// Broker stub returning a fixed position snapshot.
pub struct StubBroker {
    positions: Vec<Position>,
}

impl StubBroker {
    pub fn new(positions: Vec<Position>) -> Self {
        Self { positions }
    }
}

impl Broker for StubBroker {
    fn get_positions(&self) -> Result<Vec<Position>, BrokerError> {
        Ok(self.positions.clone())
    }

    fn cancel_all_open_orders(&self) -> Result<(), BrokerError> {
        Ok(())
    }

    fn place_orders(&self, _orders: Vec<Order>) -> Result<(), BrokerError> {
        Ok(())
    }

    fn name(&self) -> &str {
        "stub-broker"
    }
}

/// Order factory double.
///
/// Portfolio math is out of scope for sizing tests, so target-percent
/// quantities come from a preset per-ticker table (no entry means the
/// target is already met); explicit quantity requests pass through.
/// Every requested target is recorded.
pub struct StubOrderFactory {
    market_quantities: HashMap<Ticker, i64>,
    orders_per_key: usize,
    pub recorded_targets: Mutex<Vec<(Ticker, f64)>>,
}

impl StubOrderFactory {
    pub fn new() -> Self {
        Self {
            market_quantities: HashMap::new(),
            orders_per_key: 1,
            recorded_targets: Mutex::new(Vec::new()),
        }
    }

    pub fn with_market_quantity(mut self, ticker: Ticker, quantity: i64) -> Self {
        self.market_quantities.insert(ticker, quantity);
        self
    }

    /// Break the one-order-per-key contract on purpose.
    pub fn with_orders_per_key(mut self, count: usize) -> Self {
        self.orders_per_key = count;
        self
    }
}

impl OrderFactory for StubOrderFactory {
    fn target_percent_orders(
        &self,
        targets: HashMap<Ticker, f64>,
        execution_style: ExecutionStyle,
        time_in_force: TimeInForce,
        _frequency: Frequency,
    ) -> Result<Vec<Order>, FactoryError> {
        let mut orders = Vec::new();
        for (ticker, target) in targets {
            self.recorded_targets
                .lock()
                .unwrap()
                .push((ticker.clone(), target));
            if let Some(&quantity) = self.market_quantities.get(&ticker) {
                for _ in 0..self.orders_per_key {
                    orders.push(Order::new(
                        ticker.clone(),
                        quantity,
                        execution_style.clone(),
                        time_in_force,
                    ));
                }
            }
        }
        Ok(orders)
    }

    fn orders(
        &self,
        quantities: HashMap<Ticker, i64>,
        execution_style: ExecutionStyle,
        time_in_force: TimeInForce,
    ) -> Result<Vec<Order>, FactoryError> {
        let mut orders = Vec::new();
        for (ticker, quantity) in quantities {
            if quantity == 0 {
                continue;
            }
            for _ in 0..self.orders_per_key {
                orders.push(Order::new(
                    ticker.clone(),
                    quantity,
                    execution_style.clone(),
                    time_in_force,
                ));
            }
        }
        Ok(orders)
    }
}

/// Resolver double backed by a fixed family→contract table.
pub struct StaticResolver {
    contracts: HashMap<String, Ticker>,
}

impl StaticResolver {
    pub fn empty() -> Self {
        Self {
            contracts: HashMap::new(),
        }
    }

    pub fn with_contract(mut self, family: &str, contract: Ticker) -> Self {
        self.contracts.insert(family.to_string(), contract);
        self
    }
}

impl ContractResolver for StaticResolver {
    fn current_contract(&self, family: &FutureTicker) -> Result<Ticker, NoValidContract> {
        self.contracts
            .get(family.family())
            .cloned()
            .ok_or_else(|| NoValidContract(family.family().to_string()))
    }
}
