//! Puts models and their settings together and turns signals into
//! orders once per trading cycle.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info, warn};

use alpha_core::error::{ExposureError, ModelError};
use alpha_core::{
    quantity_snapshot, AlphaModel, AlphaResult, Broker, ContractResolver, Exposure, Frequency,
    FutureTicker, Instrument, OrdersFilter, Position, RollingOrdersGenerator, Signal, Ticker,
    TimeInForce,
};
use alpha_risk::PositionSizer;

/// Tunables for a strategy instance.
#[derive(Debug, Clone)]
pub struct StrategyConfig {
    /// Generate protective stop orders alongside market orders
    pub use_stop_losses: bool,
    /// Cap on positions open at the same time; `None` means unlimited
    pub max_open_positions: Option<usize>,
    /// Time in force for generated orders
    pub time_in_force: TimeInForce,
    /// Cycle frequency passed through to models and the order factory
    pub frequency: Frequency,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            use_stop_losses: true,
            max_open_positions: None,
            time_in_force: TimeInForce::Opg,
            frequency: Frequency::Daily,
        }
    }
}

/// Top-level orchestrator of the signal-to-order pipeline.
///
/// Each cycle runs four sequential phases: signal generation, cap
/// enforcement, order generation, submission. The position snapshot is
/// taken exactly once at cycle start and shared by every
/// reconciliation step.
pub struct AlphaModelStrategy {
    broker: Arc<dyn Broker>,
    position_sizer: PositionSizer,
    rolling_orders: Arc<dyn RollingOrdersGenerator>,
    resolver: Arc<dyn ContractResolver>,
    orders_filters: Vec<Box<dyn OrdersFilter>>,
    models: Vec<(Arc<dyn AlphaModel>, Vec<Instrument>)>,
    config: StrategyConfig,
}

impl AlphaModelStrategy {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        broker: Arc<dyn Broker>,
        position_sizer: PositionSizer,
        rolling_orders: Arc<dyn RollingOrdersGenerator>,
        resolver: Arc<dyn ContractResolver>,
        orders_filters: Vec<Box<dyn OrdersFilter>>,
        models: Vec<(Arc<dyn AlphaModel>, Vec<Instrument>)>,
        config: StrategyConfig,
    ) -> Self {
        let strategy = Self {
            broker,
            position_sizer,
            rolling_orders,
            resolver,
            orders_filters,
            models,
            config,
        };
        strategy.log_configuration();
        strategy
    }

    /// Run one full trading cycle at the given logical timestamp.
    ///
    /// A fatal error anywhere before submission aborts the cycle with
    /// no orders placed; submission itself is all-or-nothing on the
    /// constructed list.
    pub fn calculate_and_place_orders(&self, now: DateTime<Utc>) -> AlphaResult<()> {
        let date = now.date_naive();
        info!(%date, "signal generation started");
        let positions = self.broker.get_positions()?;
        let mut signals = self.calculate_signals(&positions, now)?;
        info!(%date, count = signals.len(), "signal generation finished");
        for signal in &signals {
            debug!(%signal, "signal");
        }

        if let Some(max_open) = self.config.max_open_positions {
            enforce_position_cap(&mut signals, &positions, max_open, now);
        }

        info!(%date, "placing orders");
        self.place_orders(&signals)?;
        info!(%date, "orders placed");
        Ok(())
    }

    /// Phase 1: one signal per (model, instrument), against exposure
    /// derived from the cycle-start snapshot.
    fn calculate_signals(
        &self,
        positions: &[Position],
        now: DateTime<Utc>,
    ) -> AlphaResult<Vec<Signal>> {
        let held = quantity_snapshot(positions)?;
        let mut signals = Vec::new();

        for (model, instruments) in &self.models {
            let mut seen = HashSet::new();
            for instrument in instruments {
                if !seen.insert(instrument) {
                    continue;
                }

                let exposure = match instrument {
                    Instrument::Single(ticker) => {
                        Exposure::from_quantity(held.get(ticker).copied().unwrap_or(0))
                    }
                    Instrument::Future(family) => {
                        let current = match self.resolver.current_contract(family) {
                            Ok(contract) => contract,
                            Err(err) => {
                                warn!(model = model.name(), %family, %err,
                                    "skipping instrument without a current contract");
                                continue;
                            }
                        };
                        family_exposure(family, &current, positions, &held)?
                    }
                };

                match model.get_signal(instrument, exposure, now, self.config.frequency) {
                    Ok(signal) => signals.push(signal),
                    Err(ModelError::NoValidContract(err)) => {
                        warn!(model = model.name(), %instrument, %err,
                            "model produced no signal, skipping instrument");
                    }
                    Err(err) => return Err(err.into()),
                }
            }
        }

        Ok(signals)
    }

    /// Phases 3 and 4: size the signals, merge rolling close orders,
    /// filter, then cancel all open orders and submit the new list.
    fn place_orders(&self, signals: &[Signal]) -> AlphaResult<()> {
        info!(
            sizer = self.position_sizer.algorithm_name(),
            "converting signals to orders"
        );
        let mut orders = self.position_sizer.size_signals(
            signals,
            self.config.use_stop_losses,
            self.config.time_in_force,
            self.config.frequency,
        )?;

        orders.extend(self.rolling_orders.generate_close_orders()?);

        for filter in &self.orders_filters {
            if !orders.is_empty() {
                info!(filter = filter.name(), "filtering orders");
                orders = filter.adjust_orders(orders);
            }
        }

        info!("cancelling all open orders");
        self.broker.cancel_all_open_orders()?;

        info!(count = orders.len(), "placing orders");
        self.broker.place_orders(orders)?;
        Ok(())
    }

    fn log_configuration(&self) {
        info!(
            use_stop_losses = self.config.use_stop_losses,
            max_open_positions = ?self.config.max_open_positions,
            time_in_force = %self.config.time_in_force,
            frequency = %self.config.frequency,
            "alpha model strategy configuration"
        );
        for (model, instruments) in &self.models {
            let universe: Vec<&str> = instruments.iter().map(Instrument::name).collect();
            info!(model = model.name(), instruments = ?universe, "model universe");
        }
    }
}

/// Exposure of a futures family in the snapshot.
///
/// The current contract's quantity wins when a position on it exists.
/// Otherwise a roll may have left a position on a previous contract
/// behind; a single such stranded position determines the exposure,
/// while two or more indicate an unresolved roll and are fatal.
fn family_exposure(
    family: &FutureTicker,
    current: &Ticker,
    positions: &[Position],
    held: &HashMap<Ticker, i64>,
) -> Result<Exposure, ExposureError> {
    let mut quantity = held.get(current).copied().unwrap_or(0);

    if quantity == 0 {
        let matching: Vec<&Position> = positions
            .iter()
            .filter(|position| family.belongs_to_family(&position.ticker))
            .collect();

        if matching.len() > 1 {
            return Err(ExposureError::StrandedContracts {
                family: family.family().to_string(),
                tickers: matching.iter().map(|p| p.ticker.clone()).collect(),
            });
        }
        quantity = matching.first().map(|p| p.quantity).unwrap_or(0);
    }

    Ok(Exposure::from_quantity(quantity))
}

/// Phase 2: suppress new-position signals so that open plus newly
/// opened positions never exceed `max_open`.
///
/// Signals touching already-open positions are never suppressed;
/// closing or adjusting existing risk must not be blocked by the cap.
/// Candidates are suppressed in ascending `fraction_at_risk` order,
/// ties broken by an RNG seeded with the cycle timestamp, so a
/// backtest replay of the same cycle reproduces the identical choice.
/// This is a reproducibility mechanism, not a source of security-grade
/// randomness.
///
/// Suppressed signals stay in the list with exposure forced to OUT, so
/// sizing still flattens any position they might refer to.
pub fn enforce_position_cap(
    signals: &mut [Signal],
    positions: &[Position],
    max_open: usize,
    now: DateTime<Utc>,
) {
    let open_tickers: HashSet<&Ticker> = positions.iter().map(|p| &p.ticker).collect();
    let has_open_position = |instrument: &Instrument| match instrument {
        Instrument::Single(ticker) => open_tickers.contains(ticker),
        // A family counts as one open position no matter how many of
        // its contracts are mid-roll.
        Instrument::Future(family) => open_tickers.iter().any(|t| family.belongs_to_family(t)),
    };

    let mut open_count = 0usize;
    let mut candidates: Vec<usize> = Vec::new();
    for (idx, signal) in signals.iter().enumerate() {
        if has_open_position(&signal.instrument) {
            open_count += 1;
        } else if !signal.suggested_exposure.is_out() {
            candidates.push(idx);
        }
    }

    let planned = open_count + candidates.len();
    if planned <= max_open {
        return;
    }

    // Only new-position signals may be trimmed, even when the open
    // positions alone exceed the cap.
    let excess = (planned - max_open).min(candidates.len());
    info!(planned, max_open, excess, "position cap exceeded, suppressing new-position signals");

    // Candidate order is the signal order, so the tie-break keys are
    // reproducible for a fixed timestamp.
    let mut rng = StdRng::seed_from_u64(now.timestamp() as u64);
    let mut keyed: Vec<(usize, u64)> = candidates
        .into_iter()
        .map(|idx| (idx, rng.gen::<u64>()))
        .collect();
    keyed.sort_by(|&(a, key_a), &(b, key_b)| {
        signals[a]
            .fraction_at_risk
            .partial_cmp(&signals[b].fraction_at_risk)
            .unwrap_or(Ordering::Equal)
            .then(key_a.cmp(&key_b))
    });

    for &(idx, _) in keyed.iter().take(excess) {
        warn!(instrument = %signals[idx].instrument, "suppressing signal to honor the position cap");
        signals[idx].suggested_exposure = Exposure::Out;
    }
}
