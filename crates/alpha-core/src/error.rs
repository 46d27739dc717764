//! Error taxonomy for the order pipeline.
//!
//! Fatal conditions (sizing preconditions, portfolio invariants,
//! order-factory contract breaches) abort the current cycle before any
//! order is submitted. The only recoverable condition is
//! [`NoValidContract`], which callers treat as a per-instrument skip.

use thiserror::Error;

use crate::types::Ticker;

/// Top-level pipeline error.
#[derive(Error, Debug)]
pub enum AlphaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Sizing error: {0}")]
    Sizing(#[from] SizingError),

    #[error("Exposure error: {0}")]
    Exposure(#[from] ExposureError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Order factory error: {0}")]
    Factory(#[from] FactoryError),

    #[error("Broker error: {0}")]
    Broker(#[from] BrokerError),
}

/// Sizing precondition violations and contract breaches.
///
/// All of these are fatal for the cycle: a malformed risk input must
/// never silently produce a nonsensical order size.
#[derive(Error, Debug)]
pub enum SizingError {
    #[error("initial risk must be a finite fraction in (0, 1], got {0}")]
    InvalidInitialRisk(f64),

    #[error("fraction_at_risk for {ticker} must be finite, got {value}")]
    NonFiniteFractionAtRisk { ticker: Ticker, value: f64 },

    #[error("target percentage for {ticker} is not finite ({value})")]
    NonFiniteTargetPercentage { ticker: Ticker, value: f64 },

    #[error("order factory returned {count} orders for a single-contract request on {ticker}")]
    OrderCardinality { ticker: Ticker, count: usize },
}

/// Portfolio snapshot invariant violations.
#[derive(Error, Debug)]
pub enum ExposureError {
    #[error("more than one open position for ticker {0}")]
    DuplicatePosition(Ticker),

    #[error("multiple expired contracts still open for family {family}: {tickers:?}")]
    StrandedContracts { family: String, tickers: Vec<Ticker> },
}

/// A futures family has no tradable current contract (e.g. the last
/// known contract expired and no successor is listed yet).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no valid current contract for futures family {0}")]
pub struct NoValidContract(pub String);

/// Alpha model failures.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error(transparent)]
    NoValidContract(#[from] NoValidContract),

    #[error("model failure: {0}")]
    Internal(String),
}

/// Order factory failures.
#[derive(Error, Debug)]
pub enum FactoryError {
    #[error("no price available for {0}")]
    MissingPrice(Ticker),

    #[error("portfolio value unavailable")]
    MissingPortfolioValue,

    #[error("order factory failure: {0}")]
    Internal(String),
}

/// Broker-side failures.
#[derive(Error, Debug)]
pub enum BrokerError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Order rejected: {0}")]
    OrderRejected(String),

    #[error("Broker error: {0}")]
    Internal(String),
}

/// Result type alias for pipeline operations.
pub type AlphaResult<T> = Result<T, AlphaError>;
