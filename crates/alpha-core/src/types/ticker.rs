//! Instrument identity.

use serde::{Deserialize, Serialize};

/// Identity of a concrete, directly tradable contract.
///
/// For equities this is the plain symbol ("AAPL"); for futures it is a
/// specific dated contract ("GCM6").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Ticker(String);

impl Ticker {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Ticker {
    fn from(symbol: &str) -> Self {
        Self(symbol.to_string())
    }
}

impl std::fmt::Display for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A continuous-futures identity: a *family* of dated contracts that
/// maps at any time to one concrete contract.
///
/// Specific contracts carry the family symbol as a prefix followed by a
/// contract code, e.g. family "GC" covers "GCM6", "GCZ6" and so on.
/// Resolving the *current* contract needs reference data and lives
/// behind [`crate::traits::ContractResolver`]; membership is a pure
/// symbol check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FutureTicker {
    family: String,
}

impl FutureTicker {
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
        }
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    /// Whether a specific contract belongs to this family.
    pub fn belongs_to_family(&self, ticker: &Ticker) -> bool {
        ticker.as_str().len() > self.family.len() && ticker.as_str().starts_with(&self.family)
    }
}

impl std::fmt::Display for FutureTicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.family)
    }
}

/// What an alpha model trades: either a single concrete contract or a
/// futures family.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instrument {
    Single(Ticker),
    Future(FutureTicker),
}

impl Instrument {
    /// Stable display name: the symbol or the family symbol.
    pub fn name(&self) -> &str {
        match self {
            Instrument::Single(ticker) => ticker.as_str(),
            Instrument::Future(family) => family.family(),
        }
    }
}

impl std::fmt::Display for Instrument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
