//! Contract resolution trait definition.

use crate::error::NoValidContract;
use crate::types::{FutureTicker, Instrument, Ticker};

/// Maps a futures family to the concrete contract currently traded.
///
/// This is the reference-data collaborator behind the "current specific
/// contract" query; ticker values themselves stay cheap, hashable
/// identities.
pub trait ContractResolver: Send + Sync {
    /// The currently tradable specific contract for a family.
    fn current_contract(&self, family: &FutureTicker) -> Result<Ticker, NoValidContract>;

    /// Resolve an instrument to the specific contract orders would
    /// trade. Single-contract instruments resolve to themselves.
    fn resolve(&self, instrument: &Instrument) -> Result<Ticker, NoValidContract> {
        match instrument {
            Instrument::Single(ticker) => Ok(ticker.clone()),
            Instrument::Future(family) => self.current_contract(family),
        }
    }
}
