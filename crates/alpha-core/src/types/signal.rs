//! Trading signals.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Exposure, Instrument};

/// A model's recommended exposure and risk parameters for one
/// instrument at one point in time.
///
/// Produced once per (model, instrument) per cycle. The suggested
/// exposure stays mutable so the position cap can suppress the signal
/// (force it OUT) before sizing; a suppressed signal is still sized so
/// an existing position gets flattened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub instrument: Instrument,
    pub suggested_exposure: Exposure,
    /// Fractional adverse price move at which the stop would trigger
    pub fraction_at_risk: f64,
    /// Last price known to the model when the signal was produced
    pub last_price: Decimal,
    pub timestamp: DateTime<Utc>,
}

impl Signal {
    pub fn new(
        instrument: Instrument,
        suggested_exposure: Exposure,
        fraction_at_risk: f64,
        last_price: Decimal,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            instrument,
            suggested_exposure,
            fraction_at_risk,
            last_price,
            timestamp,
        }
    }

    /// Price level implying the maximum tolerable adverse move for the
    /// suggested direction. `None` when the signal carries no direction
    /// or the risk fraction has no decimal representation.
    pub fn stop_price(&self) -> Option<Decimal> {
        let fraction = Decimal::from_f64(self.fraction_at_risk)?;
        match self.suggested_exposure {
            Exposure::Long => Some(self.last_price * (Decimal::ONE - fraction)),
            Exposure::Short => Some(self.last_price * (Decimal::ONE + fraction)),
            Exposure::Out => None,
        }
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} fraction_at_risk={} last_price={}",
            self.instrument, self.suggested_exposure, self.fraction_at_risk, self.last_price
        )
    }
}
