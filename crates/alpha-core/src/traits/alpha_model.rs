//! Alpha model trait definition.

use chrono::{DateTime, Utc};

use crate::error::ModelError;
use crate::types::{Exposure, Frequency, Instrument, Signal};

/// A signal-producing model. Treated as a black box by the pipeline.
pub trait AlphaModel: Send + Sync {
    /// Produce the model's recommendation for one instrument at the
    /// current timestamp.
    ///
    /// A `ModelError::NoValidContract` result means the instrument has
    /// no resolvable contract this cycle and is skipped, not fatal.
    fn get_signal(
        &self,
        instrument: &Instrument,
        current_exposure: Exposure,
        timestamp: DateTime<Utc>,
        frequency: Frequency,
    ) -> Result<Signal, ModelError>;

    /// Get the model name.
    fn name(&self) -> &str;
}
