//! Strategy cycle frequency.

use serde::{Deserialize, Serialize};

/// How often the strategy runs and at which bar resolution models are
/// queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Minutely,
    Hourly,
    #[default]
    Daily,
    Weekly,
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Frequency::Minutely => write!(f, "1min"),
            Frequency::Hourly => write!(f, "1h"),
            Frequency::Daily => write!(f, "1d"),
            Frequency::Weekly => write!(f, "1w"),
        }
    }
}
