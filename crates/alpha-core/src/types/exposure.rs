//! Directional exposure.

use serde::{Deserialize, Serialize};

/// Directional stance of a position or a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Exposure {
    Long,
    Out,
    Short,
}

impl Exposure {
    /// Derive exposure from a signed position quantity.
    pub fn from_quantity(quantity: i64) -> Self {
        match quantity.signum() {
            1 => Exposure::Long,
            -1 => Exposure::Short,
            _ => Exposure::Out,
        }
    }

    /// Directional sign: +1 for long, -1 for short, 0 for out.
    pub fn sign(&self) -> i64 {
        match self {
            Exposure::Long => 1,
            Exposure::Out => 0,
            Exposure::Short => -1,
        }
    }

    pub fn is_out(&self) -> bool {
        matches!(self, Exposure::Out)
    }
}

impl std::fmt::Display for Exposure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Exposure::Long => write!(f, "LONG"),
            Exposure::Out => write!(f, "OUT"),
            Exposure::Short => write!(f, "SHORT"),
        }
    }
}
