//! Orders and execution styles.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Ticker;

/// How an order should be executed.
///
/// Pure value type: equality and hashing are structural, so styles can
/// serve as grouping keys in order merging and deduplication. Two stop
/// styles are equal iff their stop prices match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "style")]
pub enum ExecutionStyle {
    Market,
    MarketOnClose,
    Stop { stop_price: Decimal },
}

impl std::fmt::Display for ExecutionStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecutionStyle::Market => write!(f, "MARKET"),
            ExecutionStyle::MarketOnClose => write!(f, "MARKET_ON_CLOSE"),
            ExecutionStyle::Stop { stop_price } => write!(f, "STOP @ {}", stop_price),
        }
    }
}

/// Time in force for orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeInForce {
    /// Valid for the trading day only
    #[default]
    Day,
    /// Good til canceled
    Gtc,
    /// At market open
    Opg,
}

impl std::fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeInForce::Day => write!(f, "DAY"),
            TimeInForce::Gtc => write!(f, "GTC"),
            TimeInForce::Opg => write!(f, "OPG"),
        }
    }
}

/// A concrete broker instruction produced by the sizer. Consumed by the
/// broker once placed; the strategy never amends an order in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order ID
    pub id: Uuid,
    /// Specific contract to trade
    pub ticker: Ticker,
    /// Signed quantity: positive buys, negative sells
    pub quantity: i64,
    /// Execution style
    pub execution_style: ExecutionStyle,
    /// Time in force
    pub time_in_force: TimeInForce,
    /// When the order was created
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(
        ticker: Ticker,
        quantity: i64,
        execution_style: ExecutionStyle,
        time_in_force: TimeInForce,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            ticker,
            quantity,
            execution_style,
            time_in_force,
            created_at: Utc::now(),
        }
    }

    pub fn is_buy(&self) -> bool {
        self.quantity > 0
    }

    pub fn is_sell(&self) -> bool {
        self.quantity < 0
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:+} {} {} ({})",
            self.quantity, self.ticker, self.execution_style, self.time_in_force
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashSet;

    #[test]
    fn test_execution_style_equality() {
        assert_eq!(ExecutionStyle::Market, ExecutionStyle::Market);
        assert_ne!(ExecutionStyle::Market, ExecutionStyle::MarketOnClose);

        let stop = ExecutionStyle::Stop {
            stop_price: dec!(101.5),
        };
        assert_eq!(
            stop,
            ExecutionStyle::Stop {
                stop_price: dec!(101.5)
            }
        );
        assert_ne!(
            stop,
            ExecutionStyle::Stop {
                stop_price: dec!(101.6)
            }
        );
        assert_ne!(stop, ExecutionStyle::Market);
    }

    #[test]
    fn test_execution_style_as_set_key() {
        let mut styles = HashSet::new();
        styles.insert(ExecutionStyle::Market);
        styles.insert(ExecutionStyle::Market);
        styles.insert(ExecutionStyle::Stop {
            stop_price: dec!(99),
        });
        styles.insert(ExecutionStyle::Stop {
            stop_price: dec!(99),
        });
        styles.insert(ExecutionStyle::Stop {
            stop_price: dec!(98),
        });
        assert_eq!(styles.len(), 3);
    }

    #[test]
    fn test_execution_style_labels() {
        assert_eq!(ExecutionStyle::Market.to_string(), "MARKET");
        assert_eq!(
            ExecutionStyle::Stop {
                stop_price: dec!(95.25)
            }
            .to_string(),
            "STOP @ 95.25"
        );
    }

    #[test]
    fn test_order_direction() {
        let buy = Order::new(
            Ticker::from("AAPL"),
            10,
            ExecutionStyle::Market,
            TimeInForce::Day,
        );
        assert!(buy.is_buy());
        assert!(!buy.is_sell());

        let sell = Order::new(
            Ticker::from("AAPL"),
            -10,
            ExecutionStyle::Market,
            TimeInForce::Day,
        );
        assert!(sell.is_sell());
    }
}
