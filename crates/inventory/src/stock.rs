use serde::{Deserialize, Serialize};

use storefront_core::null_as_zero;

/// Requested or observed change in stock level for a product.
///
/// Positive deltas add stock, negative deltas remove it. `stock_delta` is
/// always emitted, even when zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Inventory {
    #[serde(deserialize_with = "null_as_zero")]
    pub stock_delta: i64,
}

/// Sign of a stock delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockDirection {
    Increase,
    Decrease,
    Unchanged,
}

impl Inventory {
    pub fn new(stock_delta: i64) -> Self {
        Self { stock_delta }
    }

    pub fn direction(&self) -> StockDirection {
        match self.stock_delta.signum() {
            1 => StockDirection::Increase,
            -1 => StockDirection::Decrease,
            _ => StockDirection::Unchanged,
        }
    }

    /// Number of units moved, regardless of direction.
    pub fn magnitude(&self) -> u64 {
        self.stock_delta.unsigned_abs()
    }
}

impl From<i64> for Inventory {
    fn from(stock_delta: i64) -> Self {
        Self::new(stock_delta)
    }
}
