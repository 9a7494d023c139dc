//! Asset domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain model representing a tracked crypto asset.
///
/// Records are constructed once at startup and never mutated. Prices are
/// denominated in the base currency; display conversion happens in the
/// view layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: i64,
    pub name: String,
    pub symbol: String,
    /// Latest price in the base currency.
    pub price: Decimal,
    /// Signed 24h change, in percent.
    pub change_24h: Decimal,
    /// Chronological price samples backing the 7-day sparkline.
    pub sparkline: Vec<Decimal>,
    /// Quantity owned.
    pub holdings: Decimal,
}

impl Asset {
    /// Market value of the position in the base currency.
    pub fn market_value(&self) -> Decimal {
        self.price * self.holdings
    }

    /// Whether the 24h change is non-negative.
    pub fn is_gaining(&self) -> bool {
        self.change_24h >= Decimal::ZERO
    }
}
