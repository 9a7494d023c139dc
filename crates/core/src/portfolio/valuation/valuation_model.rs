//! Portfolio valuation domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate metrics over the full asset set for one display currency.
///
/// Recomputed on demand, never stored. Always covers every asset
/// regardless of the active search filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioMetrics {
    /// Code of the display currency the monetary values are denominated in.
    pub currency: String,
    pub total_value: Decimal,
    /// Absolute 24h gain/loss in the display currency.
    pub change_24h: Decimal,
    /// 24h change relative to the total value, in percent. `None` when the
    /// portfolio has no value to measure against.
    pub change_24h_percent: Option<Decimal>,
    /// Synthetic all-time high: a fixed factor over the current total, not
    /// derived from price history.
    pub all_time_high: Decimal,
    /// Distance from the all-time high, in percent. Negative below the
    /// high; `None` when there is no high to compare against.
    pub ath_drawdown_percent: Option<Decimal>,
    pub asset_count: usize,
    /// Number of assets with a strictly positive 24h change.
    pub gainers: usize,
    pub calculated_at: DateTime<Utc>,
}
