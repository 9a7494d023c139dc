//! Dashboard view models for frontend display.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::BASE_CURRENCY;
use crate::fx::Currency;
use crate::portfolio::PortfolioMetrics;
use crate::sparkline::Sparkline;

/// Ephemeral per-session UI state.
///
/// Mutates on user interaction, lives for the whole session, and is never
/// reset. Every change triggers a synchronous view recomputation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    pub search_query: String,
    pub selected_currency: String,
}

impl Default for UiState {
    fn default() -> Self {
        UiState {
            search_query: String::new(),
            selected_currency: BASE_CURRENCY.to_string(),
        }
    }
}

/// One displayed table row: the asset plus its converted values, display
/// strings, and sparkline geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetRow {
    pub id: i64,
    pub name: String,
    pub symbol: String,
    /// Price converted into the display currency.
    pub price: Decimal,
    pub change_24h: Decimal,
    pub holdings: Decimal,
    /// Position value converted into the display currency.
    pub market_value: Decimal,
    pub formatted_price: String,
    pub formatted_market_value: String,
    /// Quantity plus symbol, e.g. "5,000 XRP".
    pub formatted_holdings: String,
    /// Signed percent label, e.g. "+2.34%".
    pub formatted_change_24h: String,
    pub sparkline: Sparkline,
}

/// Everything the presentation layer needs for one render pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    /// The resolved display currency.
    pub currency: Currency,
    /// Metrics over the full asset set, unaffected by the search filter.
    pub metrics: PortfolioMetrics,
    /// Filtered rows in their original relative order.
    pub rows: Vec<AssetRow>,
}
