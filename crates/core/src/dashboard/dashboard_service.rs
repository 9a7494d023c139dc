use log::debug;

use crate::assets::{default_assets, filter_assets, Asset};
use crate::errors::Result;
use crate::fx::{
    convert, default_currencies, format_amount, format_quantity, Currency, CurrencyRegistry,
};
use crate::portfolio::calculate_metrics;
use crate::sparkline::{render_sparkline, Trend, SPARKLINE_HEIGHT, SPARKLINE_WIDTH};

use super::dashboard_model::{AssetRow, DashboardView, UiState};

/// Owns the static dataset and the session UI state, and assembles the
/// view model the presentation layer renders.
///
/// All recomputation is synchronous: a view call sees exactly the state
/// left by the preceding interaction.
pub struct Dashboard {
    assets: Vec<Asset>,
    currencies: CurrencyRegistry,
    state: UiState,
}

impl Dashboard {
    /// Builds a dashboard over the given dataset and currency table.
    pub fn new(assets: Vec<Asset>, currencies: Vec<Currency>) -> Result<Self> {
        let currencies = CurrencyRegistry::new(currencies)?;
        Ok(Dashboard {
            assets,
            currencies,
            state: UiState::default(),
        })
    }

    /// Builds a dashboard over the compiled-in dataset and currency table.
    pub fn with_defaults() -> Result<Self> {
        Dashboard::new(default_assets(), default_currencies())
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn currencies(&self) -> &[Currency] {
        self.currencies.currencies()
    }

    /// Updates the search filter.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.state.search_query = query.into();
    }

    /// Selects the display currency. Unknown codes are stored as-is and
    /// resolved against the base currency at view time.
    pub fn select_currency(&mut self, code: impl Into<String>) {
        self.state.selected_currency = code.into();
    }

    /// Recomputes the full view for the current UI state: metrics over all
    /// assets, filtered rows in original order, converted and formatted
    /// per-row values, and per-row sparkline geometry.
    pub fn view(&self) -> DashboardView {
        let currency = self.currencies.resolve(&self.state.selected_currency);
        debug!(
            "Assembling dashboard view: query='{}', currency={}",
            self.state.search_query, currency.code
        );

        let metrics = calculate_metrics(&self.assets, currency);
        let rows = filter_assets(&self.assets, &self.state.search_query)
            .into_iter()
            .map(|asset| build_row(asset, currency))
            .collect();

        DashboardView {
            currency: currency.clone(),
            metrics,
            rows,
        }
    }
}

fn build_row(asset: Asset, currency: &Currency) -> AssetRow {
    let price = convert(asset.price, currency);
    let market_value = convert(asset.market_value(), currency);
    let trend = Trend::from_change(asset.change_24h);
    let sparkline = render_sparkline(&asset.sparkline, trend, SPARKLINE_WIDTH, SPARKLINE_HEIGHT);

    let sign = if asset.is_gaining() { "+" } else { "" };

    AssetRow {
        formatted_price: format_amount(price, currency),
        formatted_market_value: format_amount(market_value, currency),
        formatted_holdings: format!("{} {}", format_quantity(asset.holdings), asset.symbol),
        formatted_change_24h: format!("{}{:.2}%", sign, asset.change_24h),
        id: asset.id,
        name: asset.name,
        symbol: asset.symbol,
        price,
        change_24h: asset.change_24h,
        holdings: asset.holdings,
        market_value,
        sparkline,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_view_in_usd() {
        let dashboard = Dashboard::with_defaults().unwrap();
        let view = dashboard.view();

        assert_eq!(view.currency.code, "USD");
        assert_eq!(view.rows.len(), 6);
        assert_eq!(view.metrics.total_value, dec!(59035.136));
        assert_eq!(view.metrics.asset_count, 6);

        let bitcoin = &view.rows[0];
        assert_eq!(bitcoin.symbol, "BTC");
        assert_eq!(bitcoin.formatted_price, "$67,234.56");
        assert_eq!(bitcoin.formatted_market_value, "$33,617.28");
        assert_eq!(bitcoin.formatted_holdings, "0.5 BTC");
        assert_eq!(bitcoin.formatted_change_24h, "+2.34%");
        assert_eq!(bitcoin.sparkline.points.len(), 7);
    }

    #[test]
    fn test_search_filters_rows_but_not_metrics() {
        let mut dashboard = Dashboard::with_defaults().unwrap();
        let unfiltered_total = dashboard.view().metrics.total_value;

        dashboard.set_search_query("eth");
        let view = dashboard.view();

        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].name, "Ethereum");
        assert_eq!(view.metrics.total_value, unfiltered_total);
        assert_eq!(view.metrics.asset_count, 6);
    }

    #[test]
    fn test_currency_selection_converts_rows() {
        let mut dashboard = Dashboard::with_defaults().unwrap();
        dashboard.select_currency("EUR");
        let view = dashboard.view();

        assert_eq!(view.currency.code, "EUR");
        assert_eq!(view.rows[0].price, dec!(67234.56) * dec!(0.92));
        assert_eq!(view.metrics.total_value, dec!(59035.136) * dec!(0.92));
        assert!(view.rows[0].formatted_price.starts_with('€'));
    }

    #[test]
    fn test_unknown_currency_falls_back_to_base() {
        let mut dashboard = Dashboard::with_defaults().unwrap();
        dashboard.select_currency("CHF");
        let view = dashboard.view();

        assert_eq!(view.currency.code, "USD");
        assert_eq!(view.metrics.total_value, dec!(59035.136));
        // The stored selection is untouched; only resolution falls back.
        assert_eq!(dashboard.state().selected_currency, "CHF");
    }

    #[test]
    fn test_falling_asset_row_display() {
        let mut dashboard = Dashboard::with_defaults().unwrap();
        dashboard.set_search_query("ETH");
        let view = dashboard.view();

        let ethereum = &view.rows[0];
        assert_eq!(ethereum.formatted_change_24h, "-1.23%");
        assert_eq!(ethereum.sparkline.stroke(), "#ef4444");
        assert_eq!(ethereum.formatted_holdings, "5.2 ETH");
    }

    #[test]
    fn test_state_survives_interactions() {
        let mut dashboard = Dashboard::with_defaults().unwrap();
        dashboard.set_search_query("sol");
        dashboard.select_currency("GBP");

        assert_eq!(dashboard.state().search_query, "sol");
        assert_eq!(dashboard.state().selected_currency, "GBP");

        let view = dashboard.view();
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.currency.code, "GBP");
    }
}
