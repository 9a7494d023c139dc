use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::assets::Asset;
use crate::fx::Currency;

use super::valuation_model::PortfolioMetrics;

/// Synthetic all-time-high factor applied to the current total value.
const ALL_TIME_HIGH_FACTOR: Decimal = dec!(1.15);

/// Calculates aggregate portfolio metrics for the given display currency.
///
/// Pure function over the full asset slice; the search filter only narrows
/// the displayed rows and never feeds into these numbers. The currency
/// rate scales price-derived values on the way out and never touches the
/// stored asset data.
pub fn calculate_metrics(assets: &[Asset], currency: &Currency) -> PortfolioMetrics {
    let total_value: Decimal = assets
        .iter()
        .map(|asset| asset.market_value() * currency.rate)
        .sum();

    let change_24h: Decimal = assets
        .iter()
        .map(|asset| asset.market_value() * asset.change_24h / dec!(100))
        .sum::<Decimal>()
        * currency.rate;

    // A valueless portfolio has no percentage to report.
    let change_24h_percent = if total_value.is_zero() {
        None
    } else {
        Some(change_24h / total_value * dec!(100))
    };

    let all_time_high = total_value * ALL_TIME_HIGH_FACTOR;

    let ath_drawdown_percent = if all_time_high.is_zero() {
        None
    } else {
        Some((total_value - all_time_high) / all_time_high * dec!(100))
    };

    let gainers = assets
        .iter()
        .filter(|asset| asset.change_24h > Decimal::ZERO)
        .count();

    PortfolioMetrics {
        currency: currency.code.clone(),
        total_value,
        change_24h,
        change_24h_percent,
        all_time_high,
        ath_drawdown_percent,
        asset_count: assets.len(),
        gainers,
        calculated_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::default_assets;
    use crate::fx::default_currencies;

    fn make_asset(price: Decimal, holdings: Decimal, change: Decimal) -> Asset {
        Asset {
            id: 1,
            name: "Bitcoin".to_string(),
            symbol: "BTC".to_string(),
            price,
            change_24h: change,
            sparkline: vec![dec!(65000), dec!(67234)],
            holdings,
        }
    }

    fn usd() -> Currency {
        Currency::new("USD", "$", dec!(1))
    }

    #[test]
    fn test_single_asset_usd() {
        let assets = vec![make_asset(dec!(67234.56), dec!(0.5), dec!(2.34))];
        let metrics = calculate_metrics(&assets, &usd());

        assert_eq!(metrics.total_value, dec!(33617.28));
        assert_eq!(metrics.change_24h, dec!(786.644352));
        assert_eq!(metrics.change_24h_percent, Some(dec!(2.34)));
        assert_eq!(metrics.all_time_high, dec!(38659.872));
        assert_eq!(metrics.asset_count, 1);
        assert_eq!(metrics.gainers, 1);
    }

    #[test]
    fn test_rate_scales_monetary_values() {
        let assets = vec![make_asset(dec!(67234.56), dec!(0.5), dec!(2.34))];
        let eur = Currency::new("EUR", "€", dec!(0.92));

        let metrics = calculate_metrics(&assets, &eur);
        assert_eq!(metrics.total_value, dec!(30927.8976));
        assert_eq!(metrics.change_24h, dec!(786.644352) * dec!(0.92));
        // Percentages are rate-invariant.
        assert_eq!(metrics.change_24h_percent, Some(dec!(2.34)));
        assert_eq!(metrics.currency, "EUR");
    }

    #[test]
    fn test_empty_portfolio_suppresses_percentages() {
        let metrics = calculate_metrics(&[], &usd());

        assert_eq!(metrics.total_value, Decimal::ZERO);
        assert_eq!(metrics.change_24h, Decimal::ZERO);
        assert_eq!(metrics.change_24h_percent, None);
        assert_eq!(metrics.all_time_high, Decimal::ZERO);
        assert_eq!(metrics.ath_drawdown_percent, None);
        assert_eq!(metrics.asset_count, 0);
        assert_eq!(metrics.gainers, 0);
    }

    #[test]
    fn test_zero_value_holdings_suppress_percentages() {
        // Held quantity of zero gives a real asset list but no value.
        let assets = vec![make_asset(dec!(67234.56), dec!(0), dec!(2.34))];
        let metrics = calculate_metrics(&assets, &usd());

        assert_eq!(metrics.total_value, Decimal::ZERO);
        assert_eq!(metrics.change_24h_percent, None);
        assert_eq!(metrics.ath_drawdown_percent, None);
    }

    #[test]
    fn test_ath_drawdown_is_fixed_by_construction() {
        // total / (total * 1.15) - 1 = -15/115, for any non-zero total.
        let assets = vec![make_asset(dec!(100), dec!(1), dec!(0))];
        let metrics = calculate_metrics(&assets, &usd());

        let drawdown = metrics.ath_drawdown_percent.unwrap();
        assert_eq!(drawdown.round_dp(2), dec!(-13.04));
    }

    #[test]
    fn test_gainers_counts_strictly_positive_changes() {
        let assets = vec![
            make_asset(dec!(1), dec!(1), dec!(2.34)),
            make_asset(dec!(1), dec!(1), dec!(0)),
            make_asset(dec!(1), dec!(1), dec!(-1.23)),
        ];
        let metrics = calculate_metrics(&assets, &usd());
        assert_eq!(metrics.gainers, 1);
    }

    #[test]
    fn test_default_dataset_totals() {
        let assets = default_assets();
        let currencies = default_currencies();
        let metrics = calculate_metrics(&assets, &currencies[0]);

        // BTC 33617.28 + ETH 17975.256 + ADA 567.80 + SOL 2179.80
        // + DOT 1578.00 + XRP 3117.00
        assert_eq!(metrics.total_value, dec!(59035.136));
        assert_eq!(metrics.asset_count, 6);
        assert_eq!(metrics.gainers, 4);
    }
}
