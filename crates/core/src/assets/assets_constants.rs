//! Compiled-in asset dataset.

use rust_decimal_macros::dec;

use super::assets_model::Asset;

/// Returns the tracked asset list. Prices are denominated in the base
/// currency; sparkline samples cover the last seven days, oldest first.
pub fn default_assets() -> Vec<Asset> {
    vec![
        Asset {
            id: 1,
            name: "Bitcoin".to_string(),
            symbol: "BTC".to_string(),
            price: dec!(67234.56),
            change_24h: dec!(2.34),
            sparkline: vec![
                dec!(65000),
                dec!(65500),
                dec!(64800),
                dec!(66000),
                dec!(66500),
                dec!(67000),
                dec!(67234),
            ],
            holdings: dec!(0.5),
        },
        Asset {
            id: 2,
            name: "Ethereum".to_string(),
            symbol: "ETH".to_string(),
            price: dec!(3456.78),
            change_24h: dec!(-1.23),
            sparkline: vec![
                dec!(3500),
                dec!(3480),
                dec!(3520),
                dec!(3490),
                dec!(3470),
                dec!(3450),
                dec!(3456),
            ],
            holdings: dec!(5.2),
        },
        Asset {
            id: 3,
            name: "Cardano".to_string(),
            symbol: "ADA".to_string(),
            price: dec!(0.5678),
            change_24h: dec!(5.67),
            sparkline: vec![
                dec!(0.52),
                dec!(0.53),
                dec!(0.54),
                dec!(0.55),
                dec!(0.56),
                dec!(0.565),
                dec!(0.5678),
            ],
            holdings: dec!(1000),
        },
        Asset {
            id: 4,
            name: "Solana".to_string(),
            symbol: "SOL".to_string(),
            price: dec!(145.32),
            change_24h: dec!(3.45),
            sparkline: vec![
                dec!(140),
                dec!(141),
                dec!(142),
                dec!(143),
                dec!(144),
                dec!(145),
                dec!(145.32),
            ],
            holdings: dec!(15),
        },
        Asset {
            id: 5,
            name: "Polkadot".to_string(),
            symbol: "DOT".to_string(),
            price: dec!(7.89),
            change_24h: dec!(-2.34),
            sparkline: vec![
                dec!(8.1),
                dec!(8.0),
                dec!(7.95),
                dec!(7.92),
                dec!(7.9),
                dec!(7.88),
                dec!(7.89),
            ],
            holdings: dec!(200),
        },
        Asset {
            id: 6,
            name: "Ripple".to_string(),
            symbol: "XRP".to_string(),
            price: dec!(0.6234),
            change_24h: dec!(1.89),
            sparkline: vec![
                dec!(0.61),
                dec!(0.612),
                dec!(0.615),
                dec!(0.618),
                dec!(0.62),
                dec!(0.622),
                dec!(0.6234),
            ],
            holdings: dec!(5000),
        },
    ]
}
