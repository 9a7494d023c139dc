use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// A display currency quoted against the base currency.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub code: String,
    /// Display symbol used as a prefix, e.g. "$".
    pub symbol: String,
    /// Multiplicative factor from the base currency. Never mutates asset
    /// data; applied on the way out only.
    pub rate: Decimal,
}

impl Currency {
    pub fn new(code: &str, symbol: &str, rate: Decimal) -> Self {
        Currency {
            code: code.to_string(),
            symbol: symbol.to_string(),
            rate,
        }
    }
}

/// Returns the supported display currencies. The first entry is the base
/// currency and doubles as the fallback for unknown codes.
pub fn default_currencies() -> Vec<Currency> {
    vec![
        Currency::new("USD", "$", dec!(1)),
        Currency::new("EUR", "€", dec!(0.92)),
        Currency::new("GBP", "£", dec!(0.79)),
        Currency::new("JPY", "¥", dec!(149.5)),
    ]
}
