use std::collections::HashSet;

use log::warn;
use rust_decimal::Decimal;

use crate::errors::{Error, Result};

use super::fx_model::Currency;

/// Lookup table over the supported display currencies.
///
/// The first entry is the base currency; unknown codes resolve to it
/// rather than failing.
#[derive(Debug, Clone)]
pub struct CurrencyRegistry {
    currencies: Vec<Currency>,
}

impl CurrencyRegistry {
    /// Builds a registry, validating that codes are unique and every rate
    /// is strictly positive.
    pub fn new(currencies: Vec<Currency>) -> Result<Self> {
        if currencies.is_empty() {
            return Err(Error::Validation("currency table is empty".to_string()));
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for currency in &currencies {
            if !seen.insert(currency.code.as_str()) {
                return Err(Error::Validation(format!(
                    "duplicate currency code '{}'",
                    currency.code
                )));
            }
            if currency.rate <= Decimal::ZERO {
                return Err(Error::InvalidExchangeRate(format!(
                    "{} has non-positive rate {}",
                    currency.code, currency.rate
                )));
            }
        }

        Ok(CurrencyRegistry { currencies })
    }

    /// The base currency (first entry).
    pub fn base(&self) -> &Currency {
        &self.currencies[0]
    }

    /// Finds a currency by its code.
    pub fn find(&self, code: &str) -> Option<&Currency> {
        self.currencies.iter().find(|c| c.code == code)
    }

    /// Finds a currency by its code, failing on unknown codes.
    pub fn get(&self, code: &str) -> Result<&Currency> {
        self.find(code)
            .ok_or_else(|| Error::UnsupportedCurrency(code.to_string()))
    }

    /// Resolves a code to a currency, falling back to the base currency
    /// when the code is unknown.
    pub fn resolve(&self, code: &str) -> &Currency {
        match self.find(code) {
            Some(currency) => currency,
            None => {
                warn!(
                    "Unknown currency code '{}'. Using {}.",
                    code,
                    self.base().code
                );
                self.base()
            }
        }
    }

    pub fn currencies(&self) -> &[Currency] {
        &self.currencies
    }
}

/// Converts a base-currency amount into the given display currency.
pub fn convert(amount: Decimal, currency: &Currency) -> Decimal {
    amount * currency.rate
}
