//! Core error types for the Coinfolio dashboard.
//!
//! All inputs are compiled-in constants, so errors only surface when a
//! dashboard is constructed over a malformed dataset. Runtime lookups use
//! soft fallbacks instead of failing.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the dashboard core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Currency '{0}' is not supported")]
    UnsupportedCurrency(String),

    #[error("Invalid exchange rate: {0}")]
    InvalidExchangeRate(String),

    #[error("Input validation failed: {0}")]
    Validation(String),
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
