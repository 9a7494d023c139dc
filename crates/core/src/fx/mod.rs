//! FX module - display currencies, conversion, and formatting.

mod currency_formatter;
mod fx_model;
mod fx_service;

pub use currency_formatter::{format_amount, format_quantity};
pub use fx_model::{default_currencies, Currency};
pub use fx_service::{convert, CurrencyRegistry};
