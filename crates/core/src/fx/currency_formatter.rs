//! Monetary and quantity display formatting.

use rust_decimal::Decimal;

use crate::constants::DISPLAY_DECIMAL_PRECISION;

use super::fx_model::Currency;

/// Formats a monetary amount with the currency symbol, exactly two decimal
/// places, and en-US style thousands separators.
///
/// Negative values render as symbol-sign-magnitude ("$-1,234.50"); the
/// same shape is used everywhere a monetary value is displayed.
pub fn format_amount(value: Decimal, currency: &Currency) -> String {
    let rounded = value.round_dp(DISPLAY_DECIMAL_PRECISION);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let text = format!(
        "{:.prec$}",
        rounded.abs(),
        prec = DISPLAY_DECIMAL_PRECISION as usize
    );
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + 8);
    out.push_str(&currency.symbol);
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Formats a plain quantity with thousands separators and no trailing
/// zeros, e.g. "5,000" or "0.5".
pub fn format_quantity(value: Decimal) -> String {
    let text = value.normalize().to_string();
    let unsigned = text.trim_start_matches('-');
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(text.len() + 8);
    if text.starts_with('-') {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Inserts a comma every three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
