//! Presentation helpers for simulation results.
//!
//! The engine works on a single normalised numeric scale; formatting for a
//! currency happens only here, at the boundary.

use crate::types::Currency;

/// Formats an amount with the currency symbol, thousands separators and the
/// currency's decimal places.
///
/// Negative amounts carry a leading minus sign before the symbol. Amounts that
/// round to zero are rendered without a sign.
///
/// # Examples
///
/// ```
/// use costsim_core::format::format_currency;
/// use costsim_core::types::Currency;
///
/// assert_eq!(format_currency(1234.56, Currency::USD), "$1,234.56");
/// assert_eq!(format_currency(1_000_000.0, Currency::GBP), "£1,000,000.00");
/// assert_eq!(format_currency(-42.5, Currency::EUR), "-€42.50");
/// ```
pub fn format_currency(amount: f64, currency: Currency) -> String {
    let places = usize::from(currency.decimal_places());
    let digits = format!("{:.*}", places, amount.abs());

    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let rounds_to_zero = digits.chars().all(|c| c == '0' || c == '.');
    let sign = if amount.is_sign_negative() && !rounds_to_zero && !amount.is_nan() {
        "-"
    } else {
        ""
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    out.push_str(sign);
    out.push_str(currency.symbol());
    out.push_str(&group_thousands(integer));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Inserts `,` between every group of three digits, counting from the right.
fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
