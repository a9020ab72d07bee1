//! Display helpers for prices and dates.

use crate::currency::Currency;
use chrono::NaiveDate;

/// Inserts `,` between groups of three digits: `20000` becomes `"20,000"`.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a whole-unit amount: `"$1,234.00"` for USD, `"1,234.00 DZD"` for DZD.
#[must_use]
pub fn format_price(amount: u64, currency: Currency) -> String {
    match currency {
        Currency::Usd => format!("${}.00", group_thousands(amount)),
        Currency::Dzd => format!("{}.00 DZD", group_thousands(amount)),
    }
}

/// Long English date: `"January 20, 2025"`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
