//! # Display Formatting
//!
//! en-US money, date and time strings as printed on receipts.
//!
//! Date and time inputs are the raw strings stored by the backend. Anything
//! that does not parse is printed as given, so a malformed date still
//! yields a printable receipt.

use chrono::{NaiveDate, NaiveTime};

use crate::money::Money;
use crate::types::Currency;

/// Formats money with two decimals and thousands separators.
///
/// ## Example
/// ```rust
/// use offertory_core::format::format_currency;
/// use offertory_core::money::Money;
/// use offertory_core::types::Currency;
///
/// assert_eq!(format_currency(Money::from_cents(123450), &Currency::Usd), "$1,234.50");
/// assert_eq!(format_currency(Money::from_cents(2350), &Currency::Zar), "ZAR 23.50");
/// ```
pub fn format_currency(amount: Money, currency: &Currency) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    let body = format!(
        "{}.{:02}",
        group_thousands(amount.dollars().unsigned_abs()),
        amount.cents_part()
    );

    match currency.narrow_symbol() {
        Some(symbol) => format!("{sign}{symbol}{body}"),
        None => format!("{sign}{} {body}", currency.code()),
    }
}

/// Long-form date: `2026-02-15` → `February 15, 2026`.
///
/// Blank input gives an empty string; unparseable input is returned trimmed.
pub fn format_long_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }

    // Accept full ISO timestamps by looking at the date prefix only
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// 12-hour time: `14:30` → `2:30 PM`.
pub fn format_time(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }

    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map(|time| time.format("%-I:%M %p").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
