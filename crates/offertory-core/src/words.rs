//! # Amount In Words
//!
//! Converts a monetary amount into the English wording printed on receipts,
//! e.g. `23.50` → `"Twenty-Three Dollars and Fifty Cents Only"`.
//!
//! ## Composition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  amount == 0          → "Zero Only"                                     │
//! │                                                                         │
//! │  otherwise            <dollars words> Dollar(s)                         │
//! │                       [and <cents words> Cent(s)]   only if cents > 0   │
//! │                       " Only"                                           │
//! │                                                                         │
//! │  0-999 per group:     ones │ teens │ tens[-ones] │ <one> Hundred [rest] │
//! │  groups of 1000:      short scale, zero groups skipped                  │
//! │                       1,000,005 → "One Million Five"                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The unit words are always "Dollar"/"Cent", whatever the record currency.

use rust_decimal::Decimal;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Short-scale group names. i64 cents cap the dollars below 10^17.
const SCALES: [&str; 6] = ["", "Thousand", "Million", "Billion", "Trillion", "Quadrillion"];

/// Literal used for an amount of exactly zero.
pub const ZERO_AMOUNT_WORDS: &str = "Zero Only";

// =============================================================================
// Public API
// =============================================================================

/// Converts a decimal amount to words.
///
/// Cents are rounded half away from zero; a rounded-up `x.995` carries into
/// the dollars (see [`Money::from_decimal`]).
///
/// ## Errors
/// [`CoreError::InvalidArgument`] when the amount is negative.
///
/// ## Example
/// ```rust
/// use offertory_core::words::amount_to_words;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let words = amount_to_words(Decimal::from_str("23.50").unwrap()).unwrap();
/// assert_eq!(words, "Twenty-Three Dollars and Fifty Cents Only");
/// ```
pub fn amount_to_words(amount: Decimal) -> CoreResult<String> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(CoreError::invalid("amount", "must not be negative"));
    }
    money_to_words(Money::from_decimal(amount)?)
}

/// Converts an already-rounded [`Money`] value to words.
///
/// ## Example
/// ```rust
/// use offertory_core::money::Money;
/// use offertory_core::words::money_to_words;
///
/// assert_eq!(money_to_words(Money::from_cents(101)).unwrap(), "One Dollar and One Cent Only");
/// assert_eq!(money_to_words(Money::zero()).unwrap(), "Zero Only");
/// ```
pub fn money_to_words(amount: Money) -> CoreResult<String> {
    if amount.is_negative() {
        return Err(CoreError::invalid("amount", "must not be negative"));
    }
    if amount.is_zero() {
        return Ok(ZERO_AMOUNT_WORDS.to_string());
    }

    let dollars = amount.dollars().unsigned_abs();
    let cents = amount.cents_part().unsigned_abs();

    let mut words = format!("{} {}", integer_words(dollars), unit(dollars, "Dollar"));
    if cents > 0 {
        words.push_str(&format!(" and {} {}", integer_words(cents), unit(cents, "Cent")));
    }
    words.push_str(" Only");
    Ok(words)
}

// =============================================================================
// Helpers
// =============================================================================

fn unit(count: u64, singular: &str) -> String {
    if count == 1 {
        singular.to_string()
    } else {
        format!("{singular}s")
    }
}

/// Whole number in words, grouped by thousands.
fn integer_words(n: u64) -> String {
    if n == 0 {
        return "Zero".to_string();
    }

    let mut groups = Vec::new();
    let mut rest = n;
    let mut scale = 0;
    while rest > 0 {
        let group = rest % 1000;
        if group > 0 {
            let words = below_thousand(group);
            groups.push(match SCALES[scale] {
                "" => words,
                name => format!("{words} {name}"),
            });
        }
        rest /= 1000;
        scale += 1;
    }

    groups.reverse();
    groups.join(" ")
}

/// 1..=999 in words. Zero maps to the empty string.
fn below_thousand(n: u64) -> String {
    match n {
        0..=9 => ONES[n as usize].to_string(),
        10..=19 => TEENS[(n - 10) as usize].to_string(),
        20..=99 => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                ones => format!("{tens}-{}", ONES[ones as usize]),
            }
        }
        _ => {
            let hundreds = format!("{} Hundred", ONES[(n / 100) as usize]);
            match n % 100 {
                0 => hundreds,
                rest => format!("{hundreds} {}", below_thousand(rest)),
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
