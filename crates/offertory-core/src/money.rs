//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Where Amounts Come From
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Backend JSON        "amount": 19.995                                   │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  rust_decimal        Decimal(19.995)     exact, no binary float error   │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  Money::from_decimal round half away from zero to 2 places              │
//! │        │             19.995 → 20.00 (cents overflow carried)            │
//! │        ▼                                                                │
//! │  Money(2000)         dollars() = 20, cents_part() = 0                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rounding happens on the decimal value, so an amount like `19.995` can
//! never produce a "100 cents" part: the overflow lands in the dollars.
//!
//! ## Usage
//! ```rust
//! use offertory_core::money::Money;
//! use rust_decimal::Decimal;
//! use std::str::FromStr;
//!
//! let amount = Money::from_decimal(Decimal::from_str("23.50").unwrap()).unwrap();
//! assert_eq!(amount.dollars(), 23);
//! assert_eq!(amount.cents_part(), 50);
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: negative values are representable so callers get a
///   typed error from words/layout instead of a wrapped-around number
/// - **Single field tuple struct**: zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use offertory_core::money::Money;
    ///
    /// let tithe = Money::from_cents(2350); // $23.50
    /// assert_eq!(tithe.cents(), 2350);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a decimal amount to cents, rounding half away from zero.
    ///
    /// A fractional part that rounds up to a full dollar is carried into
    /// the whole part.
    ///
    /// ## Errors
    /// [`CoreError::InvalidArgument`] if the amount does not fit in i64 cents.
    ///
    /// ## Example
    /// ```rust
    /// use offertory_core::money::Money;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let carried = Money::from_decimal(Decimal::from_str("19.995").unwrap()).unwrap();
    /// assert_eq!(carried.dollars(), 20);
    /// assert_eq!(carried.cents_part(), 0);
    /// ```
    pub fn from_decimal(amount: Decimal) -> CoreResult<Self> {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.to_i64())
            .map(Money)
            .ok_or_else(|| CoreError::invalid("amount", format!("{amount} is too large")))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    ///
    /// ## Example
    /// ```rust
    /// use offertory_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).dollars(), 10);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-style display in dollars.
///
/// ## Note
/// Receipts go through [`crate::format::format_currency`], which knows the
/// record's currency and adds thousands separators.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
