//! # Money Module
//!
//! Provides the `Money` type and the HUB3 amount field (line 3).
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.005 × 100 = 0.49999999999999994  → rounds to 0 ❌                  │
//! │                                                                         │
//! │  OUR SOLUTION: parse the decimal text straight into integer cents      │
//! │    "0.005" → 0 cents + third decimal 5 → half-up → 1 cent ✅            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use hub3_core::money::Money;
//!
//! let total = Money::from_decimal_str("100.00").unwrap();
//! assert_eq!(total.cents(), 10000);
//! assert_eq!(total.to_hub3_amount().unwrap(), "000000000010000");
//! ```

use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::AMOUNT_WIDTH;

/// Largest cent value that fits the 15-digit amount field.
pub const MAX_HUB3_CENTS: i64 = 999_999_999_999_999;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: a negative total is representable so it can be
///   rejected with a precise error instead of wrapping
/// - **Single field tuple struct**: Zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use hub3_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // 10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses a decimal amount such as `"100.00"` or `"0.005"` into cents.
    ///
    /// Digits past the second decimal place round half-up, looking only at
    /// the third decimal: `"1.234"` → 123, `"1.235"` → 124, `"1.2349"` → 123.
    ///
    /// ## Accepted Input
    /// ```text
    /// [+|-] digits [ . digits ]     at least one digit overall
    /// surrounding whitespace is ignored
    /// ```
    ///
    /// ## Errors
    /// `CoreError::InvalidAmount` when the text is not a decimal number, is
    /// negative (a negative zero is accepted as zero), or exceeds
    /// [`MAX_HUB3_CENTS`].
    ///
    /// ## Example
    /// ```rust
    /// use hub3_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal_str("0.005").unwrap().cents(), 1);
    /// assert!(Money::from_decimal_str("-1.00").is_err());
    /// assert!(Money::from_decimal_str("12,50").is_err());
    /// ```
    pub fn from_decimal_str(value: &str) -> CoreResult<Self> {
        let invalid = |reason: &str| CoreError::InvalidAmount {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = value.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return Err(invalid("not a decimal number"));
        }

        let mut units: i64 = 0;
        for digit in whole.bytes().map(|b| i64::from(b - b'0')) {
            units = units * 10 + digit;
            if units > MAX_HUB3_CENTS {
                return Err(invalid("does not fit in 15 digits"));
            }
        }

        let mut decimals = fraction.bytes().map(|b| i64::from(b - b'0'));
        let tenths = decimals.next().unwrap_or(0);
        let hundredths = decimals.next().unwrap_or(0);
        let round_up = decimals.next().is_some_and(|thousandths| thousandths >= 5);

        let cents = units * 100 + tenths * 10 + hundredths + i64::from(round_up);

        if negative && cents > 0 {
            return Err(invalid("amount must not be negative"));
        }
        if cents > MAX_HUB3_CENTS {
            return Err(invalid("does not fit in 15 digits"));
        }

        Ok(Money(cents))
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Renders the amount as the 15-digit, zero-padded cent string of HUB3
    /// line 3.
    ///
    /// ## Example
    /// ```rust
    /// use hub3_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1).to_hub3_amount().unwrap(), "000000000000001");
    /// assert!(Money::from_cents(-1).to_hub3_amount().is_err());
    /// ```
    pub fn to_hub3_amount(&self) -> CoreResult<String> {
        if self.is_negative() {
            return Err(CoreError::InvalidAmount {
                value: self.to_string(),
                reason: "amount must not be negative".to_string(),
            });
        }
        if self.0 > MAX_HUB3_CENTS {
            return Err(CoreError::InvalidAmount {
                value: self.to_string(),
                reason: "does not fit in 15 digits".to_string(),
            });
        }

        Ok(format!("{:0width$}", self.0, width = AMOUNT_WIDTH))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the plain decimal form (`1099` → `10.99`), used in logs and
/// error messages. No currency symbol: the currency travels separately.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
