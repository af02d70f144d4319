//! Converts decimal amounts of money into whole cents and validates user supplied amounts.
//!
//! Amounts are stored as an integer number of cents so that sums and comparisons are exact.

use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, Sub},
};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Error;

/// An amount of money in cents (hundredths of the currency unit).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cents(i64);

impl Cents {
    /// Zero cents.
    pub const ZERO: Cents = Cents(0);

    /// Create an amount from a whole number of cents.
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// The amount as a whole number of cents.
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl Add for Cents {
    type Output = Cents;

    fn add(self, rhs: Self) -> Self::Output {
        Cents(self.0 + rhs.0)
    }
}

impl Sub for Cents {
    type Output = Cents;

    fn sub(self, rhs: Self) -> Self::Output {
        Cents(self.0 - rhs.0)
    }
}

impl Sum for Cents {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Cents::ZERO, Add::add)
    }
}

impl Display for Cents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();

        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

/// Convert a decimal amount into cents, rounding to the nearest cent.
///
/// Rounding absorbs floating point representation error, e.g. `0.1 + 0.2` is
/// `0.30000000000000004` which converts to 30 cents.
pub fn to_cents(amount: f64) -> Cents {
    Cents((amount * 100.0).round() as i64)
}

/// The smallest number of cents that no longer fits in a [Cents].
const CENTS_LIMIT: f64 = i64::MAX as f64;

/// Check whether `amount` is a finite, strictly positive amount with at most
/// two decimal places whose cents fit in a [Cents].
pub fn is_valid_money(amount: f64) -> bool {
    amount.is_finite()
        && amount > 0.0
        && (amount * 100.0).round() < CENTS_LIMIT
        && (amount * 100.0).round() / 100.0 == amount
}

/// Read an amount of money from a JSON value.
///
/// Only JSON numbers are accepted, e.g. the string `"10"` is not money. The
/// number itself is not checked with [is_valid_money], that is left to the
/// ledger so that the error message can name what the amount was for.
///
/// # Errors
///
/// Returns [Error::ValidationFailed] if `value` is not a number.
pub fn parse_amount(value: &Value, field: &str) -> Result<f64, Error> {
    value
        .as_f64()
        .ok_or_else(|| Error::ValidationFailed(format!("The {field} must be a number, got {value}")))
}
