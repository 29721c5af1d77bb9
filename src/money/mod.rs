//! Exact-cent monetary arithmetic for the two-party ledger.

use std::fmt;
use std::ops::{Add, AddAssign};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::LedgerError;

/// Non-negative monetary value held as whole cents.
///
/// Serializes as a decimal number of currency units so stored data stays
/// compatible with the flat record layout (`"amount": 12.34`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub fn from_cents(cents: i64) -> Result<Self, LedgerError> {
        if cents < 0 {
            return Err(LedgerError::Validation(format!(
                "amount must be non-negative, got {} cents",
                cents
            )));
        }
        Ok(Amount(cents))
    }

    /// Builds an amount from currency units, rounding to the nearest cent.
    pub fn from_major(value: f64) -> Result<Self, LedgerError> {
        if !value.is_finite() {
            return Err(LedgerError::Validation(
                "amount must be a finite number".into(),
            ));
        }
        let cents = (value * 100.0).round();
        if cents < 0.0 {
            return Err(LedgerError::Validation(format!(
                "amount must be non-negative, got {}",
                value
            )));
        }
        Ok(Amount(cents as i64))
    }

    pub fn cents(self) -> i64 {
        self.0
    }

    pub fn to_major(self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Splits the amount into `parts` installments. Returns `(base, last)`:
    /// every installment carries `base` (the floored even share) except the
    /// final one, which absorbs the remainder so the parts sum back to the
    /// original amount exactly.
    pub fn split(self, parts: u32) -> (Amount, Amount) {
        debug_assert!(parts >= 1, "split requires at least one part");
        let parts = parts as i64;
        let base = self.0 / parts;
        let last = self.0 - base * (parts - 1);
        (Amount(base), Amount(last))
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.to_major())
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_major())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        if !value.is_finite() || value < 0.0 {
            return Err(de::Error::custom(format!(
                "amount must be a non-negative number, got {}",
                value
            )));
        }
        Ok(Amount((value * 100.0).round() as i64))
    }
}

/// Signed net position between the two users.
///
/// Held in half-cents so an `EQUAL` split of an odd cent count stays exact.
/// Positive means user B owes user A; negative the reverse. A magnitude
/// under one cent counts as even.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NetBalance(i64);

impl NetBalance {
    pub const ZERO: NetBalance = NetBalance(0);

    pub fn credit_half(&mut self, amount: Amount) {
        self.0 += amount.cents();
    }

    pub fn credit_full(&mut self, amount: Amount) {
        self.0 += 2 * amount.cents();
    }

    pub fn debit_half(&mut self, amount: Amount) {
        self.0 -= amount.cents();
    }

    pub fn debit_full(&mut self, amount: Amount) {
        self.0 -= 2 * amount.cents();
    }

    pub fn is_even(self) -> bool {
        self.0.abs() < 2
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn to_major(self) -> f64 {
        self.0 as f64 / 200.0
    }

    pub fn abs_major(self) -> f64 {
        self.to_major().abs()
    }
}

impl fmt::Display for NetBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+.2}", self.to_major())
    }
}
