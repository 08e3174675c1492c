use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use thiserror::Error;

/// Error for monetary amount construction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CurrencyError {
    #[error("Amount must not be negative, got {0}")]
    Negative(String),

    #[error("Amount out of range: {0}")]
    OutOfRange(String),
}

/// Non-negative monetary amount in minor units (cents).
///
/// Amounts are stored and compared as integers. Conversion to major units
/// happens only at the edges: [`Amount::to_display`] for read-only output,
/// [`Amount::to_editable`] for edit forms and [`Amount::from_major`] for the
/// way back in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    const CENTS_PER_UNIT: i64 = 100;

    /// Wrap a cent value.
    ///
    /// # Errors
    /// * `Negative` - `cents` is below zero
    pub fn from_cents(cents: i64) -> Result<Self, CurrencyError> {
        if cents < 0 {
            return Err(CurrencyError::Negative(cents.to_string()));
        }
        Ok(Self(cents))
    }

    /// Convert a major-unit value (dollars) into cents.
    ///
    /// Values with more than two decimals go to the nearest cent, midpoints
    /// away from zero. This is the only place an amount is ever rounded.
    ///
    /// # Errors
    /// * `Negative` - `major` is below zero
    /// * `OutOfRange` - Result does not fit in 64-bit cents
    pub fn from_major(major: Decimal) -> Result<Self, CurrencyError> {
        if major.is_sign_negative() && !major.is_zero() {
            return Err(CurrencyError::Negative(major.to_string()));
        }

        let cents = major
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.to_i64())
            .ok_or_else(|| CurrencyError::OutOfRange(major.to_string()))?;

        Self::from_cents(cents)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Exact major-unit value for edit forms (`1234` → `12.34`).
    pub fn to_editable(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Fixed en-US dollar rendering with grouping (`123456` → `$1,234.56`).
    pub fn to_display(&self) -> String {
        format!(
            "${}.{:02}",
            group_thousands(self.0 / Self::CENTS_PER_UNIT),
            self.0 % Self::CENTS_PER_UNIT
        )
    }

    /// Bare two-decimal rendering used for text matching (`1200` → `12.00`).
    pub fn to_plain_text(&self) -> String {
        format!(
            "{}.{:02}",
            self.0 / Self::CENTS_PER_UNIT,
            self.0 % Self::CENTS_PER_UNIT
        )
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display())
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}
