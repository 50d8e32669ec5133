use crate::error::ConveyorError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MONTHS_PER_YEAR: u32 = 12;

/// Largest accepted amount. Keeps every product the engines form representable.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000000000);

/// Represents a strictly positive monetary amount (requested principal, salary).
///
/// This is a wrapper around `rust_decimal::Decimal` so that zero, negative and
/// oversized amounts are rejected once, at the boundary, instead of inside every
/// calculation. Deserialization goes through the textual form so that no value
/// ever passes through a binary float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, ConveyorError> {
        if value <= Decimal::ZERO {
            Err(ConveyorError::ValidationError(format!(
                "Amount must be positive, got {value}"
            )))
        } else if value > MAX_AMOUNT {
            Err(ConveyorError::ValidationError(format!(
                "Amount must not exceed {MAX_AMOUNT}, got {value}"
            )))
        } else {
            Ok(Self(value))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<String> for Amount {
    type Error = ConveyorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let decimal = Decimal::from_str_exact(value.trim()).map_err(|e| {
            ConveyorError::ValidationError(format!("invalid amount '{value}': {e}"))
        })?;
        Self::new(decimal)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Loan term expressed in whole years. Always at least one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Term(u16);

impl Term {
    pub fn new(years: u16) -> Result<Self, ConveyorError> {
        if years > 0 {
            Ok(Self(years))
        } else {
            Err(ConveyorError::ValidationError(
                "Term must be at least one year".to_string(),
            ))
        }
    }

    pub fn years(&self) -> u16 {
        self.0
    }

    /// Number of monthly installments covering the term.
    pub fn months(&self) -> u32 {
        u32::from(self.0) * MONTHS_PER_YEAR
    }
}

impl TryFrom<u16> for Term {
    type Error = ConveyorError;

    fn try_from(years: u16) -> Result<Self, Self::Error> {
        Self::new(years)
    }
}

impl From<Term> for u16 {
    fn from(term: Term) -> Self {
        term.0
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}y", self.0)
    }
}
