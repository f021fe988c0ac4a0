use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

use clinicdesk_core::{DomainError, DomainResult, ValueObject};

/// Non-negative billed amount.
///
/// The store is not trusted to hold a clean number: amounts arrive as JSON
/// numbers, numeric strings, nulls, or garbage. Deserialization coerces
/// anything unusable to zero so a malformed invoice never poisons the revenue
/// sum. Plain decimal addition, no currency rounding; display is the raw
/// value prefixed with `$`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    pub const ZERO: Amount = Amount(0.0);

    /// Validating constructor for user-entered amounts.
    pub fn new(value: f64) -> DomainResult<Self> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(DomainError::validation(format!(
                "amount must be a non-negative number, got {value}"
            )))
        }
    }

    /// Lenient conversion from whatever the store holds.
    ///
    /// Numbers and numeric strings pass through; missing, non-numeric,
    /// negative, or non-finite input coerces to zero.
    pub fn coerce(value: &JsonValue) -> Self {
        let parsed = match value {
            JsonValue::Number(n) => n.as_f64(),
            JsonValue::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        match parsed {
            Some(v) if v.is_finite() && v >= 0.0 => Self(v),
            _ => Self::ZERO,
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl ValueObject for Amount {}

impl Default for Amount {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = JsonValue::deserialize(deserializer)?;
        Ok(Amount::coerce(&value))
    }
}

impl core::ops::Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0 + rhs.0)
    }
}

impl core::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, |acc, a| acc + a)
    }
}

impl core::fmt::Display for Amount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}", self.0)
    }
}
