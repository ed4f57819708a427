//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{MoneyError, MoneyResult};

/// Represents a monetary amount with currency.
///
/// Values are immutable: every arithmetic operation returns a new `Money`.
/// Two values are equal when the amounts are numerically equal and the
/// currency codes match exactly, so `12.0 USD == 12 USD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount.
    pub amount: Decimal,
    /// Currency code (e.g., "USD", "KRW").
    pub currency: Currency,
}

/// Opaque, case-sensitive currency identifier.
///
/// No list of valid codes is enforced: `"Kalganid"` is as good as `"USD"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    /// Creates a currency from any string-like code.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the currency code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl From<&Currency> for Currency {
    fn from(currency: &Currency) -> Self {
        currency.clone()
    }
}

impl AsRef<str> for Currency {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub fn new(amount: Decimal, currency: impl Into<Currency>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: impl Into<Currency>) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Multiplies the amount by `factor`, keeping the currency.
    ///
    /// The only failure is [`MoneyError::Overflow`] when the product does not
    /// fit in a decimal.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use moneta_shared::types::Money;
    ///
    /// let ten_euros = Money::new(dec!(10), "EUR");
    /// assert_eq!(ten_euros.times(dec!(2)), Ok(Money::new(dec!(20), "EUR")));
    /// ```
    pub fn times(&self, factor: Decimal) -> MoneyResult<Self> {
        self.amount
            .checked_mul(factor)
            .map(|amount| Self::new(amount, &self.currency))
            .ok_or(MoneyError::Overflow {
                operation: "times",
                currency: self.currency.clone(),
            })
    }

    /// Divides the amount by `divisor`, keeping the currency.
    ///
    /// Decimals have no infinity, so a zero divisor is reported as
    /// [`MoneyError::DivisionByZero`] instead of producing a non-finite amount.
    pub fn divide(&self, divisor: Decimal) -> MoneyResult<Self> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero {
                amount: self.amount,
                currency: self.currency.clone(),
            });
        }

        self.amount
            .checked_div(divisor)
            .map(|amount| Self::new(amount, &self.currency))
            .ok_or(MoneyError::Overflow {
                operation: "divide",
                currency: self.currency.clone(),
            })
    }

    /// Adds `other` to this amount.
    ///
    /// Both values must share a currency. The mismatch error is directional:
    /// `eur.add(&usd)` reports "Cannot add USD to EUR".
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Self) -> MoneyResult<Self> {
        if other.currency != self.currency {
            return Err(MoneyError::CurrencyMismatch {
                added: other.currency.clone(),
                receiver: self.currency.clone(),
            });
        }

        self.amount
            .checked_add(other.amount)
            .map(|amount| Self::new(amount, &self.currency))
            .ok_or(MoneyError::Overflow {
                operation: "add",
                currency: self.currency.clone(),
            })
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
