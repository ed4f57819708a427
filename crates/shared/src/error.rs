//! Money arithmetic error types.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::Currency;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by `Money` arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Tried to add amounts in different currencies.
    #[error("Cannot add {added} to {receiver}")]
    CurrencyMismatch {
        /// Currency of the value being added.
        added: Currency,
        /// Currency of the value receiving the addition.
        receiver: Currency,
    },

    /// Division by a zero divisor.
    #[error("Cannot divide {amount} {currency} by zero")]
    DivisionByZero {
        /// Dividend amount.
        amount: Decimal,
        /// Dividend currency.
        currency: Currency,
    },

    /// Result does not fit in a decimal.
    #[error("Amount overflow in {operation} ({currency})")]
    Overflow {
        /// Operation that overflowed.
        operation: &'static str,
        /// Currency of the operands.
        currency: Currency,
    },
}

impl MoneyError {
    /// Returns the error code for reporting.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            Self::Overflow { .. } => "AMOUNT_OVERFLOW",
        }
    }
}
