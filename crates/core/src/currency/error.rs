//! Currency conversion error types.

use moneta_shared::Currency;
use rust_decimal::Decimal;
use thiserror::Error;

/// No rate is registered for a currency pair.
///
/// Displays as the bare pair descriptor, e.g. `EUR->Kalganid`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{from}->{to}")]
pub struct MissingExchangeRate {
    /// Source currency code.
    pub from: Currency,
    /// Target currency code.
    pub to: Currency,
}

impl MissingExchangeRate {
    /// Creates the error for the given pair.
    #[must_use]
    pub fn new(from: impl Into<Currency>, to: impl Into<Currency>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Returns the `"{from}->{to}"` descriptor.
    #[must_use]
    pub fn pair(&self) -> String {
        self.to_string()
    }
}

/// Errors raised when converting a single amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// No rate for the pair.
    #[error(transparent)]
    MissingRate(#[from] MissingExchangeRate),

    /// `amount * rate` does not fit in a decimal.
    #[error("Amount overflow converting {amount} {from} to {to}")]
    Overflow {
        /// Source amount.
        amount: Decimal,
        /// Source currency code.
        from: Currency,
        /// Target currency code.
        to: Currency,
    },
}

impl ConversionError {
    /// Returns the missing pair, if that is why the conversion failed.
    #[must_use]
    pub fn missing_rate(&self) -> Option<&MissingExchangeRate> {
        match self {
            Self::MissingRate(missing) => Some(missing),
            Self::Overflow { .. } => None,
        }
    }

    /// Returns the error code for reporting.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingRate(_) => "MISSING_EXCHANGE_RATE",
            Self::Overflow { .. } => "AMOUNT_OVERFLOW",
        }
    }
}
