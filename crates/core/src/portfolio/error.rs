//! Portfolio evaluation error types.

use std::fmt;

use moneta_shared::Currency;
use thiserror::Error;

use crate::currency::MissingExchangeRate;

/// Errors raised by portfolio evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortfolioError {
    /// One or more holdings had no rate into the target currency.
    #[error(transparent)]
    MissingExchangeRates(#[from] MissingExchangeRates),

    /// A converted holding or the running total does not fit in a decimal.
    #[error("Amount overflow evaluating portfolio in {currency}")]
    Overflow {
        /// Target currency of the evaluation.
        currency: Currency,
    },
}

impl PortfolioError {
    /// Returns the missing rates, if that is why evaluation failed.
    #[must_use]
    pub fn missing_exchange_rates(&self) -> Option<&MissingExchangeRates> {
        match self {
            Self::MissingExchangeRates(missing) => Some(missing),
            Self::Overflow { .. } => None,
        }
    }

    /// Returns the error code for reporting.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingExchangeRates(_) => "MISSING_EXCHANGE_RATES",
            Self::Overflow { .. } => "AMOUNT_OVERFLOW",
        }
    }
}

/// Every missing rate hit during one portfolio evaluation.
///
/// Failures keep the order of the holdings that caused them and are not
/// deduplicated: two holdings in the same currency produce two entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Missing exchange rate(s): [{}]", JoinedPairs(.missing))]
pub struct MissingExchangeRates {
    missing: Vec<MissingExchangeRate>,
}

impl MissingExchangeRates {
    /// Wraps the collected failures.
    #[must_use]
    pub fn new(missing: Vec<MissingExchangeRate>) -> Self {
        Self { missing }
    }

    /// Returns the `"{from}->{to}"` descriptors in holding order.
    #[must_use]
    pub fn pairs(&self) -> Vec<String> {
        self.missing.iter().map(MissingExchangeRate::pair).collect()
    }

    /// Iterates over the individual failures.
    pub fn iter(&self) -> impl Iterator<Item = &MissingExchangeRate> {
        self.missing.iter()
    }

    /// Number of failed conversions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.missing.len()
    }

    /// Returns true if nothing failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty()
    }

    /// Consumes the error, returning the individual failures.
    #[must_use]
    pub fn into_inner(self) -> Vec<MissingExchangeRate> {
        self.missing
    }
}

impl<'a> IntoIterator for &'a MissingExchangeRates {
    type Item = &'a MissingExchangeRate;
    type IntoIter = std::slice::Iter<'a, MissingExchangeRate>;

    fn into_iter(self) -> Self::IntoIter {
        self.missing.iter()
    }
}

struct JoinedPairs<'a>(&'a [MissingExchangeRate]);

impl fmt::Display for JoinedPairs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, missing) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{missing}")?;
        }
        Ok(())
    }
}
