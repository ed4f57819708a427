//! Exchange rate types and logic.

use moneta_shared::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Directed exchange rate between two currencies.
///
/// `1 from_currency = rate to_currency`. The reverse direction is a separate
/// rate and is never derived from this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Source currency code.
    pub from_currency: Currency,
    /// Target currency code.
    pub to_currency: Currency,
    /// Exchange rate (1 from_currency = rate to_currency).
    pub rate: Decimal,
}

impl ExchangeRate {
    /// Creates a new exchange rate.
    #[must_use]
    pub fn new(
        from_currency: impl Into<Currency>,
        to_currency: impl Into<Currency>,
        rate: Decimal,
    ) -> Self {
        Self {
            from_currency: from_currency.into(),
            to_currency: to_currency.into(),
            rate,
        }
    }
}
