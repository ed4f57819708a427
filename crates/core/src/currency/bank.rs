//! In-memory table of directed exchange rates.
//!
//! The bank stores one rate per ordered `(from, to)` pair and converts in a
//! single hop. Nothing is inferred: no inverse rates, no identity entries, no
//! routing through a third currency. Same-currency conversion is answered
//! without touching the table.

use std::collections::HashMap;

use moneta_shared::{Currency, Money};
use rust_decimal::Decimal;
use tracing::debug;

use super::converter::CurrencyConverter;
use super::error::{ConversionError, MissingExchangeRate};
use super::exchange::ExchangeRate;

/// Repository of directed exchange rates.
///
/// Rates are indexed by source then target currency so lookups borrow the
/// codes instead of building an owned key.
#[derive(Debug, Clone, Default)]
pub struct Bank {
    rates: HashMap<Currency, HashMap<Currency, Decimal>>,
}

impl Bank {
    /// Creates an empty bank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bank seeded with `rates`, later entries overriding earlier ones.
    #[must_use]
    pub fn with_rates(rates: impl IntoIterator<Item = ExchangeRate>) -> Self {
        rates.into_iter().collect()
    }

    /// Registers the rate for `from -> to`, replacing any previous one.
    ///
    /// The reverse pair is left untouched. The rate is not validated.
    pub fn add_exchange_rate(
        &mut self,
        from: impl Into<Currency>,
        to: impl Into<Currency>,
        rate: Decimal,
    ) {
        let (from, to) = (from.into(), to.into());
        debug!(%from, %to, %rate, "Registering exchange rate");
        self.rates.entry(from).or_default().insert(to, rate);
    }

    /// Returns the stored rate for `from -> to`, if any.
    ///
    /// Identity pairs are not stored and return `None` unless registered
    /// explicitly.
    #[must_use]
    pub fn rate(&self, from: &Currency, to: &Currency) -> Option<Decimal> {
        self.rates.get(from)?.get(to).copied()
    }

    /// Number of registered pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.values().map(HashMap::len).sum()
    }

    /// Returns true if no rate is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Converts `money` into `to`.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use moneta_core::currency::Bank;
    /// use moneta_shared::{Currency, Money};
    ///
    /// let mut bank = Bank::new();
    /// bank.add_exchange_rate("EUR", "USD", dec!(1.2));
    ///
    /// let usd = bank.convert(&Money::new(dec!(10), "EUR"), &Currency::new("USD"));
    /// assert_eq!(usd, Ok(Money::new(dec!(12), "USD")));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::MissingRate` when the currencies differ and
    /// no rate is registered for the pair, and `ConversionError::Overflow`
    /// when `amount * rate` does not fit in a decimal.
    pub fn convert(&self, money: &Money, to: &Currency) -> Result<Money, ConversionError> {
        if &money.currency == to {
            return Ok(money.clone());
        }

        let Some(rate) = self.rate(&money.currency, to) else {
            debug!(from = %money.currency, %to, "No exchange rate registered");
            return Err(MissingExchangeRate::new(&money.currency, to).into());
        };

        let amount = money
            .amount
            .checked_mul(rate)
            .ok_or_else(|| ConversionError::Overflow {
                amount: money.amount,
                from: money.currency.clone(),
                to: to.clone(),
            })?;

        let converted = Money::new(amount, to);
        debug!(%money, %rate, %converted, "Converted money");
        Ok(converted)
    }
}

impl CurrencyConverter for Bank {
    fn convert(&self, money: &Money, to: &Currency) -> Result<Money, ConversionError> {
        Bank::convert(self, money, to)
    }
}

impl Extend<ExchangeRate> for Bank {
    fn extend<I: IntoIterator<Item = ExchangeRate>>(&mut self, iter: I) {
        for rate in iter {
            self.add_exchange_rate(rate.from_currency, rate.to_currency, rate.rate);
        }
    }
}

impl FromIterator<ExchangeRate> for Bank {
    fn from_iter<I: IntoIterator<Item = ExchangeRate>>(iter: I) -> Self {
        let mut bank = Self::new();
        bank.extend(iter);
        bank
    }
}
