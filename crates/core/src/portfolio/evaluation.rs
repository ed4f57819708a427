//! Portfolio evaluation against a currency converter.

use moneta_shared::{Currency, Money};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::error::{MissingExchangeRates, PortfolioError};
use super::types::Portfolio;
use crate::currency::{ConversionError, CurrencyConverter};

impl Portfolio {
    /// Evaluates the total value of the portfolio in `to`.
    ///
    /// Every holding is converted through `bank`, including the ones after a
    /// failure. The result is either the full total in `to`, or one error
    /// listing each failed pair in holding order. An empty portfolio
    /// evaluates to zero.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use moneta_core::currency::Bank;
    /// use moneta_core::portfolio::Portfolio;
    /// use moneta_shared::{Currency, Money};
    ///
    /// let mut bank = Bank::new();
    /// bank.add_exchange_rate("EUR", "USD", dec!(1.2));
    ///
    /// let mut portfolio = Portfolio::new();
    /// portfolio.add([Money::new(dec!(5), "USD"), Money::new(dec!(10), "EUR")]);
    ///
    /// let total = portfolio.evaluate(&bank, &Currency::new("USD")).unwrap();
    /// assert_eq!(total, Money::new(dec!(17), "USD"));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::MissingExchangeRates` if at least one holding
    /// could not be converted; this takes precedence over overflow. Returns
    /// `PortfolioError::Overflow` if a converted holding or the total does not
    /// fit in a decimal. No partial total is returned in either case.
    pub fn evaluate<C>(&self, bank: &C, to: &Currency) -> Result<Money, PortfolioError>
    where
        C: CurrencyConverter + ?Sized,
    {
        // None once any conversion or addition has overflowed
        let mut total = Some(Decimal::ZERO);
        let mut missing = Vec::new();

        for conversion in self.moneys.iter().map(|money| bank.convert(money, to)) {
            match conversion {
                Ok(converted) => total = total.and_then(|sum| sum.checked_add(converted.amount)),
                Err(ConversionError::MissingRate(err)) => missing.push(err),
                Err(ConversionError::Overflow { .. }) => total = None,
            }
        }

        if !missing.is_empty() {
            warn!(
                target_currency = %to,
                holdings = self.moneys.len(),
                missing = missing.len(),
                "Portfolio evaluation failed on missing exchange rates"
            );
            return Err(MissingExchangeRates::new(missing).into());
        }

        let Some(total) = total else {
            warn!(
                target_currency = %to,
                holdings = self.moneys.len(),
                "Portfolio evaluation overflowed"
            );
            return Err(PortfolioError::Overflow {
                currency: to.clone(),
            });
        };

        let total = Money::new(total, to);
        debug!(holdings = self.moneys.len(), %total, "Portfolio evaluated");
        Ok(total)
    }
}
