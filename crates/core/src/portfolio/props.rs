//! Property-based tests for portfolio evaluation.
//!
//! - Evaluation only depends on the converter it is given
//! - Same-currency portfolios sum their amounts
//! - Failures are reported once per failing holding, in order

use moneta_shared::{Currency, Money};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::types::Portfolio;
use crate::currency::{Bank, ConversionError, CurrencyConverter};

/// Converter that ignores its inputs and always answers the same amount.
struct FixedConverter(Money);

impl CurrencyConverter for FixedConverter {
    fn convert(&self, _money: &Money, _to: &Currency) -> Result<Money, ConversionError> {
        Ok(self.0.clone())
    }
}

/// Strategy to generate decimal amounts (-1,000,000.00 to 1,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate currency codes with no registered rate.
fn unknown_currency() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::new("USD")),
        Just(Currency::new("EUR")),
        Just(Currency::new("KRW")),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A stub converter returning a fixed amount makes the total
    /// `count * fixed`, whatever the holdings are.
    #[test]
    fn prop_evaluate_uses_only_the_converter(
        amounts in prop::collection::vec(amount(), 0..20),
        fixed in amount(),
    ) {
        let portfolio: Portfolio = amounts
            .iter()
            .map(|a| Money::new(*a, "Irrelevant"))
            .collect();
        let converter = FixedConverter(Money::new(fixed, "Kalganid"));

        let total = portfolio.evaluate(&converter, &"Kalganid".into()).unwrap();
        prop_assert_eq!(
            total,
            Money::new(fixed * Decimal::from(amounts.len()), "Kalganid")
        );
    }

    /// Holdings already in the target currency need no rates and sum up.
    #[test]
    fn prop_same_currency_sums(amounts in prop::collection::vec(amount(), 0..20)) {
        let portfolio: Portfolio = amounts.iter().map(|a| Money::new(*a, "USD")).collect();

        let total = portfolio.evaluate(&Bank::new(), &"USD".into()).unwrap();
        prop_assert_eq!(total, Money::new(amounts.iter().copied().sum(), "USD"));
    }

    /// With an empty bank every foreign holding fails, in holding order.
    #[test]
    fn prop_every_failure_is_reported(
        currencies in prop::collection::vec(unknown_currency(), 1..10),
    ) {
        let portfolio: Portfolio = currencies
            .iter()
            .map(|c| Money::new(Decimal::ONE, c))
            .collect();

        let err = portfolio.evaluate(&Bank::new(), &"Kalganid".into()).unwrap_err();
        let expected: Vec<String> = currencies.iter().map(|c| format!("{c}->Kalganid")).collect();
        prop_assert_eq!(err.missing_exchange_rates().unwrap().pairs(), expected);
    }
}
