//! Property-based tests for money arithmetic.
//!
//! - Scaling keeps the currency and multiplies or divides the amount
//! - Same-currency addition is commutative and sums the amounts
//! - Cross-currency addition fails in both directions, naming each side

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::money::{Currency, Money};
use crate::error::MoneyError;

/// Strategy to generate decimal amounts (-1,000,000.00 to 1,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate scaling factors, positive and negative (-10000.0000 to 10000.0000).
fn factor() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate nonzero divisors.
fn nonzero_divisor() -> impl Strategy<Value = Decimal> {
    factor().prop_filter("divisor must be nonzero", |d| !d.is_zero())
}

/// Strategy to generate currency codes, including non-ISO ones.
fn currency_code() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::new("USD")),
        Just(Currency::new("EUR")),
        Just(Currency::new("KRW")),
        Just(Currency::new("Kalganid")),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// `times(k)` multiplies the amount and keeps the currency.
    #[test]
    fn prop_times_scales_amount(
        amount in amount(),
        k in factor(),
        currency in currency_code(),
    ) {
        let money = Money::new(amount, &currency);
        let scaled = money.times(k).unwrap();
        prop_assert_eq!(scaled.amount, amount * k);
        prop_assert_eq!(scaled.currency, currency);
    }

    /// `divide(d)` divides the amount and keeps the currency.
    #[test]
    fn prop_divide_scales_amount(
        amount in amount(),
        d in nonzero_divisor(),
        currency in currency_code(),
    ) {
        let money = Money::new(amount, &currency);
        let divided = money.divide(d).unwrap();
        prop_assert_eq!(divided.amount, amount / d);
        prop_assert_eq!(divided.currency, currency);
    }

    /// Same-currency addition is commutative and yields the sum.
    #[test]
    fn prop_add_same_currency_commutes(
        a in amount(),
        b in amount(),
        currency in currency_code(),
    ) {
        let left = Money::new(a, &currency);
        let right = Money::new(b, &currency);

        let sum = left.add(&right).unwrap();
        prop_assert_eq!(&sum, &right.add(&left).unwrap());
        prop_assert_eq!(sum, Money::new(a + b, &currency));
    }

    /// Cross-currency addition fails both ways with mirrored messages.
    #[test]
    fn prop_add_different_currencies_fails_both_ways(
        a in amount(),
        b in amount(),
        first in currency_code(),
        second in currency_code(),
    ) {
        prop_assume!(first != second);

        let left = Money::new(a, &first);
        let right = Money::new(b, &second);

        let forward = left.add(&right).unwrap_err();
        let backward = right.add(&left).unwrap_err();

        prop_assert_eq!(
            &forward,
            &MoneyError::CurrencyMismatch {
                added: second.clone(),
                receiver: first.clone(),
            }
        );
        prop_assert_eq!(forward.to_string(), format!("Cannot add {second} to {first}"));
        prop_assert_eq!(backward.to_string(), format!("Cannot add {first} to {second}"));
        prop_assert_ne!(forward.to_string(), backward.to_string());
    }
}
