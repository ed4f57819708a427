//! Portfolio collection type.

use moneta_shared::Money;
use serde::{Deserialize, Serialize};

/// Ordered collection of monetary amounts, possibly in many currencies.
///
/// Holdings are never merged: two entries in the same currency stay two
/// entries and are converted independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub(super) moneys: Vec<Money>,
}

impl Portfolio {
    /// Creates an empty portfolio.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one or more amounts, preserving call order.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use moneta_core::portfolio::Portfolio;
    /// use moneta_shared::Money;
    ///
    /// let mut portfolio = Portfolio::new();
    /// portfolio.add([Money::new(dec!(5), "USD"), Money::new(dec!(10), "EUR")]);
    /// portfolio.add([Money::new(dec!(1), "USD")]);
    /// assert_eq!(portfolio.len(), 3);
    /// ```
    pub fn add(&mut self, moneys: impl IntoIterator<Item = Money>) {
        self.moneys.extend(moneys);
    }

    /// Number of holdings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moneys.len()
    }

    /// Returns true if the portfolio holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moneys.is_empty()
    }

    /// Iterates over holdings in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Money> {
        self.moneys.iter()
    }
}

impl Extend<Money> for Portfolio {
    fn extend<I: IntoIterator<Item = Money>>(&mut self, iter: I) {
        self.add(iter);
    }
}

impl FromIterator<Money> for Portfolio {
    fn from_iter<I: IntoIterator<Item = Money>>(iter: I) -> Self {
        Self {
            moneys: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Portfolio {
    type Item = &'a Money;
    type IntoIter = std::slice::Iter<'a, Money>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
