//! Conversion capability shared by banks and test doubles.

use moneta_shared::{Currency, Money};

use super::error::ConversionError;

/// Anything that can convert a `Money` into another currency.
///
/// [`Portfolio::evaluate`](crate::portfolio::Portfolio::evaluate) is written
/// against this trait only, so a stub that ignores rates entirely is as
/// acceptable as a real [`Bank`](super::Bank).
pub trait CurrencyConverter {
    /// Converts `money` into `to`.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::MissingRate` when the pair cannot be
    /// converted, or `ConversionError::Overflow` when the result does not fit.
    fn convert(&self, money: &Money, to: &Currency) -> Result<Money, ConversionError>;
}
