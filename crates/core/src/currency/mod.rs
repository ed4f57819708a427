//! Multi-currency handling and exchange rates.

pub mod bank;
pub mod converter;
pub mod error;
pub mod exchange;


pub use bank::Bank;
pub use converter::CurrencyConverter;
pub use error::{ConversionError, MissingExchangeRate};
pub use exchange::ExchangeRate;
