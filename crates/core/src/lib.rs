//! Core money logic for Moneta.
//!
//! This crate contains pure logic with ZERO I/O dependencies.
//!
//! # Modules
//!
//! - `currency` - Exchange rates, the `Bank` rate table and the
//!   `CurrencyConverter` capability
//! - `portfolio` - Multi-currency portfolios and their evaluation

pub mod currency;
pub mod portfolio;

pub use currency::{Bank, ConversionError, CurrencyConverter, ExchangeRate, MissingExchangeRate};
pub use portfolio::{MissingExchangeRates, Portfolio, PortfolioError};
