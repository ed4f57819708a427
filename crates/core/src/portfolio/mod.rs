//! Portfolio aggregation and evaluation.

pub mod error;
mod evaluation;
pub mod types;

#[cfg(test)]
mod props;

pub use error::{MissingExchangeRates, PortfolioError};
pub use types::Portfolio;
