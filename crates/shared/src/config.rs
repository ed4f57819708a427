//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::{Currency, Money};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Exchange rates to register, in order.
    #[serde(default)]
    pub rates: Vec<RateConfig>,
    /// Portfolio to evaluate.
    #[serde(default)]
    pub portfolio: PortfolioConfig,
}

/// One directed exchange rate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RateConfig {
    /// Source currency code.
    pub from: Currency,
    /// Target currency code.
    pub to: Currency,
    /// Multiplier from source to target.
    pub rate: Decimal,
}

/// Portfolio configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PortfolioConfig {
    /// Currency the portfolio is evaluated in.
    #[serde(default = "default_target_currency")]
    pub target_currency: Currency,
    /// Holdings, in insertion order.
    #[serde(default)]
    pub holdings: Vec<HoldingConfig>,
}

/// One holding of the portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HoldingConfig {
    /// Amount held.
    pub amount: Decimal,
    /// Currency of the amount.
    pub currency: Currency,
}

fn default_target_currency() -> Currency {
    Currency::new("USD")
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            target_currency: default_target_currency(),
            holdings: Vec::new(),
        }
    }
}

impl From<&HoldingConfig> for Money {
    fn from(holding: &HoldingConfig) -> Self {
        Self::new(holding.amount, &holding.currency)
    }
}

impl PortfolioConfig {
    /// Returns the holdings as `Money` values, preserving order.
    #[must_use]
    pub fn moneys(&self) -> Vec<Money> {
        self.holdings.iter().map(Money::from).collect()
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones overriding earlier ones:
    /// `config/default.toml`, `config/{RUN_MODE}.toml`, then `MONETA__*`
    /// environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("MONETA").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML or does not match
    /// the configuration shape.
    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
