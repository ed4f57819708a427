//! Moneta portfolio evaluator
//!
//! Registers the configured exchange rates in a bank, fills a portfolio with
//! the configured holdings and reports its total in the target currency.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moneta_core::{Bank, ExchangeRate, Portfolio, PortfolioError};
use moneta_shared::{AppConfig, Money};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moneta_core=debug,evaluator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;
    info!(
        rates = config.rates.len(),
        holdings = config.portfolio.holdings.len(),
        target_currency = %config.portfolio.target_currency,
        "Configuration loaded"
    );

    let total = evaluate(&config).context("Portfolio evaluation failed")?;
    info!(%total, "Portfolio total");

    Ok(())
}

fn bank_from(config: &AppConfig) -> Bank {
    config
        .rates
        .iter()
        .map(|rate| ExchangeRate::new(&rate.from, &rate.to, rate.rate))
        .collect()
}

fn evaluate(config: &AppConfig) -> Result<Money, PortfolioError> {
    let bank = bank_from(config);

    let mut portfolio = Portfolio::new();
    portfolio.add(config.portfolio.moneys());

    portfolio.evaluate(&bank, &config.portfolio.target_currency)
}
