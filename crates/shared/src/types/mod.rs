//! Common types used across the application.

pub mod money;

#[cfg(test)]
mod props;

pub use money::{Currency, Money};
