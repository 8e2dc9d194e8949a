//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

use clap::{Args, ValueEnum};

pub mod greeks;
pub mod price;

/// Output format shared by all commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Market and contract inputs shared by all commands
#[derive(Args, Debug, Clone)]
pub struct MarketArgs {
    /// Initial asset price (S0)
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
    pub spot: f64,

    /// Strike price (K)
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
    pub strike: f64,

    /// Continuously compounded risk-free rate (r)
    #[arg(long, default_value_t = 0.05, allow_negative_numbers = true)]
    pub rate: f64,

    /// Volatility (sigma)
    #[arg(long, default_value_t = 0.2, allow_negative_numbers = true)]
    pub sigma: f64,

    /// Time to maturity in years (T)
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub maturity: f64,
}

/// Serialises `value` as pretty JSON and prints it.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> crate::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
