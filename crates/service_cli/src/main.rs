//! mcprice - Monte Carlo European Option Pricer
//!
//! Command-line entry point that prices European calls and puts by Monte
//! Carlo simulation under geometric Brownian motion and cross-checks the
//! estimates against the closed-form Black-Scholes prices.
//!
//! # Commands
//!
//! - `mcprice price` - Monte Carlo vs Black-Scholes comparison with timings
//! - `mcprice greeks` - Closed-form Greeks for the call and the put
//!
//! # Architecture
//!
//! As the service layer, this crate only parses arguments, loads
//! configuration and formats output; all pricing lives in the
//! `pricer_*` crates.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

use commands::{greeks::GreeksArgs, price::PriceArgs};
use config::CliConfig;
pub use error::{CliError, Result};

/// Monte Carlo European option pricer
#[derive(Parser, Debug)]
#[command(name = "mcprice")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "mcprice.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Price a call and a put by Monte Carlo and compare with Black-Scholes
    Price(PriceArgs),

    /// Compute closed-form Black-Scholes Greeks
    Greeks(GreeksArgs),
}

fn init_tracing(verbose: bool, log_level: &str) {
    let fallback = if verbose { "debug" } else { log_level };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // Logs go to stderr so that `--format json` output stays machine-readable
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = CliConfig::from_file(&cli.config)?;
    init_tracing(cli.verbose, &config.general.log_level);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Price(args) => commands::price::run(&args, &config),
        Commands::Greeks(args) => commands::greeks::run(&args),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
