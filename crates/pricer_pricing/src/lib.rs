//! # Pricer Pricing (Layer 3: Monte Carlo Engine)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing turns a [`PricingRequest`](pricer_core::types::PricingRequest)
//! into a price estimate with a standard error:
//! - Independent per-worker normal streams ([`rng`])
//! - Terminal-value and full-path GBM generation ([`mc::paths`])
//! - Per-worker accumulation and a single final reduction ([`mc::accumulator`])
//! - The [`MonteCarloPricer`](mc::MonteCarloPricer) orchestrating it all on rayon
//!
//! Payoffs, dynamics and the Black-Scholes reference come from `pricer_models`.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::types::{OptionType, PricingRequest, SimulationParameters};
//! use pricer_models::analytical::bs_call;
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
//!
//! let pricer = MonteCarloPricer::new(
//!     MonteCarloConfig::builder().seed(2024).build().unwrap(),
//! )
//! .unwrap();
//!
//! let request = PricingRequest::new(
//!     SimulationParameters::default(),
//!     100.0,
//!     OptionType::Call,
//!     100_000,
//!     0.05,
//! );
//! let mc = pricer.price(&request).unwrap();
//! let bs = bs_call(100.0, 100.0, 0.05, 0.2, 1.0).unwrap();
//! assert!((mc.price - bs).abs() < 5.0 * mc.std_error);
//! ```
//!
//! ## Logging
//!
//! Each pricing call emits one `tracing` debug event with the path count,
//! worker count, seed and elapsed time. No subscriber is installed here.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod mc;
pub mod rng;
