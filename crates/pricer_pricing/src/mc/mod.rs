//! Monte Carlo estimation of European option prices.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── MonteCarloConfig       (workers, seed, path mode, antithetic)
//! ├── partition_paths()      (static per-worker shares)
//! └── per worker
//!     ├── PricerRng          (stream_seed(base, worker))
//!     ├── PathSampler        (terminal or discretised GBM → discounted payoff)
//!     └── AccumulatedStatistics
//!         └── combine() → PricingResult
//! ```
//!
//! # Examples
//!
//! ```rust
//! use pricer_core::types::{OptionType, PricingRequest, SimulationParameters};
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
//!
//! let config = MonteCarloConfig::builder()
//!     .n_workers(4)
//!     .seed(42)
//!     .antithetic(true)
//!     .build()
//!     .unwrap();
//! let pricer = MonteCarloPricer::new(config).unwrap();
//!
//! let params = SimulationParameters::new(100.0, 0.2, 1.0, 252).unwrap();
//! let request = PricingRequest::new(params, 100.0, OptionType::Call, 10_000, 0.05);
//!
//! let (call, put) = pricer.price_call_and_put(&request).unwrap();
//! println!("Call: {:.4} ± {:.4}", call.price, call.std_error);
//! println!("Put:  {:.4} ± {:.4}", put.price, put.std_error);
//! ```

pub mod accumulator;
pub mod config;
pub mod error;
pub mod partition;
pub mod paths;
pub mod pricer;

// Re-exports for convenient access
pub use accumulator::AccumulatedStatistics;
pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, PathMode};
pub use error::ConfigError;
pub use partition::partition_paths;
pub use paths::{simulate_path, terminal_price, PathSampler};
pub use pricer::MonteCarloPricer;
