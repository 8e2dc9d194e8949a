//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions used as the reference for
//! Monte Carlo estimates:
//! - Black-Scholes prices ([`bs_call`], [`bs_put`], [`BlackScholes`])
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//! - [`AnalyticalPricer`], the same formulas behind the common pricer trait
//!
//! ## Design Principles
//!
//! - **Numerical Stability**: Uses erfc-based CDF for accuracy in the tails
//! - **Degenerate inputs**: σ = 0 is a priced limit, not an error

pub mod black_scholes;
pub mod distributions;
pub mod error;

// Re-export main types at module level
pub use black_scholes::{bs_call, bs_put, AnalyticalPricer, BlackScholes, Greeks};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
