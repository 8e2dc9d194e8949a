//! Stochastic process models.
//!
//! - [`GbmDynamics`]: Geometric Brownian Motion under the risk-neutral measure
//!
//! ## Example
//!
//! ```
//! use pricer_models::models::GbmDynamics;
//!
//! // One year in 252 steps
//! let dynamics = GbmDynamics::new(0.05, 0.2, 1.0 / 252.0);
//! let next = dynamics.step(100.0, 0.0);
//! assert!(next > 100.0); // positive drift when z = 0 and r > σ²/2
//! ```

pub mod gbm;

pub use gbm::GbmDynamics;
