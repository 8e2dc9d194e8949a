//! Core parameter, result, and error types.
//!
//! This module provides:
//! - `params`: Simulation parameters, pricing requests and pricing results
//! - `option`: Call/put selection
//! - `error`: Structured error types for validation and pricing failures
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`SimulationParameters`], [`PricingRequest`], [`PricingResult`] from `params`
//! - [`OptionType`] from `option`
//! - [`ValidationError`], [`PricingError`] from `error`

pub mod error;
pub mod option;
pub mod params;

// Re-export commonly used types at module level
pub use error::{ensure_non_negative, ensure_positive, PricingError, ValidationError};
pub use option::OptionType;
pub use params::{PricingRequest, PricingResult, SimulationParameters};
