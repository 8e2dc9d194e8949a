//! # pricer_core: Foundation Types for European Option Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the pricing workspace, providing:
//! - Simulation and request parameter types (`types::params`)
//! - Call/put selection (`types::option`)
//! - Structured validation and pricing errors (`types::error`)
//! - The common pricing interface shared by the Monte Carlo and
//!   closed-form pricers (`traits`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - thiserror: Error type derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{OptionType, PricingRequest, SimulationParameters};
//!
//! let params = SimulationParameters::new(100.0, 0.2, 1.0, 252).unwrap();
//! let request = PricingRequest::new(params, 100.0, OptionType::Call, 100_000, 0.05);
//!
//! assert!(request.validate().is_ok());
//! assert!((request.discount_factor() - (-0.05_f64).exp()).abs() < 1e-15);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for parameter and result types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod traits;
pub mod types;
