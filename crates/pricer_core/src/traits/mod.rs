//! Core pricing traits.
//!
//! This module defines the common entry point shared by every European
//! pricer in the workspace:
//! - Price calculation from a [`PricingRequest`](crate::types::PricingRequest)
//!   (`EuropeanPricer` trait)
//!
//! The trait is intended for static dispatch; callers that need to hold
//! several pricers should use generics or an enum rather than `Box<dyn _>`.

pub mod priceable;

pub use priceable::EuropeanPricer;
