//! # Pricer Models (L2: Business Logic)
//!
//! Payoff functions, GBM dynamics, and closed-form reference pricing.
//!
//! This crate provides:
//! - European call/put payoffs (`instruments`)
//! - Geometric Brownian Motion step and terminal maps (`models`)
//! - Black-Scholes-Merton prices and Greeks (`analytical`)
//!
//! ## Design Principles
//!
//! - **Pure functions**: nothing here draws random numbers; the Monte Carlo
//!   engine supplies normal variates and this crate maps them to prices
//! - **Explicit degenerate branches**: σ = 0 has a well-defined limiting
//!   price and is handled directly rather than reported as an error

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod models;
