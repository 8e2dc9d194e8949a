//! Instrument payoffs.
//!
//! Only path-independent European payoffs are provided:
//! - [`call_payoff`]: max(S - K, 0)
//! - [`put_payoff`]: max(K - S, 0)
//! - [`payoff`]: dispatch on [`OptionType`](pricer_core::types::OptionType)

pub mod payoff;

pub use payoff::{call_payoff, payoff, put_payoff};
