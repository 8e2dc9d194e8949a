//! European payoff functions.
//!
//! Payoffs depend only on the terminal asset price, so the Monte Carlo
//! engine never needs to keep a full path to evaluate them.

use num_traits::Float;
use pricer_core::types::OptionType;

/// Call payoff max(S - K, 0).
///
/// # Examples
/// ```
/// use pricer_models::instruments::call_payoff;
///
/// assert_eq!(call_payoff(110.0_f64, 100.0), 10.0);
/// assert_eq!(call_payoff(90.0_f64, 100.0), 0.0);
/// ```
#[inline]
pub fn call_payoff<T: Float>(spot: T, strike: T) -> T {
    (spot - strike).max(T::zero())
}

/// Put payoff max(K - S, 0).
#[inline]
pub fn put_payoff<T: Float>(spot: T, strike: T) -> T {
    (strike - spot).max(T::zero())
}

/// Evaluates the payoff for the given option side.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_models::instruments::payoff;
///
/// assert_eq!(payoff(OptionType::Put, 90.0, 100.0), 10.0);
/// ```
#[inline]
pub fn payoff(option_type: OptionType, spot: f64, strike: f64) -> f64 {
    match option_type {
        OptionType::Call => call_payoff(spot, strike),
        OptionType::Put => put_payoff(spot, strike),
    }
}
