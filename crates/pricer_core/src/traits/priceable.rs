//! Trait for European option pricers.
//!
//! Both the Monte Carlo estimator and the closed-form reference pricer
//! consume the same [`PricingRequest`] and return a [`PricingResult`],
//! which lets collaborators (CLI, tests) swap one for the other.

use crate::types::{PricingError, PricingRequest, PricingResult};

/// A pricer for European options.
///
/// # Contract
///
/// - Implementations must validate the request before doing any work and
///   return [`PricingError::Validation`] on the first violated constraint.
/// - Inputs that an implementation does not use (for instance the path
///   count in a closed-form pricer) are still part of the request but need
///   not affect the result.
/// - A deterministic implementation reports `std_error == 0.0`.
///
/// # Examples
///
/// ```
/// use pricer_core::traits::EuropeanPricer;
/// use pricer_core::types::{
///     OptionType, PricingError, PricingRequest, PricingResult, SimulationParameters,
/// };
///
/// /// Prices every option at its undiscounted intrinsic value.
/// struct Intrinsic;
///
/// impl EuropeanPricer for Intrinsic {
///     fn name(&self) -> &'static str {
///         "intrinsic"
///     }
///
///     fn price(&self, request: &PricingRequest) -> Result<PricingResult, PricingError> {
///         request.validate()?;
///         let s = request.params.spot;
///         let k = request.strike;
///         let value = match request.option_type {
///             OptionType::Call => (s - k).max(0.0),
///             OptionType::Put => (k - s).max(0.0),
///         };
///         Ok(PricingResult::new(value, 0.0))
///     }
/// }
///
/// let request = PricingRequest::new(
///     SimulationParameters::default(),
///     90.0,
///     OptionType::Call,
///     1,
///     0.0,
/// );
/// assert_eq!(Intrinsic.price(&request).unwrap().price, 10.0);
/// ```
pub trait EuropeanPricer {
    /// Short human-readable name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Prices the option described by `request`.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Validation`] naming the offending field if the
    /// request violates a parameter constraint.
    fn price(&self, request: &PricingRequest) -> Result<PricingResult, PricingError>;
}
