//! Error types for structured error handling.
//!
//! This module provides:
//! - `ValidationError`: A caller-supplied parameter violates its documented constraint
//! - `PricingError`: Errors from pricing operations

use thiserror::Error;

/// Parameter validation failures.
///
/// Each variant identifies exactly one offending field so callers can report
/// which input was rejected. Validation always runs before any random draw,
/// so receiving one of these means no simulation work was performed.
///
/// Non-finite inputs (NaN, ±∞) are reported under the variant of the field
/// they were supplied for.
///
/// # Examples
/// ```
/// use pricer_core::types::ValidationError;
///
/// let err = ValidationError::NonPositiveSpot(0.0);
/// assert_eq!(err.field(), "spot");
/// assert_eq!(format!("{}", err), "Invalid spot price: S0 = 0 (must be positive)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ValidationError {
    /// Initial asset price is zero, negative or non-finite.
    #[error("Invalid spot price: S0 = {0} (must be positive)")]
    NonPositiveSpot(f64),

    /// Strike is zero, negative or non-finite.
    #[error("Invalid strike: K = {0} (must be positive)")]
    NonPositiveStrike(f64),

    /// Risk-free rate is negative or non-finite.
    #[error("Invalid risk-free rate: r = {0} (must be non-negative)")]
    NegativeRate(f64),

    /// Volatility is negative or non-finite.
    #[error("Invalid volatility: σ = {0} (must be non-negative)")]
    NegativeVolatility(f64),

    /// Time to maturity is zero, negative or non-finite.
    #[error("Invalid maturity: T = {0} (must be positive)")]
    NonPositiveMaturity(f64),

    /// Step count is zero.
    #[error("Invalid step count: steps = 0 (must be at least 1)")]
    ZeroSteps,

    /// Path count is zero.
    #[error("Invalid path count: n_paths = 0 (must be at least 1)")]
    ZeroPaths,
}

impl ValidationError {
    /// Returns the name of the rejected field.
    #[inline]
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NonPositiveSpot(_) => "spot",
            ValidationError::NonPositiveStrike(_) => "strike",
            ValidationError::NegativeRate(_) => "rate",
            ValidationError::NegativeVolatility(_) => "volatility",
            ValidationError::NonPositiveMaturity(_) => "maturity",
            ValidationError::ZeroSteps => "steps",
            ValidationError::ZeroPaths => "n_paths",
        }
    }
}

/// Checks a strictly positive, finite value, mapping failure through `err`.
#[inline]
pub fn ensure_positive(
    value: f64,
    err: fn(f64) -> ValidationError,
) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(err(value))
    }
}

/// Checks a non-negative, finite value, mapping failure through `err`.
#[inline]
pub fn ensure_non_negative(
    value: f64,
    err: fn(f64) -> ValidationError,
) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(err(value))
    }
}

/// Categorised pricing errors.
///
/// # Variants
/// - `Validation`: A request field violated its constraint
/// - `InvalidConfig`: Engine configuration is unusable
/// - `NumericalInstability`: Computation produced a non-finite estimate
///
/// # Examples
/// ```
/// use pricer_core::types::{PricingError, ValidationError};
///
/// let err: PricingError = ValidationError::ZeroPaths.into();
/// assert!(format!("{}", err).contains("n_paths"));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// Invalid request parameter
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Invalid engine configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Numerical instability during computation
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

impl PricingError {
    /// Returns the validation failure, if this error is one.
    #[inline]
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            PricingError::Validation(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_fields() {
        assert_eq!(ValidationError::NonPositiveSpot(0.0).field(), "spot");
        assert_eq!(ValidationError::NonPositiveStrike(-1.0).field(), "strike");
        assert_eq!(ValidationError::NegativeRate(-0.01).field(), "rate");
        assert_eq!(ValidationError::NegativeVolatility(-0.1).field(), "volatility");
        assert_eq!(ValidationError::NonPositiveMaturity(0.0).field(), "maturity");
        assert_eq!(ValidationError::ZeroSteps.field(), "steps");
        assert_eq!(ValidationError::ZeroPaths.field(), "n_paths");
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::NonPositiveStrike(-1.0);
        assert_eq!(format!("{}", err), "Invalid strike: K = -1 (must be positive)");

        let err = ValidationError::NegativeVolatility(-0.1);
        assert_eq!(
            format!("{}", err),
            "Invalid volatility: σ = -0.1 (must be non-negative)"
        );

        let err = ValidationError::ZeroSteps;
        assert!(format!("{}", err).contains("steps"));
    }

    #[test]
    fn test_ensure_positive() {
        assert!(ensure_positive(1.0, ValidationError::NonPositiveSpot).is_ok());
        assert_eq!(
            ensure_positive(0.0, ValidationError::NonPositiveSpot),
            Err(ValidationError::NonPositiveSpot(0.0))
        );
        assert!(ensure_positive(f64::INFINITY, ValidationError::NonPositiveSpot).is_err());
        assert!(ensure_positive(f64::NAN, ValidationError::NonPositiveSpot).is_err());
    }

    #[test]
    fn test_ensure_non_negative() {
        assert!(ensure_non_negative(0.0, ValidationError::NegativeRate).is_ok());
        assert!(ensure_non_negative(-1e-12, ValidationError::NegativeRate).is_err());
        assert!(ensure_non_negative(f64::NAN, ValidationError::NegativeRate).is_err());
    }

    #[test]
    fn test_pricing_error_from_validation() {
        let err: PricingError = ValidationError::NegativeRate(-0.01).into();
        assert_eq!(
            err.as_validation(),
            Some(&ValidationError::NegativeRate(-0.01))
        );
        assert_eq!(
            format!("{}", err),
            "Invalid risk-free rate: r = -0.01 (must be non-negative)"
        );
    }

    #[test]
    fn test_pricing_error_display() {
        let err = PricingError::InvalidConfig("n_workers must be positive".to_string());
        assert_eq!(
            format!("{}", err),
            "Invalid configuration: n_workers must be positive"
        );
        assert!(err.as_validation().is_none());

        let err = PricingError::NumericalInstability("price is NaN".to_string());
        assert_eq!(format!("{}", err), "Numerical instability: price is NaN");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = ValidationError::ZeroPaths;
        let _: &dyn std::error::Error = &err;
        let err = PricingError::from(err);
        let _: &dyn std::error::Error = &err;
    }
}
