//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors specific to closed-form pricing

use pricer_core::types::{PricingError, ValidationError};
use thiserror::Error;

/// Analytical pricing errors.
///
/// # Variants
/// - `Validation`: An input violated its constraint (spot, strike,
///   volatility, maturity)
/// - `NumericalInstability`: The formula produced a non-finite value
///
/// # Examples
/// ```
/// use pricer_core::types::ValidationError;
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::from(ValidationError::NegativeVolatility(-0.2));
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid input parameter.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Numerical instability during computation.
    #[error("Numerical instability: {message}")]
    NumericalInstability {
        /// Description of the numerical issue
        message: String,
    },
}

impl AnalyticalError {
    /// Returns the validation failure, if this error is one.
    #[inline]
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            AnalyticalError::Validation(err) => Some(err),
            AnalyticalError::NumericalInstability { .. } => None,
        }
    }
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::Validation(err) => PricingError::Validation(err),
            AnalyticalError::NumericalInstability { message } => {
                PricingError::NumericalInstability(message)
            }
        }
    }
}
