//! Simulation parameters, pricing requests and results.
//!
//! All types here are plain immutable values. Validation is a separate,
//! randomness-free step so that it can be exercised on its own and so that
//! engines can reject a request before drawing a single variate.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::{ensure_non_negative, ensure_positive, ValidationError};
use super::option::OptionType;

/// Geometric Brownian Motion parameters for one simulation run.
///
/// # Invariants
/// - `spot > 0`
/// - `volatility >= 0`
/// - `maturity > 0`
/// - `steps >= 1`
///
/// # Examples
/// ```
/// use pricer_core::types::{SimulationParameters, ValidationError};
///
/// let params = SimulationParameters::new(100.0, 0.2, 1.0, 252).unwrap();
/// assert!((params.dt() - 1.0 / 252.0).abs() < 1e-15);
///
/// let err = SimulationParameters::new(100.0, -0.1, 1.0, 252).unwrap_err();
/// assert_eq!(err, ValidationError::NegativeVolatility(-0.1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimulationParameters {
    /// Initial asset price (S₀).
    pub spot: f64,
    /// Volatility (σ), annualised.
    pub volatility: f64,
    /// Time to maturity (T) in years.
    pub maturity: f64,
    /// Number of time steps for discretised paths.
    pub steps: usize,
}

impl SimulationParameters {
    /// Creates validated simulation parameters.
    ///
    /// # Errors
    /// Returns the first violated constraint, checked in the order
    /// spot, volatility, maturity, steps.
    pub fn new(
        spot: f64,
        volatility: f64,
        maturity: f64,
        steps: usize,
    ) -> Result<Self, ValidationError> {
        let params = Self {
            spot,
            volatility,
            maturity,
            steps,
        };
        params.validate()?;
        Ok(params)
    }

    /// Validates the parameters without drawing any random numbers.
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_positive(self.spot, ValidationError::NonPositiveSpot)?;
        ensure_non_negative(self.volatility, ValidationError::NegativeVolatility)?;
        ensure_positive(self.maturity, ValidationError::NonPositiveMaturity)?;
        if self.steps == 0 {
            return Err(ValidationError::ZeroSteps);
        }
        Ok(())
    }

    /// Time step size `T / steps`.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.maturity / self.steps as f64
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            spot: 100.0,
            volatility: 0.2,
            maturity: 1.0,
            steps: 252,
        }
    }
}

/// Everything needed to price one European option.
///
/// Stateless and cheap to copy; build a fresh one per call.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionType, PricingRequest, SimulationParameters, ValidationError};
///
/// let request = PricingRequest::new(
///     SimulationParameters::default(),
///     100.0,
///     OptionType::Call,
///     0,
///     0.05,
/// );
/// assert_eq!(request.validate(), Err(ValidationError::ZeroPaths));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PricingRequest {
    /// GBM parameters of the underlying.
    pub params: SimulationParameters,
    /// Strike (K).
    pub strike: f64,
    /// Call or put.
    pub option_type: OptionType,
    /// Number of Monte Carlo samples.
    pub n_paths: usize,
    /// Continuously compounded risk-free rate (r).
    pub rate: f64,
}

impl PricingRequest {
    /// Creates a new request. Call [`validate`](Self::validate) before use.
    #[inline]
    pub fn new(
        params: SimulationParameters,
        strike: f64,
        option_type: OptionType,
        n_paths: usize,
        rate: f64,
    ) -> Self {
        Self {
            params,
            strike,
            option_type,
            n_paths,
            rate,
        }
    }

    /// Returns a copy of this request for the other option side.
    #[inline]
    pub fn with_option_type(self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..self
        }
    }

    /// Validates the request.
    ///
    /// Request-level fields are checked first (strike, path count, rate),
    /// then the simulation parameters.
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_positive(self.strike, ValidationError::NonPositiveStrike)?;
        if self.n_paths == 0 {
            return Err(ValidationError::ZeroPaths);
        }
        ensure_non_negative(self.rate, ValidationError::NegativeRate)?;
        self.params.validate()
    }

    /// Discount factor `exp(-rT)`.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.params.maturity).exp()
    }
}

/// Price estimate with its standard error.
///
/// Closed-form pricers report a standard error of zero.
///
/// # Examples
/// ```
/// use pricer_core::types::PricingResult;
///
/// let result = PricingResult::new(10.45, 0.01);
/// assert!((result.confidence_95() - 0.0196).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PricingResult {
    /// Present value estimate.
    pub price: f64,
    /// Standard error of the estimate.
    pub std_error: f64,
}

impl PricingResult {
    /// Creates a result.
    #[inline]
    pub fn new(price: f64, std_error: f64) -> Self {
        Self { price, std_error }
    }

    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }

    /// Relative error `|price - reference| / |reference|`.
    ///
    /// Falls back to the absolute error when the reference is zero.
    #[inline]
    pub fn relative_error(&self, reference: f64) -> f64 {
        let abs_error = (self.price - reference).abs();
        if reference == 0.0 {
            abs_error
        } else {
            abs_error / reference.abs()
        }
    }
}
