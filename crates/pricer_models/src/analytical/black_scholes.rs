//! Black-Scholes pricing model for European options.
//!
//! This module provides the closed-form reference prices that Monte Carlo
//! estimates are checked against, together with analytical Greeks.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Zero Volatility
//!
//! At σ = 0 the terminal price is the forward S·e^(rT), so the discounted
//! payoff is known exactly:
//! - C = max(S - K·e^(-rT), 0)
//! - P = max(K·e^(-rT) - S, 0)
//!
//! These are evaluated directly instead of going through d₁, which is 0/0
//! at the forward.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use pricer_core::traits::EuropeanPricer;
use pricer_core::types::{
    ensure_non_negative, ensure_positive, OptionType, PricingError, PricingRequest,
    PricingResult, ValidationError,
};

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;

/// Closed-form European call price.
///
/// # Errors
/// Validates, in order, `spot > 0`, `strike > 0`, `volatility >= 0` and
/// `maturity > 0`. The rate is not restricted.
///
/// # Examples
/// ```
/// use pricer_models::analytical::bs_call;
///
/// let price = bs_call(100.0, 100.0, 0.05, 0.2, 1.0).unwrap();
/// assert!((price - 10.4506).abs() < 1e-4);
/// ```
pub fn bs_call(
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
) -> Result<f64, AnalyticalError> {
    validate_inputs(spot, strike, volatility, maturity)?;
    BlackScholes::new(spot, rate, volatility)?.price_call(strike, maturity)
}

/// Closed-form European put price.
///
/// Same validation as [`bs_call`].
///
/// # Examples
/// ```
/// use pricer_models::analytical::bs_put;
///
/// let price = bs_put(100.0, 100.0, 0.05, 0.2, 1.0).unwrap();
/// assert!((price - 5.5735).abs() < 1e-4);
/// ```
pub fn bs_put(
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
) -> Result<f64, AnalyticalError> {
    validate_inputs(spot, strike, volatility, maturity)?;
    BlackScholes::new(spot, rate, volatility)?.price_put(strike, maturity)
}

fn validate_inputs(
    spot: f64,
    strike: f64,
    volatility: f64,
    maturity: f64,
) -> Result<(), ValidationError> {
    ensure_positive(spot, ValidationError::NonPositiveSpot)?;
    ensure_positive(strike, ValidationError::NonPositiveStrike)?;
    ensure_non_negative(volatility, ValidationError::NegativeVolatility)?;
    ensure_positive(maturity, ValidationError::NonPositiveMaturity)
}

fn ensure_finite(value: f64, what: &str) -> Result<f64, AnalyticalError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AnalyticalError::NumericalInstability {
            message: format!("{} is {}", what, value),
        })
    }
}

/// Analytical sensitivities of a European option.
///
/// Theta is the derivative with respect to calendar time (usually negative).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Greeks {
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂σ
    pub vega: f64,
    /// ∂V/∂t
    pub theta: f64,
    /// ∂V/∂r
    pub rho: f64,
}

/// Black-Scholes model for European option pricing.
///
/// Holds a validated spot, rate and volatility; strike and maturity are
/// supplied per call.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0).unwrap();
/// let put_price = bs.price_put(100.0, 1.0).unwrap();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    /// Spot price (S)
    spot: f64,
    /// Risk-free interest rate (r)
    rate: f64,
    /// Volatility (σ)
    volatility: f64,
}

impl BlackScholes {
    /// Creates a new Black-Scholes model.
    ///
    /// # Errors
    /// - `spot` must be positive and finite
    /// - `volatility` must be non-negative and finite
    ///
    /// Negative rates are accepted.
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Result<Self, AnalyticalError> {
        ensure_positive(spot, ValidationError::NonPositiveSpot)?;
        ensure_non_negative(volatility, ValidationError::NegativeVolatility)?;
        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Computes the d1 term.
    ///
    /// Unchecked: with σ = 0 this is ±∞ away from the forward and NaN at it.
    #[inline]
    pub fn d1(&self, strike: f64, maturity: f64) -> f64 {
        let vol_sqrt_t = self.volatility * maturity.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + 0.5 * self.volatility * self.volatility) * maturity;
        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term, d₁ - σ√T.
    #[inline]
    pub fn d2(&self, strike: f64, maturity: f64) -> f64 {
        self.d1(strike, maturity) - self.volatility * maturity.sqrt()
    }

    /// Computes the European call price.
    pub fn price_call(&self, strike: f64, maturity: f64) -> Result<f64, AnalyticalError> {
        self.price(strike, maturity, OptionType::Call)
    }

    /// Computes the European put price.
    pub fn price_put(&self, strike: f64, maturity: f64) -> Result<f64, AnalyticalError> {
        self.price(strike, maturity, OptionType::Put)
    }

    /// Computes the European price for either side.
    ///
    /// # Errors
    /// Rejects a non-positive strike or maturity, and reports a non-finite
    /// result (for example from an overflowing rate) as
    /// [`AnalyticalError::NumericalInstability`].
    pub fn price(
        &self,
        strike: f64,
        maturity: f64,
        option_type: OptionType,
    ) -> Result<f64, AnalyticalError> {
        ensure_positive(strike, ValidationError::NonPositiveStrike)?;
        ensure_positive(maturity, ValidationError::NonPositiveMaturity)?;

        let discounted_strike = strike * (-self.rate * maturity).exp();

        let value = if self.volatility == 0.0 {
            match option_type {
                OptionType::Call => (self.spot - discounted_strike).max(0.0),
                OptionType::Put => (discounted_strike - self.spot).max(0.0),
            }
        } else {
            let d1 = self.d1(strike, maturity);
            let d2 = self.d2(strike, maturity);
            match option_type {
                // C = S·N(d₁) - K·e^(-rT)·N(d₂)
                OptionType::Call => self.spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
                // P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
                OptionType::Put => discounted_strike * norm_cdf(-d2) - self.spot * norm_cdf(-d1),
            }
        };

        let what = match option_type {
            OptionType::Call => "call price",
            OptionType::Put => "put price",
        };
        ensure_finite(value, what)
    }

    /// Computes all Greeks for one option.
    ///
    /// - Delta: N(d₁) for calls, N(d₁) - 1 for puts
    /// - Gamma: φ(d₁) / (S·σ·√T)
    /// - Vega: S·√T·φ(d₁)
    /// - Theta: -(S·σ·φ(d₁))/(2√T) ∓ r·K·e^(-rT)·N(±d₂)
    /// - Rho: ±K·T·e^(-rT)·N(±d₂)
    ///
    /// At σ = 0 the option is a deterministic forward position: delta is 1
    /// (call) or -1 (put) when in the money against K·e^(-rT) and 0
    /// otherwise, gamma and vega are 0, and theta/rho are those of the
    /// discounted strike leg.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::OptionType;
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
    /// let greeks = bs.greeks(100.0, 1.0, OptionType::Call).unwrap();
    /// assert!(greeks.delta > 0.5 && greeks.delta < 1.0);
    /// assert!(greeks.theta < 0.0);
    /// ```
    pub fn greeks(
        &self,
        strike: f64,
        maturity: f64,
        option_type: OptionType,
    ) -> Result<Greeks, AnalyticalError> {
        ensure_positive(strike, ValidationError::NonPositiveStrike)?;
        ensure_positive(maturity, ValidationError::NonPositiveMaturity)?;

        let discount = (-self.rate * maturity).exp();
        let discounted_strike = strike * discount;

        if self.volatility == 0.0 {
            let in_the_money = match option_type {
                OptionType::Call => self.spot > discounted_strike,
                OptionType::Put => self.spot < discounted_strike,
            };
            if !in_the_money {
                return Ok(Greeks::default());
            }
            let sign = if option_type.is_call() { 1.0 } else { -1.0 };
            return Ok(Greeks {
                delta: sign,
                gamma: 0.0,
                vega: 0.0,
                theta: -sign * self.rate * discounted_strike,
                rho: sign * maturity * discounted_strike,
            });
        }

        let sqrt_t = maturity.sqrt();
        let d1 = self.d1(strike, maturity);
        let d2 = d1 - self.volatility * sqrt_t;
        let pdf_d1 = norm_pdf(d1);

        let gamma = pdf_d1 / (self.spot * self.volatility * sqrt_t);
        let vega = self.spot * sqrt_t * pdf_d1;
        let decay = -(self.spot * self.volatility * pdf_d1) / (2.0 * sqrt_t);

        let greeks = match option_type {
            OptionType::Call => Greeks {
                delta: norm_cdf(d1),
                gamma,
                vega,
                theta: decay - self.rate * discounted_strike * norm_cdf(d2),
                rho: maturity * discounted_strike * norm_cdf(d2),
            },
            OptionType::Put => Greeks {
                delta: norm_cdf(d1) - 1.0,
                gamma,
                vega,
                theta: decay + self.rate * discounted_strike * norm_cdf(-d2),
                rho: -maturity * discounted_strike * norm_cdf(-d2),
            },
        };

        for (value, what) in [
            (greeks.delta, "delta"),
            (greeks.gamma, "gamma"),
            (greeks.vega, "vega"),
            (greeks.theta, "theta"),
            (greeks.rho, "rho"),
        ] {
            ensure_finite(value, what)?;
        }
        Ok(greeks)
    }
}

/// Closed-form pricer driven through [`EuropeanPricer`].
///
/// Uses the spot, volatility and maturity of the request's simulation
/// parameters; `steps` and `n_paths` are validated but otherwise unused.
/// The standard error is always zero.
///
/// # Examples
/// ```
/// use pricer_core::traits::EuropeanPricer;
/// use pricer_core::types::{OptionType, PricingRequest, SimulationParameters};
/// use pricer_models::analytical::AnalyticalPricer;
///
/// let request = PricingRequest::new(
///     SimulationParameters::default(),
///     100.0,
///     OptionType::Put,
///     1,
///     0.05,
/// );
/// let result = AnalyticalPricer.price(&request).unwrap();
/// assert!((result.price - 5.5735).abs() < 1e-4);
/// assert_eq!(result.std_error, 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticalPricer;

impl EuropeanPricer for AnalyticalPricer {
    fn name(&self) -> &'static str {
        "black-scholes"
    }

    fn price(&self, request: &PricingRequest) -> Result<PricingResult, PricingError> {
        request.validate()?;
        let params = &request.params;
        let model = BlackScholes::new(params.spot, request.rate, params.volatility)?;
        let price = model.price(request.strike, params.maturity, request.option_type)?;
        Ok(PricingResult::new(price, 0.0))
    }
}
