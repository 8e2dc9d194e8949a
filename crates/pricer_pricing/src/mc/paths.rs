//! Path and terminal-value generation.
//!
//! Two equivalent ways of reaching S_T under GBM, both using the log-space
//! (exact) transition:
//! ```text
//! S(t+dt) = S(t) × exp((r - 0.5σ²)dt + σ√dt × Z)
//! ```
//!
//! - [`simulate_path`]: the full trajectory on a grid of `steps` intervals
//! - [`terminal_price`]: one draw straight to maturity
//!
//! Both validate their inputs before drawing anything. The engine itself
//! validates a request once and then goes through [`PathSampler`], which
//! does no checking in the per-sample loop.
//!
//! # Memory Layout
//!
//! A simulated path stores `steps + 1` prices, `path[0] = S0`.

use pricer_core::types::{
    ensure_non_negative, OptionType, PricingRequest, SimulationParameters, ValidationError,
};
use pricer_models::instruments::payoff;
use pricer_models::models::GbmDynamics;

use super::config::PathMode;
use crate::rng::NormalSource;

/// Simulates a full GBM path of `steps + 1` prices.
///
/// # Errors
///
/// Rejects invalid simulation parameters and a negative rate before any
/// random draw.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::SimulationParameters;
/// use pricer_pricing::mc::simulate_path;
/// use pricer_pricing::rng::PricerRng;
///
/// let params = SimulationParameters::new(100.0, 0.2, 1.0, 12).unwrap();
/// let mut rng = PricerRng::from_seed(1);
/// let path = simulate_path(&params, 0.05, &mut rng).unwrap();
///
/// assert_eq!(path.len(), 13);
/// assert_eq!(path[0], 100.0);
/// ```
pub fn simulate_path<R: NormalSource>(
    params: &SimulationParameters,
    rate: f64,
    rng: &mut R,
) -> Result<Vec<f64>, ValidationError> {
    params.validate()?;
    ensure_non_negative(rate, ValidationError::NegativeRate)?;

    let dynamics = GbmDynamics::new(rate, params.volatility, params.dt());
    let mut path = Vec::with_capacity(path_capacity(params.steps));
    let mut spot = params.spot;
    path.push(spot);
    for _ in 0..params.steps {
        spot = dynamics.step(spot, rng.next_standard_normal());
        path.push(spot);
    }
    Ok(path)
}

/// Largest up-front allocation for a path; longer paths grow as they fill.
const MAX_PATH_PREALLOCATION: usize = 1 << 16;

fn path_capacity(steps: usize) -> usize {
    steps.saturating_add(1).min(MAX_PATH_PREALLOCATION)
}

/// Draws S_T directly from the exact GBM solution with a single variate.
///
/// `steps` is validated but does not affect the result.
///
/// # Errors
///
/// Rejects invalid simulation parameters before any random draw.
pub fn terminal_price<R: NormalSource>(
    params: &SimulationParameters,
    rate: f64,
    rng: &mut R,
) -> Result<f64, ValidationError> {
    params.validate()?;
    let dynamics = GbmDynamics::new(rate, params.volatility, params.maturity);
    Ok(dynamics.terminal(params.spot, rng.next_standard_normal()))
}

/// Produces one discounted-payoff sample per call for an already validated
/// request.
///
/// Copyable and read-only, so every worker can hold its own copy.
#[derive(Clone, Copy, Debug)]
pub struct PathSampler {
    dynamics: GbmDynamics,
    spot: f64,
    strike: f64,
    option_type: OptionType,
    discount_factor: f64,
    steps: usize,
    path_mode: PathMode,
    antithetic: bool,
}

impl PathSampler {
    /// Builds a sampler. The request is assumed to be valid.
    pub fn new(request: &PricingRequest, path_mode: PathMode, antithetic: bool) -> Self {
        let params = &request.params;
        let (dt, steps) = match path_mode {
            PathMode::Terminal => (params.maturity, 1),
            PathMode::Discretised => (params.dt(), params.steps),
        };
        Self {
            dynamics: GbmDynamics::new(request.rate, params.volatility, dt),
            spot: params.spot,
            strike: request.strike,
            option_type: request.option_type,
            discount_factor: request.discount_factor(),
            steps,
            path_mode,
            antithetic,
        }
    }

    /// Normal draws consumed per sample.
    #[inline]
    pub fn draws_per_sample(&self) -> usize {
        self.steps
    }

    /// Returns the path mode this sampler was built for.
    #[inline]
    pub fn path_mode(&self) -> PathMode {
        self.path_mode
    }

    /// Draws one sample.
    ///
    /// Without antithetics this is the discounted payoff of one path. With
    /// antithetics it is the mean of the discounted payoffs of the path
    /// driven by `Z` and the mirror path driven by `-Z`.
    #[inline]
    pub fn sample<R: NormalSource>(&self, rng: &mut R) -> f64 {
        let mut spot = self.spot;
        if self.antithetic {
            let mut mirror = self.spot;
            for _ in 0..self.steps {
                let z = rng.next_standard_normal();
                spot = self.dynamics.step(spot, z);
                mirror = self.dynamics.step(mirror, -z);
            }
            0.5 * (self.discounted_payoff(spot) + self.discounted_payoff(mirror))
        } else {
            for _ in 0..self.steps {
                spot = self.dynamics.step(spot, rng.next_standard_normal());
            }
            self.discounted_payoff(spot)
        }
    }

    #[inline]
    fn discounted_payoff(&self, terminal: f64) -> f64 {
        self.discount_factor * payoff(self.option_type, terminal, self.strike)
    }
}
