//! Monte Carlo pricing engine.
//!
//! The [`MonteCarloPricer`] coordinates:
//! 1. Request validation (before any random draw)
//! 2. Partitioning of paths across workers
//! 3. Per-worker simulation, each worker owning its [`PricerRng`] stream
//!    and a private [`AccumulatedStatistics`]
//! 4. One final combine of the per-worker totals
//!
//! # Determinism
//!
//! Worker `i` draws from `stream_seed(base_seed, i)`. Per-worker results
//! are collected in worker order and folded sequentially, so a seeded run
//! is bit-for-bit reproducible regardless of thread scheduling. Without a
//! configured seed a fresh base seed is drawn on every call.

use std::time::Instant;

use pricer_core::traits::EuropeanPricer;
use pricer_core::types::{OptionType, PricingError, PricingRequest, PricingResult};
use rayon::prelude::*;
use tracing::debug;

use super::accumulator::AccumulatedStatistics;
use super::config::MonteCarloConfig;
use super::error::ConfigError;
use super::partition::partition_paths;
use super::paths::PathSampler;
use crate::rng::{entropy_seed, NormalSource, PricerRng};

/// Normal source that always returns zero; yields the median path.
struct ZeroDraw;

impl NormalSource for ZeroDraw {
    #[inline]
    fn next_standard_normal(&mut self) -> f64 {
        0.0
    }
}

/// Monte Carlo pricer for European options under GBM.
///
/// Stateless between calls: the configuration is read-only and every call
/// builds its own generators, so one pricer can be shared across threads.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{OptionType, PricingRequest, SimulationParameters};
/// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
///
/// let config = MonteCarloConfig::builder().seed(42).build().unwrap();
/// let pricer = MonteCarloPricer::new(config).unwrap();
///
/// let request = PricingRequest::new(
///     SimulationParameters::default(),
///     100.0,
///     OptionType::Call,
///     50_000,
///     0.05,
/// );
/// let result = pricer.price(&request).unwrap();
/// assert!((result.price - 10.4506).abs() < 4.0 * result.std_error);
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloPricer {
    config: MonteCarloConfig,
}

impl MonteCarloPricer {
    /// Creates a new pricer with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn new(config: MonteCarloConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Prices one European option.
    ///
    /// # Errors
    ///
    /// - [`PricingError::Validation`] naming the first invalid field; no
    ///   paths are simulated in that case
    /// - [`PricingError::NumericalInstability`] if the estimate is not finite
    pub fn price(&self, request: &PricingRequest) -> Result<PricingResult, PricingError> {
        request.validate()?;
        let base_seed = self.resolve_seed();
        self.price_validated(request, base_seed)
    }

    /// Prices the call and the put of the same request.
    ///
    /// Both legs share one base seed, so they are driven by the same normal
    /// draws (common random numbers) and their difference is far less noisy
    /// than two independent runs.
    ///
    /// Returns `(call, put)` whatever side `request.option_type` names.
    pub fn price_call_and_put(
        &self,
        request: &PricingRequest,
    ) -> Result<(PricingResult, PricingResult), PricingError> {
        request.validate()?;
        let base_seed = self.resolve_seed();
        let call = self.price_validated(&request.with_option_type(OptionType::Call), base_seed)?;
        let put = self.price_validated(&request.with_option_type(OptionType::Put), base_seed)?;
        Ok((call, put))
    }

    fn resolve_seed(&self) -> u64 {
        self.config.seed().unwrap_or_else(entropy_seed)
    }

    fn price_validated(
        &self,
        request: &PricingRequest,
        base_seed: u64,
    ) -> Result<PricingResult, PricingError> {
        let start = Instant::now();
        let sampler = PathSampler::new(request, self.config.path_mode(), self.config.antithetic());
        let shift = sampler.sample(&mut ZeroDraw);
        let shares = partition_paths(request.n_paths, self.config.n_workers());

        let partials: Vec<AccumulatedStatistics> = shares
            .par_iter()
            .enumerate()
            .map(|(worker, &share)| {
                let mut rng = PricerRng::for_worker(base_seed, worker);
                let mut acc = AccumulatedStatistics::new(shift);
                for _ in 0..share {
                    acc.add(sampler.sample(&mut rng));
                }
                acc
            })
            .collect();

        let result = AccumulatedStatistics::combine(partials).finalise();

        debug!(
            option_type = %request.option_type,
            n_paths = request.n_paths,
            workers = shares.len(),
            seed = base_seed,
            path_mode = ?sampler.path_mode(),
            draws_per_sample = sampler.draws_per_sample(),
            antithetic = self.config.antithetic(),
            price = result.price,
            std_error = result.std_error,
            elapsed_ms = start.elapsed().as_secs_f64() * 1e3,
            "Monte Carlo pricing complete"
        );

        if !result.price.is_finite() || !result.std_error.is_finite() {
            return Err(PricingError::NumericalInstability(format!(
                "estimate is not finite (price = {}, std_error = {})",
                result.price, result.std_error
            )));
        }
        Ok(result)
    }
}

impl EuropeanPricer for MonteCarloPricer {
    fn name(&self) -> &'static str {
        "monte-carlo"
    }

    fn price(&self, request: &PricingRequest) -> Result<PricingResult, PricingError> {
        MonteCarloPricer::price(self, request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mc::PathMode;
    use approx::assert_relative_eq;
    use pricer_core::types::{SimulationParameters, ValidationError};
    use pricer_models::analytical::{bs_call, bs_put};

    fn create_test_pricer(seed: u64) -> MonteCarloPricer {
        let config = MonteCarloConfig::builder()
            .n_workers(4)
            .seed(seed)
            .build()
            .unwrap();
        MonteCarloPricer::new(config).unwrap()
    }

    fn atm_request(n_paths: usize) -> PricingRequest {
        PricingRequest::new(
            SimulationParameters::default(),
            100.0,
            OptionType::Call,
            n_paths,
            0.05,
        )
    }

    #[test]
    fn test_price_european_call() {
        let pricer = create_test_pricer(42);
        let result = pricer.price(&atm_request(200_000)).unwrap();
        let reference = bs_call(100.0, 100.0, 0.05, 0.2, 1.0).unwrap();

        assert!(result.std_error > 0.0);
        assert!(
            (result.price - reference).abs() < 4.0 * result.std_error,
            "MC {} vs BS {} (se {})",
            result.price,
            reference,
            result.std_error
        );
    }

    #[test]
    fn test_price_european_put() {
        let pricer = create_test_pricer(7);
        let request = atm_request(200_000).with_option_type(OptionType::Put);
        let result = pricer.price(&request).unwrap();
        let reference = bs_put(100.0, 100.0, 0.05, 0.2, 1.0).unwrap();

        assert!((result.price - reference).abs() < 4.0 * result.std_error);
    }

    #[test]
    fn test_pricer_reproducibility() {
        let pricer = create_test_pricer(12345);
        let a = pricer.price(&atm_request(20_000)).unwrap();
        let b = pricer.price(&atm_request(20_000)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = create_test_pricer(1).price(&atm_request(10_000)).unwrap();
        let b = create_test_pricer(2).price(&atm_request(10_000)).unwrap();
        assert_ne!(a.price, b.price);
    }

    #[test]
    fn test_validation_before_simulation() {
        let pricer = create_test_pricer(42);
        let request = PricingRequest {
            rate: -0.01,
            ..atm_request(1_000)
        };
        let err = pricer.price(&request).unwrap_err();
        assert_eq!(err.as_validation(), Some(&ValidationError::NegativeRate(-0.01)));
    }

    #[test]
    fn test_zero_volatility_has_zero_std_error() {
        let pricer = create_test_pricer(42);
        let request = PricingRequest {
            params: SimulationParameters {
                volatility: 0.0,
                ..SimulationParameters::default()
            },
            ..atm_request(10_000)
        };
        let result = pricer.price(&request).unwrap();
        let reference = bs_call(100.0, 100.0, 0.05, 0.0, 1.0).unwrap();

        assert_eq!(result.std_error, 0.0);
        assert_relative_eq!(result.price, reference, epsilon = 1e-12);
    }

    #[test]
    fn test_single_path_and_more_workers_than_paths() {
        let pricer = create_test_pricer(3);
        let result = pricer.price(&atm_request(1)).unwrap();
        assert_eq!(result.std_error, 0.0);
        assert!(result.price >= 0.0);

        let result = pricer.price(&atm_request(3)).unwrap();
        assert!(result.price.is_finite());
    }

    #[test]
    fn test_call_and_put_parity_with_common_draws() {
        let pricer = create_test_pricer(99);
        let (call, put) = pricer.price_call_and_put(&atm_request(100_000)).unwrap();
        let forward = 100.0 - 100.0 * (-0.05_f64).exp();

        // Same draws: C - P estimates S0 - K·df with only the spot noise left
        let se = (call.std_error.powi(2) + put.std_error.powi(2)).sqrt();
        assert!((call.price - put.price - forward).abs() < 4.0 * se);
    }

    #[test]
    fn test_call_and_put_legs_match_individual_pricing() {
        let pricer = create_test_pricer(5);
        let request = atm_request(10_000).with_option_type(OptionType::Put);
        let (call, put) = pricer.price_call_and_put(&request).unwrap();

        assert_eq!(call, pricer.price(&request.with_option_type(OptionType::Call)).unwrap());
        assert_eq!(put, pricer.price(&request).unwrap());
    }

    #[test]
    fn test_antithetic_reduces_std_error() {
        let plain = create_test_pricer(11);
        let anti = MonteCarloPricer::new(
            MonteCarloConfig::builder()
                .n_workers(4)
                .seed(11)
                .antithetic(true)
                .build()
                .unwrap(),
        )
        .unwrap();

        let request = atm_request(50_000);
        let a = plain.price(&request).unwrap();
        let b = anti.price(&request).unwrap();
        assert!(b.std_error < a.std_error);
    }

    #[test]
    fn test_discretised_mode_converges() {
        let pricer = MonteCarloPricer::new(
            MonteCarloConfig::builder()
                .n_workers(2)
                .seed(8)
                .path_mode(PathMode::Discretised)
                .build()
                .unwrap(),
        )
        .unwrap();
        let request = PricingRequest {
            params: SimulationParameters {
                steps: 16,
                ..SimulationParameters::default()
            },
            ..atm_request(40_000)
        };
        let result = pricer.price(&request).unwrap();
        let reference = bs_call(100.0, 100.0, 0.05, 0.2, 1.0).unwrap();
        assert!((result.price - reference).abs() < 4.0 * result.std_error);
    }

    #[test]
    fn test_european_pricer_trait() {
        let pricer = create_test_pricer(42);
        let dyn_price = EuropeanPricer::price(&pricer, &atm_request(1_000)).unwrap();
        assert_eq!(dyn_price, pricer.price(&atm_request(1_000)).unwrap());
        assert_eq!(pricer.name(), "monte-carlo");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = MonteCarloConfig::builder().n_workers(0).build();
        assert!(config.is_err());
    }
}
