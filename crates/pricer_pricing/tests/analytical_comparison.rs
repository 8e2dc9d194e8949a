//! Analytical comparison tests for Monte Carlo pricing.
//!
//! These tests verify that Monte Carlo estimates converge to the
//! Black-Scholes closed form and that their standard errors behave as
//! sqrt(variance / n).
//!
//! # Test Categories
//!
//! 1. **Accuracy**: ATM call and put within 1% of Black-Scholes at 10M paths
//! 2. **Standard error scaling**: 1/√n across decades of path counts
//! 3. **Degenerate inputs**: σ = 0 gives the discounted intrinsic value exactly
//! 4. **Variants**: antithetic and discretised paths agree with the closed form

use approx::assert_relative_eq;
use pricer_core::types::{OptionType, PricingRequest, PricingResult, SimulationParameters};
use pricer_models::analytical::{bs_call, bs_put};
use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer, PathMode};

/// Standard test parameters: spot, strike, rate, vol, maturity.
fn standard_params() -> (f64, f64, f64, f64, f64) {
    (100.0, 100.0, 0.05, 0.2, 1.0)
}

fn standard_request(n_paths: usize) -> PricingRequest {
    let (spot, strike, rate, vol, maturity) = standard_params();
    PricingRequest::new(
        SimulationParameters::new(spot, vol, maturity, 252).unwrap(),
        strike,
        OptionType::Call,
        n_paths,
        rate,
    )
}

fn seeded_pricer(seed: u64) -> MonteCarloPricer {
    MonteCarloPricer::new(MonteCarloConfig::builder().seed(seed).build().unwrap()).unwrap()
}

fn implied_variance(result: &PricingResult, n_paths: usize) -> f64 {
    result.std_error * result.std_error * n_paths as f64
}

// ============================================================================
// Accuracy
// ============================================================================

#[test]
fn test_ten_million_paths_within_one_percent() {
    let (spot, strike, rate, vol, maturity) = standard_params();
    let bs_c = bs_call(spot, strike, rate, vol, maturity).unwrap();
    let bs_p = bs_put(spot, strike, rate, vol, maturity).unwrap();
    assert_relative_eq!(bs_c, 10.4506, epsilon = 1e-4);
    assert_relative_eq!(bs_p, 5.5735, epsilon = 1e-4);

    let pricer = seeded_pricer(20_240_601);
    let (call, put) = pricer
        .price_call_and_put(&standard_request(10_000_000))
        .unwrap();

    assert!(
        call.relative_error(bs_c) < 0.01,
        "call: MC {} vs BS {}",
        call.price,
        bs_c
    );
    assert!(
        put.relative_error(bs_p) < 0.01,
        "put: MC {} vs BS {}",
        put.price,
        bs_p
    );
}

#[test]
fn test_unseeded_run_converges() {
    let pricer = MonteCarloPricer::new(MonteCarloConfig::default()).unwrap();
    let result = pricer.price(&standard_request(500_000)).unwrap();
    let reference = bs_call(100.0, 100.0, 0.05, 0.2, 1.0).unwrap();

    // 6 standard errors: essentially never fails for a correct engine
    assert!((result.price - reference).abs() < 6.0 * result.std_error);
}

#[test]
fn test_off_the_money_strikes() {
    let pricer = seeded_pricer(77);
    for strike in [70.0, 90.0, 110.0, 140.0] {
        let request = PricingRequest {
            strike,
            ..standard_request(400_000)
        };
        let (call, put) = pricer.price_call_and_put(&request).unwrap();
        let bs_c = bs_call(100.0, strike, 0.05, 0.2, 1.0).unwrap();
        let bs_p = bs_put(100.0, strike, 0.05, 0.2, 1.0).unwrap();

        assert!(
            (call.price - bs_c).abs() < 5.0 * call.std_error,
            "K = {}: call {} vs {}",
            strike,
            call.price,
            bs_c
        );
        assert!(
            (put.price - bs_p).abs() < 5.0 * put.std_error,
            "K = {}: put {} vs {}",
            strike,
            put.price,
            bs_p
        );
    }
}

// ============================================================================
// Standard Error Scaling
// ============================================================================

#[test]
fn test_std_error_scales_with_inverse_sqrt_paths() {
    let pricer = seeded_pricer(314);
    let path_counts = [10_000, 100_000, 1_000_000];
    let results: Vec<PricingResult> = path_counts
        .iter()
        .map(|&n| pricer.price(&standard_request(n)).unwrap())
        .collect();

    for i in 0..path_counts.len() - 1 {
        let observed = results[i + 1].std_error / results[i].std_error;
        let expected = (path_counts[i] as f64 / path_counts[i + 1] as f64).sqrt();
        assert!(
            (observed / expected - 1.0).abs() < 0.10,
            "se ratio {} vs expected {}",
            observed,
            expected
        );
    }
}

#[test]
fn test_implied_variance_is_stable() {
    let pricer = seeded_pricer(2_718);
    let path_counts = [10_000, 100_000, 1_000_000];
    let variances: Vec<f64> = path_counts
        .iter()
        .map(|&n| implied_variance(&pricer.price(&standard_request(n)).unwrap(), n))
        .collect();

    let reference = variances[path_counts.len() - 1];
    for v in &variances {
        assert!(
            (v / reference - 1.0).abs() < 0.20,
            "implied variance {} vs {}",
            v,
            reference
        );
    }
}

// ============================================================================
// Degenerate Inputs
// ============================================================================

#[test]
fn test_zero_volatility_matches_discounted_intrinsic() {
    let pricer = seeded_pricer(1);
    for strike in [80.0, 100.0, 120.0] {
        let request = PricingRequest {
            params: SimulationParameters::new(100.0, 0.0, 1.0, 252).unwrap(),
            strike,
            ..standard_request(50_000)
        };
        let (call, put) = pricer.price_call_and_put(&request).unwrap();

        assert_eq!(call.std_error, 0.0);
        assert_eq!(put.std_error, 0.0);
        assert_relative_eq!(
            call.price,
            bs_call(100.0, strike, 0.05, 0.0, 1.0).unwrap(),
            epsilon = 1e-10
        );
        assert_relative_eq!(
            put.price,
            bs_put(100.0, strike, 0.05, 0.0, 1.0).unwrap(),
            epsilon = 1e-10
        );
    }
}

#[test]
fn test_zero_rate() {
    let pricer = seeded_pricer(10);
    let request = PricingRequest {
        rate: 0.0,
        ..standard_request(300_000)
    };
    let result = pricer.price(&request).unwrap();
    let reference = bs_call(100.0, 100.0, 0.0, 0.2, 1.0).unwrap();
    assert!((result.price - reference).abs() < 5.0 * result.std_error);
}

// ============================================================================
// Variants
// ============================================================================

#[test]
fn test_antithetic_matches_black_scholes() {
    let pricer = MonteCarloPricer::new(
        MonteCarloConfig::builder()
            .seed(4)
            .antithetic(true)
            .build()
            .unwrap(),
    )
    .unwrap();
    let (call, put) = pricer.price_call_and_put(&standard_request(300_000)).unwrap();

    let call_reference = bs_call(100.0, 100.0, 0.05, 0.2, 1.0).unwrap();
    let put_reference = bs_put(100.0, 100.0, 0.05, 0.2, 1.0).unwrap();
    assert!((call.price - call_reference).abs() < 5.0 * call.std_error);
    assert!((put.price - put_reference).abs() < 5.0 * put.std_error);
}

#[test]
fn test_discretised_matches_terminal_in_distribution() {
    let discretised = MonteCarloPricer::new(
        MonteCarloConfig::builder()
            .seed(6)
            .path_mode(PathMode::Discretised)
            .build()
            .unwrap(),
    )
    .unwrap();
    let request = PricingRequest {
        params: SimulationParameters::new(100.0, 0.2, 1.0, 50).unwrap(),
        ..standard_request(100_000)
    };
    let result = discretised.price(&request).unwrap();
    let reference = bs_call(100.0, 100.0, 0.05, 0.2, 1.0).unwrap();

    assert!((result.price - reference).abs() < 5.0 * result.std_error);
}
