//! Price command implementation
//!
//! Prices the call and the put of one contract with the Monte Carlo engine
//! and compares both against the Black-Scholes closed form.

use std::fmt;
use std::time::Instant;

use clap::Args;
use serde::Serialize;
use tracing::info;

use pricer_core::types::{
    OptionType, PricingError, PricingRequest, PricingResult, SimulationParameters,
};
use pricer_models::analytical::{bs_call, bs_put};
use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer, PathMode};
use pricer_pricing::rng::PricerRng;

use super::{print_json, MarketArgs, OutputFormat};
use crate::config::CliConfig;
use crate::Result;

/// Number of standard normal draws echoed before pricing.
const SAMPLE_NORMALS: usize = 5;

/// Arguments of `mcprice price`
#[derive(Args, Debug, Clone)]
pub struct PriceArgs {
    #[command(flatten)]
    pub market: MarketArgs,

    /// Real-world drift (echoed only; pricing uses the risk-free rate)
    #[arg(long, default_value_t = 0.05, allow_negative_numbers = true)]
    pub mu: f64,

    /// Time steps per path [default: from config, 252]
    #[arg(long)]
    pub steps: Option<usize>,

    /// Number of Monte Carlo paths [default: from config, 1000000]
    #[arg(short, long)]
    pub paths: Option<usize>,

    /// Number of worker streams [default: from config, CPU count]
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Base seed for reproducible runs
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Use antithetic variates
    #[arg(long)]
    pub antithetic: bool,

    /// Simulate every time step instead of jumping to maturity
    #[arg(long)]
    pub discretised: bool,

    /// Also run with a single worker and report the speedup
    #[arg(long)]
    pub compare_single_thread: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Inputs as actually used, after merging arguments with configuration.
#[derive(Debug, Clone, Serialize)]
pub struct ParameterSummary {
    pub spot: f64,
    pub strike: f64,
    pub rate: f64,
    pub mu: f64,
    pub sigma: f64,
    pub maturity: f64,
    pub steps: usize,
    pub paths: usize,
    pub workers: usize,
    pub seed: Option<u64>,
    pub antithetic: bool,
    pub path_mode: &'static str,
}

/// Monte Carlo estimate of one option side next to its closed-form price.
#[derive(Debug, Clone, Serialize)]
pub struct LegReport {
    pub monte_carlo: f64,
    pub std_error: f64,
    pub black_scholes: f64,
    pub relative_error_pct: f64,
}

impl LegReport {
    fn new(estimate: PricingResult, reference: f64) -> Self {
        Self {
            monte_carlo: estimate.price,
            std_error: estimate.std_error,
            black_scholes: reference,
            relative_error_pct: estimate.relative_error(reference) * 100.0,
        }
    }
}

/// Timings for the call and put pricing pass.
///
/// With antithetic sampling every sample simulates a path and its mirror,
/// so `simulated_paths` is twice the requested path count.
#[derive(Debug, Clone, Serialize)]
pub struct Performance {
    pub runtime_ms: f64,
    pub simulated_paths: usize,
    pub paths_per_second: f64,
    pub single_thread_runtime_ms: Option<f64>,
    pub speedup: Option<f64>,
}

/// Everything `mcprice price` reports.
#[derive(Debug, Clone, Serialize)]
pub struct PriceReport {
    pub parameters: ParameterSummary,
    pub sample_normals: Vec<f64>,
    pub call: LegReport,
    pub put: LegReport,
    pub performance: Performance,
}

/// Run the price command
pub fn run(args: &PriceArgs, config: &CliConfig) -> Result<()> {
    let report = build_report(args, config)?;

    match args.format {
        OutputFormat::Table => print!("{}", report),
        OutputFormat::Json => print_json(&report)?,
    }

    info!("Pricing complete");
    Ok(())
}

/// Prices the contract described by `args` and collects the report.
///
/// Arguments left unset fall back to `config`.
pub fn build_report(args: &PriceArgs, config: &CliConfig) -> Result<PriceReport> {
    let market = &args.market;
    let steps = args.steps.unwrap_or(config.pricing.default_steps);
    let paths = args.paths.unwrap_or(config.pricing.default_num_paths);
    let workers = args.workers.unwrap_or(config.pricing.num_threads);
    let seed = args.seed.or(config.pricing.seed);
    let antithetic = args.antithetic || config.pricing.antithetic;
    let path_mode = if args.discretised {
        PathMode::Discretised
    } else {
        PathMode::Terminal
    };

    let params = SimulationParameters {
        spot: market.spot,
        volatility: market.sigma,
        maturity: market.maturity,
        steps,
    };
    let request = PricingRequest::new(params, market.strike, OptionType::Call, paths, market.rate);
    request.validate().map_err(PricingError::from)?;

    info!(
        paths,
        steps,
        workers,
        antithetic,
        ?path_mode,
        "Starting Monte Carlo pricing"
    );

    let mut rng = seed.map_or_else(PricerRng::from_entropy, PricerRng::from_seed);
    let mut sample_normals = vec![0.0; SAMPLE_NORMALS];
    rng.fill_standard_normal(&mut sample_normals);

    let (spot, strike, rate, sigma, maturity) = (
        market.spot,
        market.strike,
        market.rate,
        market.sigma,
        market.maturity,
    );
    let call_reference = bs_call(spot, strike, rate, sigma, maturity)?;
    let put_reference = bs_put(spot, strike, rate, sigma, maturity)?;

    let pricer = MonteCarloPricer::new(
        MonteCarloConfig::builder()
            .n_workers(workers)
            .maybe_seed(seed)
            .path_mode(path_mode)
            .antithetic(antithetic)
            .build()?,
    )?;

    let simulated_paths = if antithetic {
        paths.saturating_mul(2)
    } else {
        paths
    };

    let start = Instant::now();
    let (call, put) = pricer.price_call_and_put(&request)?;
    let runtime_ms = elapsed_ms(start);

    let (single_thread_runtime_ms, speedup) = if args.compare_single_thread {
        let single = MonteCarloPricer::new(
            MonteCarloConfig::builder()
                .n_workers(1)
                .maybe_seed(seed)
                .path_mode(path_mode)
                .antithetic(antithetic)
                .build()?,
        )?;

        let start = Instant::now();
        single.price_call_and_put(&request)?;
        let single_ms = elapsed_ms(start);
        info!(single_ms, runtime_ms, "Single-worker comparison complete");

        (Some(single_ms), Some(single_ms / runtime_ms.max(f64::MIN_POSITIVE)))
    } else {
        (None, None)
    };

    Ok(PriceReport {
        parameters: ParameterSummary {
            spot: market.spot,
            strike: market.strike,
            rate: market.rate,
            mu: args.mu,
            sigma: market.sigma,
            maturity: market.maturity,
            steps,
            paths,
            workers,
            seed,
            antithetic,
            path_mode: path_mode_name(path_mode),
        },
        sample_normals,
        call: LegReport::new(call, call_reference),
        put: LegReport::new(put, put_reference),
        performance: Performance {
            runtime_ms,
            simulated_paths,
            paths_per_second: paths_per_second(simulated_paths, runtime_ms),
            single_thread_runtime_ms,
            speedup,
        },
    })
}

fn paths_per_second(simulated_paths: usize, runtime_ms: f64) -> f64 {
    simulated_paths as f64 / (runtime_ms.max(f64::MIN_POSITIVE) / 1000.0)
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

fn path_mode_name(path_mode: PathMode) -> &'static str {
    match path_mode {
        PathMode::Terminal => "terminal",
        PathMode::Discretised => "discretised",
    }
}

impl fmt::Display for PriceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.parameters;

        writeln!(f, "Monte Carlo European Option Pricer")?;
        writeln!(f, "==================================")?;
        writeln!(f)?;
        writeln!(f, "Parameters:")?;
        writeln!(f, "  S0 = {}, K = {}, r = {}, mu = {}", p.spot, p.strike, p.rate, p.mu)?;
        writeln!(f, "  sigma = {}, T = {}, steps = {}", p.sigma, p.maturity, p.steps)?;
        write!(f, "  paths = {}, workers = {}, ", p.paths, p.workers)?;
        match p.seed {
            Some(seed) => writeln!(f, "seed = {}", seed)?,
            None => writeln!(f, "seed = random")?,
        }
        writeln!(f, "  path mode = {}, antithetic = {}", p.path_mode, p.antithetic)?;
        writeln!(f)?;

        writeln!(f, "Random Normal Samples:")?;
        for (i, z) in self.sample_normals.iter().enumerate() {
            writeln!(f, "  Z[{}] = {:.6}", i, z)?;
        }
        writeln!(f)?;

        for (label, leg) in [("Call", &self.call), ("Put", &self.put)] {
            writeln!(f, "European {} Option:", label)?;
            writeln!(f, "  Monte Carlo:    ${:.4} ± {:.4}", leg.monte_carlo, leg.std_error)?;
            writeln!(f, "  Black-Scholes:  ${:.4}", leg.black_scholes)?;
            writeln!(f, "  Relative error: {:.4}%", leg.relative_error_pct)?;
            writeln!(f)?;
        }

        let perf = &self.performance;
        writeln!(f, "Performance:")?;
        writeln!(f, "  Runtime:        {:.2} ms", perf.runtime_ms)?;
        writeln!(f, "  Paths simulated: {}", perf.simulated_paths)?;
        writeln!(f, "  Paths/second:   {:.0}", perf.paths_per_second)?;
        if let (Some(single_ms), Some(speedup)) = (perf.single_thread_runtime_ms, perf.speedup) {
            writeln!(f, "  Single worker:  {:.2} ms", single_ms)?;
            writeln!(f, "  Speedup:        {:.2}x", speedup)?;
        }
        Ok(())
    }
}
