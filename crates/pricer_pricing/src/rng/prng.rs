//! Per-worker standard normal stream.
//!
//! A [`PricerRng`] is owned by exactly one Monte Carlo worker. It is built
//! from the run's base seed and the worker index through [`stream_seed`],
//! and it remembers the seed it was started from so that a run can be
//! logged and replayed.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

use super::source::NormalSource;
use super::stream::{entropy_seed, stream_seed};

/// Seeded N(0, 1) stream backed by `StdRng`.
///
/// Variates come from `rand_distr::StandardNormal` (ziggurat), which
/// consumes fresh bits on every call, so nothing is cached between draws.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::{stream_seed, PricerRng};
///
/// let mut worker = PricerRng::for_worker(2024, 3);
/// assert_eq!(worker.seed(), stream_seed(2024, 3));
///
/// let mut replay = PricerRng::from_seed(worker.seed());
/// assert_eq!(worker.standard_normal(), replay.standard_normal());
/// ```
#[derive(Debug, Clone)]
pub struct PricerRng {
    inner: StdRng,
    seed: u64,
}

impl PricerRng {
    /// Stream for `worker` within a run started from `base_seed`.
    #[inline]
    pub fn for_worker(base_seed: u64, worker: usize) -> Self {
        Self::from_seed(stream_seed(base_seed, worker))
    }

    /// Stream started directly from `seed`.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Stream started from a fresh OS-entropy seed.
    pub fn from_entropy() -> Self {
        Self::from_seed(entropy_seed())
    }

    /// Seed this stream was started from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Next N(0, 1) variate.
    #[inline]
    pub fn standard_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Overwrites `out` with consecutive variates; same values, in the same
    /// order, as calling [`standard_normal`](Self::standard_normal) once per
    /// slot.
    pub fn fill_standard_normal(&mut self, out: &mut [f64]) {
        out.iter_mut().for_each(|z| *z = self.standard_normal());
    }
}

impl NormalSource for PricerRng {
    #[inline]
    fn next_standard_normal(&mut self) -> f64 {
        self.standard_normal()
    }
}
