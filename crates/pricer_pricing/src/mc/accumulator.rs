//! Running moments of discounted payoffs.
//!
//! Each worker owns one [`AccumulatedStatistics`] and fills it without any
//! synchronisation; the engine merges the finished accumulators once.
//!
//! # Shifted sums
//!
//! Samples are accumulated relative to a fixed `shift` (the engine uses the
//! discounted payoff of the zero-draw path). The plug-in variance
//! `E[d²] - E[d]²` of the shifted values `d = x - shift` equals that of the
//! raw samples but does not lose precision to cancellation when the payoff
//! is large compared with its spread. When every sample equals the shift,
//! as with σ = 0, the sums are exactly zero and so is the standard error.

use pricer_core::types::PricingResult;

/// Sums of shifted samples and squared shifted samples.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::AccumulatedStatistics;
///
/// let mut left = AccumulatedStatistics::default();
/// left.add(1.0);
/// left.add(3.0);
/// let mut right = AccumulatedStatistics::default();
/// right.add(5.0);
///
/// let total = left.merge(&right);
/// assert_eq!(total.count(), 3);
/// assert_eq!(total.mean(), 3.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AccumulatedStatistics {
    shift: f64,
    sum: f64,
    sum_sq: f64,
    count: u64,
}

impl AccumulatedStatistics {
    /// Creates an empty accumulator centred on `shift`.
    #[inline]
    pub fn new(shift: f64) -> Self {
        Self {
            shift,
            ..Self::default()
        }
    }

    /// Adds one sample.
    #[inline]
    pub fn add(&mut self, sample: f64) {
        let d = sample - self.shift;
        self.sum += d;
        self.sum_sq += d * d;
        self.count += 1;
    }

    /// Combines two accumulators.
    ///
    /// Summation is commutative, so the result does not depend on argument
    /// order. Accumulators with different shifts are first re-centred onto
    /// `self`'s shift.
    pub fn merge(&self, other: &Self) -> Self {
        let other = other.recentred(self.shift);
        Self {
            shift: self.shift,
            sum: self.sum + other.sum,
            sum_sq: self.sum_sq + other.sum_sq,
            count: self.count + other.count,
        }
    }

    /// Folds any number of accumulators left to right.
    ///
    /// Returns an empty accumulator for an empty input.
    pub fn combine<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let mut iter = parts.into_iter();
        match iter.next() {
            Some(first) => iter.fold(first, |acc, part| acc.merge(&part)),
            None => Self::default(),
        }
    }

    /// Re-expresses the sums relative to `shift`.
    fn recentred(&self, shift: f64) -> Self {
        if shift == self.shift {
            return *self;
        }
        // d' = d + c with c = old_shift - new_shift
        let c = self.shift - shift;
        let n = self.count as f64;
        Self {
            shift,
            sum: self.sum + n * c,
            sum_sq: self.sum_sq + 2.0 * c * self.sum + n * c * c,
            count: self.count,
        }
    }

    /// Number of samples.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Sample mean; `NaN` when empty.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.shift + self.sum / self.count as f64
    }

    /// Plug-in (population) variance `E[x²] - E[x]²`, clamped at zero.
    ///
    /// Divides by `n` rather than `n - 1`, so it is biased low by a factor
    /// `(n - 1) / n`; negligible at Monte Carlo sample sizes.
    #[inline]
    pub fn variance(&self) -> f64 {
        let n = self.count as f64;
        let mean_d = self.sum / n;
        (self.sum_sq / n - mean_d * mean_d).max(0.0)
    }

    /// Standard error of the mean, `sqrt(variance / n)`.
    #[inline]
    pub fn std_error(&self) -> f64 {
        (self.variance() / self.count as f64).sqrt()
    }

    /// Converts the totals into a price estimate.
    #[inline]
    pub fn finalise(&self) -> PricingResult {
        PricingResult::new(self.mean(), self.std_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn filled(shift: f64, samples: &[f64]) -> AccumulatedStatistics {
        let mut acc = AccumulatedStatistics::new(shift);
        for &x in samples {
            acc.add(x);
        }
        acc
    }

    #[test]
    fn test_moments() {
        let acc = filled(0.0, &[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_eq!(acc.count(), 8);
        assert_relative_eq!(acc.mean(), 5.0, epsilon = 1e-15);
        assert_relative_eq!(acc.variance(), 4.0, epsilon = 1e-12);
        assert_relative_eq!(acc.std_error(), (4.0_f64 / 8.0).sqrt(), epsilon = 1e-12);

        let result = acc.finalise();
        assert_eq!(result.price, acc.mean());
        assert_eq!(result.std_error, acc.std_error());
    }

    #[test]
    fn test_shift_does_not_change_moments() {
        let samples = [10.1, 12.7, 9.3, 11.0, 15.5];
        let raw = filled(0.0, &samples);
        let shifted = filled(11.0, &samples);
        assert_relative_eq!(raw.mean(), shifted.mean(), epsilon = 1e-12);
        assert_relative_eq!(raw.variance(), shifted.variance(), epsilon = 1e-10);
    }

    #[test]
    fn test_constant_samples_at_shift_give_exact_zero() {
        let x = 4.877_057_549_928_6;
        let acc = filled(x, &vec![x; 100_000]);
        assert_eq!(acc.mean(), x);
        assert_eq!(acc.variance(), 0.0);
        assert_eq!(acc.std_error(), 0.0);
    }

    #[test]
    fn test_variance_never_negative() {
        let acc = filled(0.0, &[1e8 + 0.1; 1_000]);
        assert!(acc.variance() >= 0.0);
    }

    #[test]
    fn test_merge_with_different_shifts() {
        let a = filled(1.0, &[1.0, 2.0, 3.0]);
        let b = filled(10.0, &[4.0, 5.0]);
        let merged = a.merge(&b);
        let direct = filled(1.0, &[1.0, 2.0, 3.0, 4.0, 5.0]);

        assert_eq!(merged.count(), 5);
        assert_relative_eq!(merged.mean(), direct.mean(), epsilon = 1e-12);
        assert_relative_eq!(merged.variance(), direct.variance(), epsilon = 1e-12);
    }

    #[test]
    fn test_combine_empty_and_single() {
        assert_eq!(AccumulatedStatistics::combine(Vec::new()).count(), 0);
        let one = filled(0.0, &[3.0]);
        assert_eq!(AccumulatedStatistics::combine(vec![one]), one);
    }

    proptest! {
        #[test]
        fn prop_merge_matches_single_pass(
            samples in prop::collection::vec(0.0f64..100.0, 2..200),
            split in 0usize..200,
        ) {
            let split = split % samples.len();
            let (left, right) = samples.split_at(split);
            let merged = filled(0.0, left).merge(&filled(0.0, right));
            let single = filled(0.0, &samples);

            prop_assert_eq!(merged.count(), single.count());
            prop_assert!((merged.mean() - single.mean()).abs() < 1e-9);
            prop_assert!((merged.variance() - single.variance()).abs() < 1e-7);
        }

        #[test]
        fn prop_combine_permutation_invariant(
            parts in prop::collection::vec(prop::collection::vec(0.0f64..50.0, 1..50), 1..12),
            rotation in 0usize..12,
        ) {
            let accs: Vec<AccumulatedStatistics> =
                parts.iter().map(|p| filled(2.5, p)).collect();
            let forward = AccumulatedStatistics::combine(accs.clone());

            let mut permuted = accs.clone();
            permuted.reverse();
            let rot = rotation % permuted.len();
            permuted.rotate_left(rot);
            let shuffled = AccumulatedStatistics::combine(permuted);

            prop_assert_eq!(forward.count(), shuffled.count());
            prop_assert!(
                (forward.mean() - shuffled.mean()).abs() <= 1e-12 * forward.mean().abs().max(1.0)
            );
            prop_assert!(
                (forward.std_error() - shuffled.std_error()).abs()
                    <= 1e-9 + 1e-10 * forward.std_error()
            );
        }
    }
}
