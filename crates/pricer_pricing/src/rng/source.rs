//! The standard normal source contract.

/// A stream of independent N(0, 1) variates.
///
/// Implementations advance only their own internal state; a single source
/// must never be shared between concurrent workers.
pub trait NormalSource {
    /// Draws the next standard normal variate.
    fn next_standard_normal(&mut self) -> f64;
}

impl<S: NormalSource + ?Sized> NormalSource for &mut S {
    #[inline]
    fn next_standard_normal(&mut self) -> f64 {
        (**self).next_standard_normal()
    }
}
