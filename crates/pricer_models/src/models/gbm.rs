//! Geometric Brownian Motion (GBM) dynamics.
//!
//! Under the risk-neutral measure the asset follows:
//! ```text
//! dS = r * S * dt + sigma * S * dW
//! ```
//!
//! ## Log-space formulation
//!
//! Each step uses the exact solution, so there is no discretisation bias:
//! ```text
//! S(t+dt) = S(t) * exp((r - 0.5*sigma^2)*dt + sigma*sqrt(dt)*Z)
//! ```
//! with Z ~ N(0, 1). Applying it once with dt = T gives the terminal price.

/// Precomputed drift and diffusion coefficients for a fixed step size.
///
/// Holds no randomness; callers supply the standard normal draws.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmDynamics {
    drift: f64,
    diffusion: f64,
}

impl GbmDynamics {
    /// Creates dynamics for risk-free rate `rate`, volatility `volatility`
    /// and step size `dt`.
    ///
    /// Inputs are assumed to be validated by the caller.
    #[inline]
    pub fn new(rate: f64, volatility: f64, dt: f64) -> Self {
        Self {
            drift: (rate - 0.5 * volatility * volatility) * dt,
            diffusion: volatility * dt.sqrt(),
        }
    }

    /// Log-space drift `(r - σ²/2)·dt`.
    #[inline]
    pub fn drift(&self) -> f64 {
        self.drift
    }

    /// Log-space diffusion `σ·√dt`.
    #[inline]
    pub fn diffusion(&self) -> f64 {
        self.diffusion
    }

    /// Advances `spot` by one step using the normal draw `z`.
    #[inline]
    pub fn step(&self, spot: f64, z: f64) -> f64 {
        spot * (self.drift + self.diffusion * z).exp()
    }

    /// Maps `spot0` straight to maturity using one draw.
    ///
    /// Identical to [`step`](Self::step); named separately so call sites
    /// read correctly when `dt` is the whole maturity.
    #[inline]
    pub fn terminal(&self, spot0: f64, z: f64) -> f64 {
        self.step(spot0, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_coefficients() {
        let dynamics = GbmDynamics::new(0.05, 0.2, 1.0);
        assert_relative_eq!(dynamics.drift(), 0.03, epsilon = 1e-15);
        assert_relative_eq!(dynamics.diffusion(), 0.2, epsilon = 1e-15);
    }

    #[test]
    fn test_zero_draw_applies_drift_only() {
        let dynamics = GbmDynamics::new(0.05, 0.2, 0.5);
        let expected = 100.0 * (0.03_f64 * 0.5).exp();
        assert_relative_eq!(dynamics.step(100.0, 0.0), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_volatility_is_deterministic() {
        let dynamics = GbmDynamics::new(0.05, 0.0, 1.0);
        let a = dynamics.terminal(100.0, -3.0);
        let b = dynamics.terminal(100.0, 3.0);
        assert_eq!(a, b);
        assert_relative_eq!(a, 100.0 * 0.05_f64.exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_steps_compose_to_terminal() {
        // Four quarter steps with the same draw equal one step with z*2 (√4)
        let quarter = GbmDynamics::new(0.03, 0.25, 0.25);
        let full = GbmDynamics::new(0.03, 0.25, 1.0);
        let mut s = 100.0;
        for _ in 0..4 {
            s = quarter.step(s, 0.5);
        }
        assert_relative_eq!(s, full.terminal(100.0, 1.0), epsilon = 1e-10);
    }

    #[test]
    fn test_price_stays_positive() {
        let dynamics = GbmDynamics::new(0.0, 1.5, 1.0);
        assert!(dynamics.terminal(1.0, -8.0) > 0.0);
    }
}
