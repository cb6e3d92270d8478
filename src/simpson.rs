//! Fixed-step composite Simpson's rule.

use crate::integrand::{Integrand, Integrand32};

/// Fixed-step composite Simpson's rule integrator.
///
/// The interval is split into [`step_count`](Self::step_count) equal
/// sub-intervals and a quadratic is fitted across each consecutive pair,
/// making the rule exact for polynomials up to degree 3. There is no
/// iteration and no convergence check; the cost is exactly
/// `step_count / 2 * 3` integrand evaluations.
///
/// `step_count` must be even and positive so the sub-intervals pair up.
/// This is a caller precondition: an odd or zero count is not rejected and
/// yields an implementation-defined result (with an odd count the trailing
/// sub-interval is simply never sampled).
#[derive(Clone, Debug)]
pub struct Simpson {
    step_count: usize,
}

impl Simpson {
    /// Sub-interval count used by [`Simpson::default`].
    pub const DEFAULT_STEP_COUNT: usize = 100;

    pub fn new(step_count: usize) -> Self {
        Self { step_count }
    }

    /// Number of sub-intervals the interval is divided into.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Approximate the integral of `f` over `[a, b]` in double precision.
    ///
    /// Reversed bounds flip the sign: `integrate(f, a, b)` is exactly
    /// `-integrate(f, b, a)`. Always returns a value (non-finite if `f`
    /// produces non-finite values); a zero-width interval yields `0.0`.
    pub fn integrate<F: Integrand>(&self, f: &F, a: f64, b: f64) -> f64 {
        if a > b {
            return -self.integrate(f, b, a);
        }

        let h = (b - a) / self.step_count as f64;
        let mut sum = 0.0;
        let mut i = 0;
        // One Simpson panel per pair of sub-intervals.
        while i + 1 < self.step_count {
            let x = a + i as f64 * h;
            sum += (f.eval(x) + 4.0 * f.eval(x + h) + f.eval(x + 2.0 * h)) * h / 3.0;
            i += 2;
        }
        sum
    }

    /// Single-precision variant of [`integrate`](Self::integrate); identical
    /// structure, only the arithmetic width differs.
    pub fn integrate_f32<F: Integrand32>(&self, f: &F, a: f32, b: f32) -> f32 {
        if a > b {
            return -self.integrate_f32(f, b, a);
        }

        let h = (b - a) / self.step_count as f32;
        let mut sum = 0.0;
        let mut i = 0;
        while i + 1 < self.step_count {
            let x = a + i as f32 * h;
            sum += (f.eval(x) + 4.0 * f.eval(x + h) + f.eval(x + 2.0 * h)) * h / 3.0;
            i += 2;
        }
        sum
    }
}

impl Default for Simpson {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STEP_COUNT)
    }
}
