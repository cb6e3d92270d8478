//! Adaptive trapezoid-rule integrator with two refinement strategies.

use bon::Builder;

use crate::{error::Error, integrand::Integrand};

/// Refinement strategy used by [`AdaptiveTrapezoid`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    /// Halve the sub-intervals each iteration by sampling their midpoints
    /// and averaging with the previous estimate.
    #[default]
    Trapezoid,
    /// Split each sub-interval in three, sampling a pair of interior points
    /// per sub-interval; the previous estimate keeps a one-third weight.
    MidPoint,
}

/// Adaptive trapezoid-rule integrator.
///
/// Starts from the two-point trapezoid estimate and refines it iteratively,
/// folding the previous estimate into the next so earlier samples are never
/// re-evaluated. Iteration stops at the first pair of consecutive estimates
/// that differ by at most [`accuracy`](Self::accuracy); if
/// [`max_iterations`](Self::max_iterations) refinements pass without that
/// happening, [`integrate`](Self::integrate) fails.
///
/// The configuration holds no per-call state, so one instance can be reused
/// across any number of integrations, and the fields may be adjusted freely
/// between calls.
#[derive(Builder, Clone, Debug)]
pub struct AdaptiveTrapezoid {
    /// Convergence threshold on the difference between consecutive
    /// estimates. Must be positive.
    #[builder(default = 1e-4)]
    pub accuracy: f64,
    /// Iteration cap. Must be at least 1.
    #[builder(default = usize::MAX)]
    pub max_iterations: usize,
    /// Refinement strategy.
    #[builder(default)]
    pub method: Method,
}

impl AdaptiveTrapezoid {
    pub fn new(accuracy: f64, max_iterations: usize, method: Method) -> Self {
        Self {
            accuracy,
            max_iterations,
            method,
        }
    }

    /// Approximate the integral of `f` over `[a, b]` to within
    /// [`accuracy`](Self::accuracy).
    ///
    /// A zero-width interval returns `0.0` without evaluating `f`, and
    /// reversed bounds flip the sign exactly, as in
    /// [`Simpson::integrate`](crate::Simpson::integrate).
    ///
    /// # Errors
    ///
    /// - [`Error::MaxIterationsExceeded`] if the cap is exhausted before two
    ///   consecutive estimates agree within `accuracy`. No partial estimate
    ///   is returned; relax `accuracy` or raise the cap and retry.
    /// - [`Error::AccuracyNotPositive`] / [`Error::MaxIterationsNotPositive`]
    ///   if the configuration is malformed.
    pub fn integrate<F: Integrand>(&self, f: &F, a: f64, b: f64) -> Result<f64, Error> {
        if self.accuracy <= 0.0 {
            return Err(Error::AccuracyNotPositive(self.accuracy));
        }
        if self.max_iterations == 0 {
            return Err(Error::MaxIterationsNotPositive(self.max_iterations));
        }
        if a == b {
            return Ok(0.0);
        }
        if a > b {
            return Ok(-self.integrate(f, b, a)?);
        }

        // Crudest estimate: a single trapezoid spanning the whole interval.
        let mut prev = 0.5 * (b - a) * (f.eval(a) + f.eval(b));
        let mut n: usize = 1;

        for _ in 0..self.max_iterations {
            let next = match self.method {
                Method::Trapezoid => refine_trapezoid(f, a, b, n, prev),
                Method::MidPoint => refine_midpoint(f, a, b, n, prev),
            };
            if (next - prev).abs() <= self.accuracy {
                return Ok(next);
            }
            prev = next;
            n *= match self.method {
                Method::Trapezoid => 2,
                Method::MidPoint => 3,
            };
        }

        Err(Error::MaxIterationsExceeded(self.max_iterations))
    }
}

impl Default for AdaptiveTrapezoid {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// One trapezoid refinement: sample the midpoint of each of the `n` current
/// sub-intervals and average the resulting estimate with the previous one.
fn refine_trapezoid<F: Integrand>(f: &F, a: f64, b: f64, n: usize, prev: f64) -> f64 {
    let step = (b - a) / n as f64;
    let mut x = a + 0.5 * step;
    let mut sum = 0.0;
    for _ in 0..n {
        sum += f.eval(x);
        x += step;
    }
    0.5 * (prev + step * sum)
}

/// One third-rule refinement: sample a pair of interior points per
/// sub-interval, at one sixth and five sixths of its width, and keep a
/// one-third weight on the previous estimate.
fn refine_midpoint<F: Integrand>(f: &F, a: f64, b: f64, n: usize, prev: f64) -> f64 {
    let step = (b - a) / n as f64;
    // The pair spacing must stay in floating point: 2 / 3 in integer
    // arithmetic is 0, which would collapse the pair onto one point.
    let pair_offset = step * (2.0 / 3.0);
    let mut x = a + step / 6.0;
    let mut sum = 0.0;
    for _ in 0..n {
        sum += f.eval(x) + f.eval(x + pair_offset);
        x += step;
    }
    (prev + step * sum) / 3.0
}
