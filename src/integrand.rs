//! User-supplied integrand function.

/// User-supplied integrand in double precision.
///
/// The integrators call `eval` once per sample point and use nothing but the
/// returned value. Any `Fn(f64) -> f64` closure implements this trait, so
/// most callers never implement it by hand:
///
/// ```
/// use quadrature::Simpson;
///
/// let simpson = Simpson::default();
/// let area = simpson.integrate(&|x: f64| x * x, 0.0, 1.0);
/// assert!((area - 1.0 / 3.0).abs() < 1e-9);
/// ```
///
/// Implement the trait directly when the integrand carries parameters:
///
/// ```ignore
/// struct Gaussian { sigma: f64 }
/// impl Integrand for Gaussian {
///     fn eval(&self, x: f64) -> f64 {
///         (-0.5 * (x / self.sigma).powi(2)).exp()
///     }
/// }
/// ```
pub trait Integrand {
    fn eval(&self, x: f64) -> f64;
}

impl<F: Fn(f64) -> f64> Integrand for F {
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}

/// User-supplied integrand in single precision.
pub trait Integrand32 {
    fn eval(&self, x: f32) -> f32;
}

impl<F: Fn(f32) -> f32> Integrand32 for F {
    fn eval(&self, x: f32) -> f32 {
        self(x)
    }
}

/// Point-wise derivative of a double-precision function.
///
/// Declared for callers whose functions carry an analytic derivative; this
/// crate provides no numerical differentiation and none of its integrators
/// require the trait.
pub trait Differentiable: Integrand {
    fn derivative(&self, x: f64) -> f64;
}

/// Point-wise derivative of a single-precision function.
pub trait Differentiable32: Integrand32 {
    fn derivative(&self, x: f32) -> f32;
}
