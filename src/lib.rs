//! A library of numerical quadrature methods for approximating definite
//! integrals of single-variable real-valued functions over a closed interval.
//!
//! Two integrators are provided:
//!
//! - [`Simpson`]: fixed-step composite Simpson's rule. Evaluates the
//!   integrand at a fixed number of sample points and combines them with
//!   Simpson weights. No iteration, no convergence check.
//! - [`AdaptiveTrapezoid`]: adaptive trapezoid refinement. Starts from the
//!   crudest two-point trapezoid estimate and repeatedly refines it with new
//!   sample points until consecutive estimates agree within a configured
//!   accuracy, or fails once an iteration cap is exhausted.
//!
//! Both consume a caller-supplied unary function through the [`Integrand`]
//! trait (or [`Integrand32`] for single precision), which is implemented for
//! plain closures.

mod error;
mod integrand;
mod simpson;
mod trapezoid;

pub mod prelude;

pub use error::Error;
pub use integrand::{Differentiable, Differentiable32, Integrand, Integrand32};
pub use simpson::Simpson;
pub use trapezoid::{AdaptiveTrapezoid, Method};
