//! Convenient prelude: import the most commonly used traits and types.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use quadrature::prelude::*;
//! ```
//!
//! Re-exports included:
//! - Integrators: `Simpson`, `AdaptiveTrapezoid`, `Method`.
//! - Function traits: `Integrand`, `Integrand32`, `Differentiable`,
//!   `Differentiable32`.
//! - Errors: `Error`.

pub use crate::{
    AdaptiveTrapezoid, Differentiable, Differentiable32, Error, Integrand, Integrand32, Method,
    Simpson,
};
