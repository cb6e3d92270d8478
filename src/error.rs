//! Errors for the quadrature routines.

/// Errors returned by [`AdaptiveTrapezoid::integrate`](crate::AdaptiveTrapezoid::integrate).
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The iteration cap was exhausted before two consecutive estimates
    /// agreed within the configured accuracy. Carries the cap that was hit;
    /// no partial estimate is returned.
    MaxIterationsExceeded(usize),
    AccuracyNotPositive(f64),
    MaxIterationsNotPositive(usize),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MaxIterationsExceeded(n) => {
                write!(f, "no convergence within {} iterations", n)
            }
            Error::AccuracyNotPositive(v) => {
                write!(f, "accuracy must be positive (got {})", v)
            }
            Error::MaxIterationsNotPositive(n) => {
                write!(f, "max_iterations must be at least 1 (got {})", n)
            }
        }
    }
}

impl std::error::Error for Error {}
