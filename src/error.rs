//! Errors for the integrator entry point

use crate::Float;

/// Validation errors returned by [`rk4`](crate::rk4).
#[derive(Debug, Clone)]
pub enum Error {
    InvalidStepSize(Float),
    NMaxMustBePositive(usize),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidStepSize(v) => write!(f, "step size h must be positive (got {})", v),
            Error::NMaxMustBePositive(v) => write!(f, "nmax must be positive (got {})", v),
        }
    }
}
