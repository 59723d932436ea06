//! Convenient prelude: import the most commonly used traits, types, and functions.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use rk4ivp::prelude::*;
//! ```

pub use crate::{
    Args, ControlFlag, DummySolOut, Error, Float, Interpolate, ODE, SolOut, Solution, Status, rk4,
};
