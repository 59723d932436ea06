//! A fixed-step classical Runge-Kutta 4 (RK4) solver for scalar initial value
//! problems dy/dt = f(t, y), y(t0) = y0.
//!
//! The entry point is [`rk4`]: supply the right-hand side (any closure
//! `Fn(Float, Float) -> Float` or a type implementing [`ODE`]), the span, the
//! initial value, and a step size, and get back the full sampled trajectory.
//!
//! ```ignore
//! use rk4ivp::prelude::*;
//!
//! let sol = rk4(&|t: f64, y: f64| t - y, 0.0, 2.0, 1.0, 0.2, Args::default()).unwrap();
//! for (t, y) in sol.iter() {
//!     println!("t = {:.2}, y = {:.4}", t, y);
//! }
//! ```

mod args;
mod error;
mod interpolate;
mod ode;
mod rk4;
mod solout;
mod solution;
mod status;

pub mod prelude;

pub use args::Args;
pub use error::Error;
pub use interpolate::Interpolate;
pub use ode::ODE;
pub use rk4::rk4;
pub use solout::{ControlFlag, DummySolOut, SolOut};
pub use solution::{Solution, SolutionIter};
pub use status::Status;

// Prevent selecting two incompatible float precision features at once.
#[cfg(all(feature = "f32", feature = "f64"))]
compile_error!(
    "features 'f32' and 'f64' cannot both be enabled; pick exactly one Float precision feature"
);

/// Change this to f64, f32 as desired.
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(feature = "f64")]
pub type Float = f64;
