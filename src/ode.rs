//! User-supplied ODE right-hand side.

use crate::Float;

/// User-supplied scalar ODE right-hand side.
///
/// Implement this trait for your problem to provide dy/dt = f(t, y). The
/// integrator repeatedly calls `ode` with the current abscissa `t` and state
/// `y` and expects the derivative value back. `f` is treated as pure: it is
/// never handed mutable state and may be called with the same arguments more
/// than once.
///
/// Any closure or function of shape `Fn(Float, Float) -> Float` implements
/// the trait automatically, so a plain function value works directly.
///
/// # Example
///
/// ```ignore
/// struct Logistic { r: f64 }
/// impl ODE for Logistic {
///     fn ode(&self, _t: f64, y: f64) -> f64 {
///         self.r * y * (1.0 - y)
///     }
/// }
/// ```
pub trait ODE {
    fn ode(&self, t: Float, y: Float) -> Float;
}

impl<F> ODE for F
where
    F: Fn(Float, Float) -> Float,
{
    fn ode(&self, t: Float, y: Float) -> Float {
        self(t, y)
    }
}
