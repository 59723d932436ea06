//! User defined callback hook executed after each appended sample.

use crate::{Float, interpolate::Interpolate};

/// Return flags for [`SolOut`].
///
/// - `Continue`: proceed with integration as normal.
/// - `Interrupt`: stop integration and return control to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlag {
    Continue,
    Interrupt,
}

/// Callback hook executed after each appended sample.
///
/// `SolOut` is intended for user code that wants to observe the solution as
/// the integrator progresses. The callback is invoked once for the initial
/// point (with `told == t`) and once after every step. The arguments are:
/// - `told`: the previous abscissa (left end of the last step),
/// - `t`: the new abscissa after the step (told + h),
/// - `y`: the solution at `t`,
/// - `interpolator`: dense output valid on [told, t].
///
/// Typical uses: print or log the solution at equidistant output points by
/// sampling the interpolator inside [told, t], or stop early by returning
/// `ControlFlag::Interrupt` once some condition on (t, y) is met.
pub trait SolOut {
    fn solout<I: Interpolate>(
        &mut self,
        told: Float,
        t: Float,
        y: Float,
        interpolator: &I,
    ) -> ControlFlag;
}

/// No-op [`SolOut`] used when no callback is supplied.
pub struct DummySolOut;

impl SolOut for DummySolOut {
    fn solout<I: Interpolate>(
        &mut self,
        _told: Float,
        _t: Float,
        _y: Float,
        _interpolator: &I,
    ) -> ControlFlag {
        ControlFlag::Continue
    }
}
