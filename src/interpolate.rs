//! Dense output within a single accepted step.

use crate::Float;

/// Trait for interpolating the solution within a step.
pub trait Interpolate {
    /// Interpolate the solution at the given abscissa `ti`.
    fn interpolate(&self, ti: Float) -> Float;
}

/// Cubic Hermite interpolant over one step [t0, t0 + h], built from the
/// endpoint values and derivatives the integrator already has on hand.
pub struct CubicHermite {
    t0: Float,
    h: Float,
    y0: Float,
    y1: Float,
    dy0: Float,
    dy1: Float,
}

impl CubicHermite {
    pub fn new(t0: Float, h: Float, y0: Float, y1: Float, dy0: Float, dy1: Float) -> Self {
        Self {
            t0,
            h,
            y0,
            y1,
            dy0,
            dy1,
        }
    }
}

impl Interpolate for CubicHermite {
    fn interpolate(&self, ti: Float) -> Float {
        // Cubic Hermite interpolation
        let s = (ti - self.t0) / self.h;
        let s2 = s * s;
        let s3 = s2 * s;

        let h00 = 2.0 * s3 - 3.0 * s2 + 1.0;
        let h10 = s3 - 2.0 * s2 + s;
        let h01 = -2.0 * s3 + 3.0 * s2;
        let h11 = s3 - s2;

        h00 * self.y0 + h10 * self.h * self.dy0 + h01 * self.y1 + h11 * self.h * self.dy1
    }
}
