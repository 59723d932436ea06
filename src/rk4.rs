//! Classic explicit Runge-Kutta 4 (RK4) fixed-step integrator.

use crate::{
    ControlFlag, Float, ODE, SolOut, args::Args, error::Error, interpolate::CubicHermite,
    solution::Solution, status::Status,
};

/// Classical explicit Runge-Kutta 4 (RK4) fixed-step integrator for the
/// scalar IVP dy/dt = f(t, y), y(t0) = y0.
///
/// Marches from `t0` with fixed step `h`, appending a (t, y) sample after
/// every step. A step is taken whenever the last appended abscissa is still
/// short of `tend`, so when `tend - t0` is not a multiple of `h` the final
/// sample overshoots `tend` by up to `h`; the result is never clamped to
/// `tend`. If `tend <= t0` the trajectory holds the single point (t0, y0).
///
/// Dense output within each step is provided to the optional callback via
/// cubic Hermite interpolation.
pub fn rk4<F, S>(
    f: &F,
    t0: Float,
    tend: Float,
    y0: Float,
    h: Float,
    args: Args<'_, S>,
) -> Result<Solution, Error>
where
    F: ODE,
    S: SolOut,
{
    // --- Input Validation ---

    // Callback function
    let mut solout = args.solout;

    if h <= 0.0 {
        return Err(Error::InvalidStepSize(h));
    }
    if args.nmax == 0 {
        return Err(Error::NMaxMustBePositive(args.nmax));
    }

    // --- Declarations ---
    let nmax = args.nmax;
    let mut t = t0;
    let mut y = y0;
    let mut nfev = 0;
    let mut nstep = 0;
    let mut status = Status::Success;

    // The abscissa accumulates additively and drifts below exact multiples of
    // h, so the termination check carries a step-relative tolerance: a last
    // sample within tol of tend counts as having reached it.
    let tol = 1e-9 * h;

    // Estimated point count for pre-reservation
    let cap = if tend > t0 {
        ((tend - t0) / h).ceil() as usize + 2
    } else {
        1
    };
    let mut ts = Vec::with_capacity(cap);
    let mut ys = Vec::with_capacity(cap);
    ts.push(t0);
    ys.push(y0);

    // --- Initializations ---
    let mut k1 = f.ode(t, y);
    nfev += 1;
    if let Some(s) = solout.as_mut() {
        let interp = CubicHermite::new(t, h, y, y, k1, k1);
        if s.solout(t, t, y, &interp) == ControlFlag::Interrupt {
            status = Status::Interrupted;
        }
    }

    // --- Main integration loop ---
    while status == Status::Success && t < tend - tol {
        // Check for maximum number of steps
        if nstep >= nmax {
            status = Status::NeedLargerNmax;
            break;
        }

        // Stage computations
        let k2 = f.ode(t + C2 * h, y + h * A21 * k1);
        let k3 = f.ode(t + C3 * h, y + h * A32 * k2);
        let k4 = f.ode(t + C4 * h, y + h * A43 * k3);

        // Store previous state
        let told = t;
        let yold = y;
        let dyold = k1;

        // Update state
        t += h;
        y += h * (B1 * k1 + B2 * k2 + B3 * k3 + B4 * k4);
        k1 = f.ode(t, y);

        nfev += 4;
        nstep += 1;

        ts.push(t);
        ys.push(y);

        // Optional callback function
        if let Some(s) = solout.as_mut() {
            let interp = CubicHermite::new(told, h, yold, y, dyold, k1);
            if s.solout(told, t, y, &interp) == ControlFlag::Interrupt {
                status = Status::Interrupted;
            }
        }
    }

    Ok(Solution {
        t: ts,
        y: ys,
        h,
        nfev,
        nstep,
        status,
    })
}

// Classical RK4 coefficients
const C2: Float = 0.5;
const C3: Float = 0.5;
const C4: Float = 1.0;
const A21: Float = 0.5;
const A32: Float = 0.5;
const A43: Float = 1.0;
const B1: Float = 1.0 / 6.0;
const B2: Float = 1.0 / 3.0;
const B3: Float = 1.0 / 3.0;
const B4: Float = 1.0 / 6.0;
