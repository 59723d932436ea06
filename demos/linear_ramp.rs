//! # Example: Linear Ramp
//!
//! Solve dy/dt = t - y with y(0) = 1 over [0, 2] at fixed step h = 0.2.
//!
//! The analytic solution is y(t) = t - 1 + 2e^(-t).

use rk4ivp::prelude::*;

fn main() {
    let f = |t: f64, y: f64| t - y;
    let t0 = 0.0;
    let tend = 2.0;
    let y0 = 1.0;
    let h = 0.2;

    match rk4(&f, t0, tend, y0, h, Args::default()) {
        Ok(sol) => {
            for (t, y) in sol.iter() {
                println!("t = {:.2}, y = {:.4}", t, y);
            }
            println!("Final status: {:?}", sol.status);
            println!("Number of function evaluations: {}", sol.nfev);
            println!("Number of steps taken: {}", sol.nstep);
        }
        Err(e) => eprintln!("Integration failed: {}", e),
    }
}
