use rk4ivp::prelude::*;

/// dy/dt = t - y, y(0) = 1; analytic solution y(t) = t - 1 + 2e^(-t).
fn linear_ramp(t: Float, y: Float) -> Float {
    t - y
}

fn linear_ramp_exact(t: Float) -> Float {
    t - 1.0 + 2.0 * (-t).exp()
}

#[test]
fn exact_multiple_span_yields_eleven_points() {
    let sol = rk4(&linear_ramp, 0.0, 2.0, 1.0, 0.2, Args::default()).unwrap();
    assert_eq!(sol.len(), 11);
    assert_eq!(sol.nstep, 10);
    let (t_last, _) = sol.last().unwrap();
    assert!((t_last - 2.0).abs() < 1e-9);
}

#[test]
fn first_element_is_the_initial_condition() {
    let sol = rk4(&linear_ramp, 0.3, 1.7, -4.25, 0.1, Args::default()).unwrap();
    assert_eq!(sol.t[0], 0.3);
    assert_eq!(sol.y[0], -4.25);
}

#[test]
fn step_spacing_is_uniform() {
    let h = 0.2;
    let sol = rk4(&linear_ramp, 0.0, 2.0, 1.0, h, Args::default()).unwrap();
    for i in 1..sol.len() {
        assert!((sol.t[i] - sol.t[i - 1] - h).abs() < 1e-9);
    }
}

#[test]
fn matches_analytic_solution_at_tend() {
    let sol = rk4(&linear_ramp, 0.0, 2.0, 1.0, 0.2, Args::default()).unwrap();
    let (t_last, y_last) = sol.last().unwrap();
    // Global error for RK4 at h = 0.2 over [0, 2] is well under 1e-4.
    assert!((y_last - linear_ramp_exact(t_last)).abs() < 1e-4);
}

#[test]
fn constant_derivative_reduces_to_linear_growth() {
    let c = 2.5;
    let y0 = -1.0;
    let sol = rk4(&|_t: Float, _y: Float| c, 0.0, 3.0, y0, 0.25, Args::default()).unwrap();
    for (t, y) in sol.iter() {
        assert!((y - (y0 + c * t)).abs() < 1e-12);
    }
}

#[test]
fn degenerate_span_yields_single_point() {
    let sol = rk4(&linear_ramp, 1.5, 1.5, 2.0, 0.1, Args::default()).unwrap();
    assert_eq!(sol.len(), 1);
    assert_eq!(sol.last(), Some((1.5, 2.0)));
    assert_eq!(sol.nstep, 0);
}

#[test]
fn final_sample_overshoots_tend() {
    // 1.0 is not a multiple of 0.3: samples at 0, 0.3, 0.6, 0.9, 1.2.
    let sol = rk4(&linear_ramp, 0.0, 1.0, 1.0, 0.3, Args::default()).unwrap();
    assert_eq!(sol.len(), 5);
    let (t_last, _) = sol.last().unwrap();
    assert!(t_last > 1.0);
    assert!((t_last - 1.2).abs() < 1e-9);
}

#[test]
fn nonpositive_step_size_is_rejected() {
    assert!(matches!(
        rk4(&linear_ramp, 0.0, 2.0, 1.0, 0.0, Args::default()),
        Err(Error::InvalidStepSize(_))
    ));
    assert!(matches!(
        rk4(&linear_ramp, 0.0, 2.0, 1.0, -0.1, Args::default()),
        Err(Error::InvalidStepSize(_))
    ));
}

#[test]
fn nmax_bounds_the_step_count() {
    let args: Args = Args::builder().nmax(3).build();
    let sol = rk4(&linear_ramp, 0.0, 2.0, 1.0, 0.2, args).unwrap();
    assert_eq!(sol.status, Status::NeedLargerNmax);
    assert_eq!(sol.nstep, 3);
    assert_eq!(sol.len(), 4);
}

#[test]
fn zero_nmax_is_rejected() {
    let args: Args = Args::builder().nmax(0).build();
    assert!(matches!(
        rk4(&linear_ramp, 0.0, 2.0, 1.0, 0.2, args),
        Err(Error::NMaxMustBePositive(0))
    ));
}

struct StopAt {
    t_stop: Float,
}

impl SolOut for StopAt {
    fn solout<I: Interpolate>(
        &mut self,
        _told: Float,
        t: Float,
        _y: Float,
        _interpolator: &I,
    ) -> ControlFlag {
        if t >= self.t_stop {
            ControlFlag::Interrupt
        } else {
            ControlFlag::Continue
        }
    }
}

#[test]
fn solout_interrupt_stops_the_run() {
    let mut stopper = StopAt { t_stop: 0.5 };
    let args = Args::builder().solout(&mut stopper).build();
    let sol = rk4(&linear_ramp, 0.0, 2.0, 1.0, 0.2, args).unwrap();
    assert_eq!(sol.status, Status::Interrupted);
    // First abscissa at or past 0.5 is 0.6; the sample is kept.
    let (t_last, _) = sol.last().unwrap();
    assert!((t_last - 0.6).abs() < 1e-9);
    assert_eq!(sol.nstep, 3);
}

struct MidpointSampler {
    samples: Vec<(Float, Float)>,
}

impl SolOut for MidpointSampler {
    fn solout<I: Interpolate>(
        &mut self,
        told: Float,
        t: Float,
        _y: Float,
        interpolator: &I,
    ) -> ControlFlag {
        if t > told {
            let tm = 0.5 * (told + t);
            self.samples.push((tm, interpolator.interpolate(tm)));
        }
        ControlFlag::Continue
    }
}

#[test]
fn dense_output_is_accurate_inside_steps() {
    let mut sampler = MidpointSampler { samples: Vec::new() };
    let args = Args::builder().solout(&mut sampler).build();
    let sol = rk4(&linear_ramp, 0.0, 2.0, 1.0, 0.2, args).unwrap();
    assert_eq!(sampler.samples.len(), sol.nstep);
    for &(tm, ym) in &sampler.samples {
        assert!((ym - linear_ramp_exact(tm)).abs() < 1e-4);
    }
}

struct Decay {
    rate: Float,
}

impl ODE for Decay {
    fn ode(&self, _t: Float, y: Float) -> Float {
        -self.rate * y
    }
}

#[test]
fn struct_rhs_works_like_a_closure() {
    let f = Decay { rate: 1.0 };
    let sol = rk4(&f, 0.0, 1.0, 1.0, 0.05, Args::default()).unwrap();
    let (t_last, y_last) = sol.last().unwrap();
    assert!((y_last - (-t_last).exp()).abs() < 1e-7);
    assert_eq!(sol.nfev, 4 * sol.nstep + 1);
}
