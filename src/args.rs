//! Args for the integrator entry point

use bon::Builder;

use crate::solout::{DummySolOut, SolOut};

#[derive(Builder)]
/// Args for [`rk4`](crate::rk4)
pub struct Args<'a, S: SolOut = DummySolOut> {
    /// Optional user callback invoked after each appended sample
    pub solout: Option<&'a mut S>,
    /// Maximum number of allowed steps. Default is 100,000.
    #[builder(default = 100_000)]
    pub nmax: usize,
}

impl Default for Args<'_> {
    fn default() -> Self {
        Args::builder().build()
    }
}
