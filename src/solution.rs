//! A struct representing the outputted trajectory of the integrator.

use crate::{Float, status::Status};

/// Sampled trajectory of an integration run.
///
/// `t` and `y` are parallel vectors of equal length: `t[0] == t0` and
/// `y[0] == y0` exactly, and each subsequent `t[i]` is `t[i-1] + h` as
/// accumulated in floating point. The remaining fields are run statistics.
#[derive(Clone, Debug)]
pub struct Solution {
    pub t: Vec<Float>,
    pub y: Vec<Float>,
    pub h: Float,
    pub nfev: usize,
    pub nstep: usize,
    pub status: Status,
}

impl Solution {
    /// Number of stored sample points.
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Last stored (t, y) pair.
    pub fn last(&self) -> Option<(Float, Float)> {
        match (self.t.last(), self.y.last()) {
            (Some(&t), Some(&y)) => Some((t, y)),
            _ => None,
        }
    }

    /// Iterate over stored sample pairs (t_i, y_i).
    pub fn iter(&self) -> SolutionIter<'_> {
        SolutionIter {
            t_iter: self.t.iter(),
            y_iter: self.y.iter(),
        }
    }
}

/// Iterator over (t, y) pairs of stored samples in a [`Solution`].
pub struct SolutionIter<'a> {
    t_iter: std::slice::Iter<'a, Float>,
    y_iter: std::slice::Iter<'a, Float>,
}

impl<'a> Iterator for SolutionIter<'a> {
    type Item = (Float, Float);

    fn next(&mut self) -> Option<Self::Item> {
        match (self.t_iter.next(), self.y_iter.next()) {
            (Some(&t), Some(&y)) => Some((t, y)),
            _ => None,
        }
    }
}
