//! Force / acceleration contributors for the n-body engine
//!
//! Defines the acceleration trait, the term collection used by the
//! integrators and direct Newtonian gravity with a softening cutoff

use crate::simulation::states::{NVec2, System};

/// Collection of acceleration terms
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Number of registered terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` is zeroed, then set to the sum of contributions from all terms
    /// - `sys` is only borrowed, so every term sees the same positions
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec2]) {
        // Zero buffer, nothing carries over from the previous step
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec2]);
}

/// Newtonian gravity with a hard softening cutoff
///
/// Pairs closer than `sqrt(softening)` are skipped for the step instead of
/// being smoothed, so coincident bodies never divide by zero
#[derive(Debug, Clone, Copy)]
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
    pub softening: f64, // minimum squared separation
}

impl NewtonianGravity {
    /// Acceleration felt by a body at `xi` from a mass `mj` at `xj`
    /// Zero when the squared separation is under the softening threshold
    pub fn pair_accel(&self, xi: &NVec2, xj: &NVec2, mj: f64) -> NVec2 {
        // displacement from i to j, i is pulled along +d
        let d = xj - xi;
        let r2 = d.dot(&d);

        if r2 < self.softening {
            return NVec2::zeros();
        }

        let r = r2.sqrt();
        // |a| = G m_j / r^2, direction d / r
        let mag = self.g * mj / r2;
        NVec2::new(mag * d.x / r, mag * d.y / r)
    }
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec2]) {
        // Every ordered pair (i, j), i != j. Body i sums the pulls of the
        // others in index order, nothing is written to out[j]
        for (i, bi) in sys.bodies.iter().enumerate() {
            for (j, bj) in sys.bodies.iter().enumerate() {
                if i == j {
                    continue;
                }
                out[i] += self.pair_accel(&bi.x, &bj.x, bj.m);
            }
        }
    }
}
