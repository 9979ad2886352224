//! Conserved quantities of a [`System`], for reports and sanity checks.
//!
//! Potential energy uses the same softening cutoff as the force law, so a pair
//! that exerts no force also contributes no energy.

use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, System};

/// Sum of m * v over all bodies
pub fn total_momentum(sys: &System) -> NVec2 {
    sys.bodies.iter().fold(NVec2::zeros(), |p, b| p + b.momentum())
}

pub fn kinetic_energy(sys: &System) -> f64 {
    sys.bodies
        .iter()
        .map(|b| 0.5 * b.m * b.v.norm_squared())
        .sum()
}

/// -G m_i m_j / r over unordered pairs at or above the softening threshold
pub fn potential_energy(sys: &System, params: &Parameters) -> f64 {
    let mut pe = 0.0;
    let n = sys.bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let bi = &sys.bodies[i];
            let bj = &sys.bodies[j];
            let r2 = (bj.x - bi.x).norm_squared();
            if r2 < params.softening {
                continue;
            }
            pe -= params.g * bi.m * bj.m / r2.sqrt();
        }
    }
    pe
}

pub fn total_energy(sys: &System, params: &Parameters) -> f64 {
    kinetic_energy(sys) + potential_energy(sys, params)
}

/// Mass-weighted mean position, origin for a massless system
pub fn center_of_mass(sys: &System) -> NVec2 {
    let total_mass: f64 = sys.bodies.iter().map(|b| b.m).sum();
    if total_mass == 0.0 {
        return NVec2::zeros();
    }
    sys.bodies.iter().fold(NVec2::zeros(), |c, b| c + b.m * b.x) / total_mass
}

/// All of the above at one instant
#[derive(Debug, Clone, Copy)]
pub struct Diagnostics {
    pub t: f64,
    pub momentum: NVec2,
    pub kinetic: f64,
    pub potential: f64,
    pub center_of_mass: NVec2,
}

impl Diagnostics {
    pub fn measure(sys: &System, params: &Parameters) -> Self {
        Self {
            t: sys.t,
            momentum: total_momentum(sys),
            kinetic: kinetic_energy(sys),
            potential: potential_energy(sys, params),
            center_of_mass: center_of_mass(sys),
        }
    }

    pub fn energy(&self) -> f64 {
        self.kinetic + self.potential
    }

    /// |E - E0| / |E0|, or the absolute drift when E0 is zero
    pub fn energy_drift(&self, initial: &Diagnostics) -> f64 {
        let e0 = initial.energy();
        let de = (self.energy() - e0).abs();
        if e0 == 0.0 { de } else { de / e0.abs() }
    }
}
