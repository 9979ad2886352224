//! Fixed-step time integrators for the N-body system
//!
//! Provides the semi-implicit (symplectic) Euler step used by default and a
//! velocity-Verlet alternative, both driven by `AccelSet` and `Parameters`.
//! Each step appends the new position of every body to its trajectory

use serde::Deserialize;

use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{NVec2, System};

/// Which scheme advances the system
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IntegratorKind {
    /// v += a dt, then x += v dt with the new v
    #[default]
    #[serde(rename = "symplectic_euler")]
    SymplecticEuler,

    /// Kick-drift-kick, two force evaluations per step
    #[serde(rename = "verlet")]
    Verlet,
}

/// Advance the system by one step using semi-implicit Euler
///
/// All accelerations are computed from the positions at the start of the
/// step before any body moves. Velocities are then advanced with those
/// accelerations and positions with the updated velocities
pub fn symplectic_euler(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    let dt = params.dt;

    // a_n from the snapshot x_n
    let mut accels = vec![NVec2::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut accels);

    for (b, a) in sys.bodies.iter_mut().zip(accels.iter()) {
        b.a = *a;
        // v_n+1 = v_n + dt a_n
        b.v += b.a * dt;
        // x_n+1 = x_n + dt v_n+1
        b.x += b.v * dt;
        b.trajectory.push(b.x);
    }

    sys.t += dt;
}

/// Advance the system by one step using velocity-Verlet
/// Uses two force evaluations per step; `Body::a` ends up holding the
/// acceleration at the new positions
pub fn velocity_verlet(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 {
        return;
    }

    let dt = params.dt;
    let half_dt = 0.5 * dt;

    // pull at the current positions
    let mut pull = vec![NVec2::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut pull);

    // half a velocity update, then move the bodies a whole step with it
    for (b, a) in sys.bodies.iter_mut().zip(pull.iter()) {
        b.v += half_dt * *a;
        b.x += dt * b.v;
    }

    sys.t += dt;

    // pull at the moved positions finishes the velocity update
    forces.accumulate_accels(sys.t, &*sys, &mut pull);
    for (b, a) in sys.bodies.iter_mut().zip(pull.iter()) {
        b.v += half_dt * *a;
        b.a = *a;
        b.trajectory.push(b.x);
    }
}
