//! The integrator a driver talks to
//!
//! [`Integrator`] owns the body set, the fixed parameters and the force
//! terms. A render or report loop calls [`Integrator::step`] once per tick and
//! reads [`Integrator::current_state`] afterwards. Membership and order of the
//! bodies never change after construction.

use log::{debug, trace, warn};

use crate::error::{Result, SimError};
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::{symplectic_euler, velocity_verlet, IntegratorKind};
use crate::simulation::params::Parameters;
use crate::simulation::scenario::BodySpec;
use crate::simulation::states::{Body, DisplayTag, NVec2, System};

/// Read-only view of one body for a renderer
#[derive(Debug, Clone, Copy)]
pub struct BodyState<'a> {
    pub position: NVec2,
    pub velocity: NVec2,
    pub mass: f64,
    pub tag: DisplayTag,
    pub trajectory: &'a [NVec2],
}

pub struct Integrator {
    system: System,
    parameters: Parameters,
    forces: AccelSet,
    kind: IntegratorKind,
    steps: u64,
}

impl Integrator {
    /// Build an integrator with Newtonian gravity as its only force term
    ///
    /// Fails with [`SimError::NoBodies`] on an empty body set. Masses and
    /// coordinates are taken as given.
    pub fn new(bodies: Vec<Body>, parameters: Parameters, kind: IntegratorKind) -> Result<Self> {
        let forces = AccelSet::new().with(NewtonianGravity {
            g: parameters.g,
            softening: parameters.softening,
        });
        Self::with_forces(bodies, parameters, forces, kind)
    }

    /// Build an integrator with a caller supplied force set
    pub fn with_forces(
        bodies: Vec<Body>,
        parameters: Parameters,
        forces: AccelSet,
        kind: IntegratorKind,
    ) -> Result<Self> {
        if bodies.is_empty() {
            return Err(SimError::NoBodies);
        }

        if forces.is_empty() {
            warn!("integrator built without force terms, bodies will coast");
        }

        debug!(
            "integrator: {} bodies, {} force terms, {:?}, G = {}, dt = {}, softening = {}",
            bodies.len(),
            forces.len(),
            kind,
            parameters.g,
            parameters.dt,
            parameters.softening
        );

        Ok(Self {
            system: System::new(bodies),
            parameters,
            forces,
            kind,
            steps: 0,
        })
    }

    /// Build from ordered `(mass, x, y, vx, vy, tag)` tuples with the
    /// default symplectic Euler scheme
    pub fn from_specs(specs: &[BodySpec], parameters: Parameters) -> Result<Self> {
        let bodies = specs.iter().map(BodySpec::to_body).collect();
        Self::new(bodies, parameters, IntegratorKind::default())
    }

    /// Advance every body by one fixed time step
    pub fn step(&mut self) {
        match self.kind {
            IntegratorKind::SymplecticEuler => {
                symplectic_euler(&mut self.system, &self.forces, &self.parameters)
            }
            IntegratorKind::Verlet => {
                velocity_verlet(&mut self.system, &self.forces, &self.parameters)
            }
        }
        self.steps += 1;
        trace!("step {} done, t = {:.6}", self.steps, self.system.t);
    }

    /// Position, velocity, mass, tag and trajectory of every body, in
    /// construction order
    pub fn current_state(&self) -> impl ExactSizeIterator<Item = BodyState<'_>> + '_ {
        self.system.bodies.iter().map(|b| BodyState {
            position: b.x,
            velocity: b.v,
            mass: b.m,
            tag: b.tag,
            trajectory: &b.trajectory,
        })
    }

    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn kind(&self) -> IntegratorKind {
        self.kind
    }

    /// Elapsed simulation time
    pub fn time(&self) -> f64 {
        self.system.t
    }

    /// Number of completed steps
    pub fn steps(&self) -> u64 {
        self.steps
    }
}
