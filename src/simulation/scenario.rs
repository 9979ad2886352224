//! Build fully-initialized integrators from input
//!
//! Two entry points:
//! - [`BodySpec`]: the ordered `(mass, x, y, vx, vy, tag)` tuple a form or
//!   caller hands over, one per body
//! - [`Scenario::build_scenario`]: validates a YAML-facing [`ScenarioConfig`]
//!   and maps it to a runtime [`Integrator`]

use log::info;

use crate::configuration::config::ScenarioConfig;
use crate::error::Result;
use crate::simulation::engine::Integrator;
use crate::simulation::states::{Body, DisplayTag, NVec2};

/// Initial conditions for one body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySpec {
    pub mass: f64,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub tag: DisplayTag,
}

impl BodySpec {
    pub fn new(mass: f64, x: f64, y: f64, vx: f64, vy: f64, tag: DisplayTag) -> Self {
        Self { mass, x, y, vx, vy, tag }
    }

    pub fn to_body(&self) -> Body {
        Body::new(
            self.mass,
            NVec2::new(self.x, self.y),
            NVec2::new(self.vx, self.vy),
            self.tag,
        )
    }
}

pub struct Scenario;

impl Scenario {
    /// Validate `cfg` and construct the integrator it describes
    ///
    /// Bodies without an explicit colour get the palette entry for their
    /// position in the list
    pub fn build_scenario(cfg: &ScenarioConfig) -> Result<Integrator> {
        cfg.validate()?;

        let bodies: Vec<Body> = cfg
            .bodies
            .iter()
            .enumerate()
            .map(|(i, bc)| {
                let tag = bc.color.unwrap_or_else(|| DisplayTag::for_index(i));
                Body::new(bc.m, NVec2::new(bc.x[0], bc.x[1]), NVec2::new(bc.v[0], bc.v[1]), tag)
            })
            .collect();

        let parameters = cfg.parameters.resolve();
        info!(
            "scenario: {} bodies, integrator {:?}, dt = {}",
            bodies.len(),
            cfg.integrator,
            parameters.dt
        );

        Integrator::new(bodies, parameters, cfg.integrator)
    }
}
