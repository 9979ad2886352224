//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario is a thin, `serde`-deserializable description of one run:
//!
//! - [`IntegratorKind`]   – optional, which scheme advances the bodies
//! - [`ParametersConfig`] – optional physical constants, defaults otherwise
//! - [`BodyConfig`]       – initial state for each body, in order
//! - [`ScenarioConfig`]   – top-level wrapper
//!
//! # YAML format
//!
//! ```yaml
//! integrator: "symplectic_euler"   # or "verlet"
//!
//! parameters:
//!   G: 1.0                  # gravitational constant
//!   dt: 0.01                # fixed step size
//!   softening: 1.0e-6       # pairs with r^2 below this are skipped
//!
//! bodies:
//!   - m: 1.0
//!     x: [ -1.0, 0.0 ]
//!     v: [  0.0, 0.5 ]
//!     color: "blue"         # optional, palette by index otherwise
//!   - m: 1.0
//!     x: [  1.0, 0.0 ]
//!     v: [  0.0, -0.5 ]
//! ```
//!
//! Input checking happens here through [`ScenarioConfig::validate`]; the
//! integrator itself trusts the numbers it is given.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, SimError};
use crate::simulation::integrator::IntegratorKind;
use crate::simulation::params::{Parameters, DEFAULT_DT, DEFAULT_G, DEFAULT_SOFTENING};
use crate::simulation::states::DisplayTag;

/// Physical and numerical constants, each falling back to its default
#[derive(Deserialize, Debug, Clone, Copy, Default)]
pub struct ParametersConfig {
    #[serde(rename = "G")]
    pub g: Option<f64>, // gravitational constant
    pub dt: Option<f64>, // time step size
    pub softening: Option<f64>, // squared-distance cutoff for pair forces
}

impl ParametersConfig {
    pub fn resolve(&self) -> Parameters {
        Parameters {
            g: self.g.unwrap_or(DEFAULT_G),
            dt: self.dt.unwrap_or(DEFAULT_DT),
            softening: self.softening.unwrap_or(DEFAULT_SOFTENING),
        }
    }
}

/// Initial state of a single body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub m: f64, // mass, strictly positive
    pub x: [f64; 2], // initial position
    pub v: [f64; 2], // initial velocity
    #[serde(default)]
    pub color: Option<DisplayTag>, // display colour, palette by index when absent
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub integrator: IntegratorKind,
    #[serde(default)]
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }

    /// Reject scenarios the integrator cannot run sensibly
    pub fn validate(&self) -> Result<()> {
        let p = self.parameters.resolve();

        if !(p.g.is_finite() && p.g > 0.0) {
            return Err(SimError::InvalidParameter {
                name: "G",
                reason: format!("must be positive, got {}", p.g),
            });
        }
        if !(p.dt.is_finite() && p.dt > 0.0) {
            return Err(SimError::InvalidParameter {
                name: "dt",
                reason: format!("must be positive, got {}", p.dt),
            });
        }
        // a zero cutoff lets coincident bodies divide 0 by 0
        if !(p.softening.is_finite() && p.softening > 0.0) {
            return Err(SimError::InvalidParameter {
                name: "softening",
                reason: format!("must be positive, got {}", p.softening),
            });
        }

        if self.bodies.is_empty() {
            return Err(SimError::NoBodies);
        }

        for (index, b) in self.bodies.iter().enumerate() {
            let all_finite = b.m.is_finite() && b.x.iter().chain(b.v.iter()).all(|c| c.is_finite());
            if !all_finite {
                return Err(SimError::InvalidBody {
                    index,
                    reason: "mass, position and velocity must be finite numbers".to_string(),
                });
            }
            if b.m <= 0.0 {
                return Err(SimError::InvalidBody {
                    index,
                    reason: format!("mass must be positive, got {}", b.m),
                });
            }
        }

        Ok(())
    }
}
