pub mod simulation;
pub mod configuration;
pub mod error;

pub use simulation::states::{Body, System, NVec2, DisplayTag};
pub use simulation::params::Parameters;
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::{symplectic_euler, velocity_verlet, IntegratorKind};
pub use simulation::engine::{Integrator, BodyState};
pub use simulation::scenario::{BodySpec, Scenario};
pub use simulation::diagnostics::Diagnostics;

pub use configuration::config::{ParametersConfig, BodyConfig, ScenarioConfig};

pub use error::SimError;
