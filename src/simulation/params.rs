//! Numerical and physical parameters for the simulation
//!
//! `Parameters` is fixed for the life of one integrator:
//! - gravitational constant `g`,
//! - time step `dt`,
//! - `softening`: squared separation below which a pair is ignored

pub const DEFAULT_G: f64 = 1.0;
pub const DEFAULT_DT: f64 = 0.01;
pub const DEFAULT_SOFTENING: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub g: f64, // gravitational constant
    pub dt: f64, // step size
    pub softening: f64, // minimum r^2 for a pair to contribute
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            g: DEFAULT_G,
            dt: DEFAULT_DT,
            softening: DEFAULT_SOFTENING,
        }
    }
}
