//! Errors raised while building a simulation.
//!
//! Stepping never fails; everything here is a construction-time problem with
//! the scenario handed to the integrator.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("failed to read scenario {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scenario: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("body {index}: {reason}")]
    InvalidBody { index: usize, reason: String },

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("a simulation needs at least one body")]
    NoBodies,
}

pub type Result<T> = std::result::Result<T, SimError>;
