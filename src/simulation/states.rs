//! Core state types for the N-body simulation.
//!
//! - `Body`      one celestial object: mass, kinematics, trajectory, display tag
//! - `System`    the ordered body set plus the elapsed simulation time `t`
//! - `DisplayTag` rendering hint, never read by the physics

use std::fmt;

use nalgebra::Vector2;
use serde::Deserialize;

pub type NVec2 = Vector2<f64>;

/// Colour used by a renderer to tell bodies apart
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DisplayTag {
    Blue,
    Red,
    Green,
    Orange,
    Purple,
}

impl DisplayTag {
    pub const PALETTE: [DisplayTag; 5] = [
        DisplayTag::Blue,
        DisplayTag::Red,
        DisplayTag::Green,
        DisplayTag::Orange,
        DisplayTag::Purple,
    ];

    /// Palette entry for the `index`-th body, wrapping around
    pub fn for_index(index: usize) -> Self {
        Self::PALETTE[index % Self::PALETTE.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            DisplayTag::Blue => "blue",
            DisplayTag::Red => "red",
            DisplayTag::Green => "green",
            DisplayTag::Orange => "orange",
            DisplayTag::Purple => "purple",
        }
    }
}

impl fmt::Display for DisplayTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub m: f64, // mass
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub a: NVec2, // acceleration from the last step, recomputed every step
    pub trajectory: Vec<NVec2>, // every position so far, last == x
    pub tag: DisplayTag,
}

impl Body {
    /// New body with zero acceleration, trajectory seeded with `x`
    pub fn new(m: f64, x: NVec2, v: NVec2, tag: DisplayTag) -> Self {
        Self {
            m,
            x,
            v,
            a: NVec2::zeros(),
            trajectory: vec![x],
            tag,
        }
    }

    /// Linear momentum m * v
    pub fn momentum(&self) -> NVec2 {
        self.m * self.v
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // fixed membership and order for the whole run
    pub t: f64, // time
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
