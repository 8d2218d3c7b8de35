//! Core state types for the solar system simulation.
//!
//! Defines the 2D body and world structs:
//! - `Body`   a star or planet with its physical state and orbit trail
//! - `System` the ordered collection of bodies plus the world tick counter
//!
//! Positions are in meters, velocities in meters/second, masses in kilograms.

use nalgebra::Vector2;

use super::params::Parameters;
use super::trail::{SamplingTier, TickCounter, Trail};

pub type NVec2 = Vector2<f64>;

/// Identity of a body inside one `System` (its insertion index)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u32);

#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyId,
    pub name: String,
    pub anchor: bool, // dominant mass, never moved
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass
    pub radius: f64, // display radius, cosmetic only
    pub color: [u8; 3], // display color (sRGB)
    pub tier: SamplingTier,
    pub anchor_distance: f64, // last distance to the anchor, display only
    pub trail: Trail,
}

impl Body {
    pub fn new(id: BodyId, name: impl Into<String>, x: NVec2, v: NVec2, m: f64) -> Self {
        Self {
            id,
            name: name.into(),
            anchor: false,
            x,
            v,
            m,
            radius: 1.0,
            color: [255, 255, 255],
            tier: SamplingTier::Frequent,
            anchor_distance: 0.0,
            trail: Trail::new(),
        }
    }

    /// Mark this body as the fixed reference body
    pub fn as_anchor(mut self) -> Self {
        self.anchor = true;
        self
    }

    pub fn with_tier(mut self, tier: SamplingTier) -> Self {
        self.tier = tier;
        self
    }

    pub fn with_display(mut self, radius: f64, color: [u8; 3]) -> Self {
        self.radius = radius;
        self.color = color;
        self
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // insertion order is draw and update order
    pub ticks: TickCounter, // world-wide tick counter for trail decimation
    pub t: f64, // elapsed simulated time in seconds
}

impl System {
    pub fn new(bodies: Vec<Body>, params: &Parameters) -> Self {
        Self {
            bodies,
            ticks: TickCounter::new(params.tick_wrap),
            t: 0.0,
        }
    }

    pub fn anchor(&self) -> Option<&Body> {
        self.bodies.iter().find(|b| b.anchor)
    }

    pub fn body(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name == name)
    }
}
