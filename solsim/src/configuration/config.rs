//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – driver options (physics tick rate)
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`ViewConfig`]       – window and zoom settings
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every section except `bodies` may be omitted, missing values fall back to
//! the defaults in [`crate::simulation::params`], [`crate::simulation::engine`]
//! and [`crate::visualization::view`].
//!
//! # YAML format
//! A minimal two body scenario:
//!
//! ```yaml
//! engine:
//!   frame_rate: 60.0        # physics ticks per real second
//!
//! parameters:
//!   G: 6.67428e-11          # gravitational constant
//!   dt: 86400.0             # one simulated day per tick
//!   trail_max_len: 5000
//!   trail_decimation: 13
//!   tick_wrap: 5200
//!
//! view:
//!   title: "My solar system"
//!   width: 1920.0
//!   height: 1080.0
//!   scale_numerator: 30.0
//!   zoom_step: 5.0
//!   distance_unit: 1.496e11
//!
//! bodies:
//!   - name: Sun
//!     x: [0.0, 0.0]
//!     v: [0.0, 0.0]
//!     m: 1.98892e30
//!     radius: 30.0
//!     color: [255, 255, 0]
//!     anchor: true
//!   - name: Earth
//!     x: [-1.496e11, 0.0]
//!     v: [0.0, 29783.0]
//!     m: 5.9742e24
//!     radius: 16.0
//!     color: [0, 0, 255]
//!     tier: frequent
//! ```

use serde::Deserialize;

use crate::simulation::engine::DEFAULT_FRAME_RATE;
use crate::simulation::params::{
    GRAVITATIONAL_CONSTANT, SECONDS_PER_DAY, TICK_WRAP, TRAIL_DECIMATION, TRAIL_MAX_LEN,
};
use crate::simulation::trail::SamplingTier;
use crate::visualization::view::{
    DEFAULT_DISTANCE_UNIT, DEFAULT_SCALE_NUMERATOR, DEFAULT_VIEWPORT, DEFAULT_ZOOM_STEP,
};

/// Driver configuration
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub frame_rate: f64, // physics ticks per real second
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
        }
    }
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    #[serde(rename = "G")]
    pub g: f64,                 // gravitational constant
    pub dt: f64,                // fixed time step in seconds
    pub trail_max_len: usize,   // max samples kept per trail
    pub trail_decimation: u32,  // decimated bodies sample every n ticks
    pub tick_wrap: u32,         // tick counter wraps to zero here
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            g: GRAVITATIONAL_CONSTANT,
            dt: SECONDS_PER_DAY,
            trail_max_len: TRAIL_MAX_LEN,
            trail_decimation: TRAIL_DECIMATION,
            tick_wrap: TICK_WRAP,
        }
    }
}

/// Window and zoom configuration
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ViewConfig {
    pub title: String,
    pub width: f32,             // initial window width in pixels
    pub height: f32,            // initial window height in pixels
    pub scale_numerator: f64,   // pixels per `distance_unit`
    pub zoom_step: f64,         // numerator change per zoom key press
    pub distance_unit: f64,     // meters per scale unit (1 AU)
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            title: "My solar system".to_string(),
            width: DEFAULT_VIEWPORT[0],
            height: DEFAULT_VIEWPORT[1],
            scale_numerator: DEFAULT_SCALE_NUMERATOR,
            zoom_step: DEFAULT_ZOOM_STEP,
            distance_unit: DEFAULT_DISTANCE_UNIT,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,           // unique name, also used for logging
    pub x: Vec<f64>,            // initial position [x, y] in meters
    #[serde(default = "zero_vec")]
    pub v: Vec<f64>,            // initial velocity [vx, vy] in meters/second
    pub m: f64,                 // mass in kilograms
    #[serde(default = "default_radius")]
    pub radius: f64,            // display radius, cosmetic
    #[serde(default = "default_color")]
    pub color: [u8; 3],         // display color (sRGB)
    #[serde(default)]
    pub anchor: bool,           // `true` - fixed reference body (the star)
    #[serde(default)]
    pub tier: SamplingTier,     // how often the trail is extended
}

fn zero_vec() -> Vec<f64> {
    vec![0.0, 0.0]
}

fn default_radius() -> f64 {
    10.0
}

fn default_color() -> [u8; 3] {
    [255, 255, 255]
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig, // Driver settings
    #[serde(default)]
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    #[serde(default)]
    pub view: ViewConfig, // Window and zoom
    pub bodies: Vec<BodyConfig>, // List of bodies that define the initial state of the system
}
