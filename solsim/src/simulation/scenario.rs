//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing), validates it and produces the
//! runtime bundle `Scenario` containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - world state (`System` with bodies at t = 0)
//! - the force law (`NewtonianGravity`)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! physics and drawing systems. View settings are built separately, see
//! [`crate::visualization::view::ViewSettings`]

use std::collections::HashSet;

use anyhow::{bail, ensure, Result};
use bevy::log::debug;
use bevy::prelude::Resource;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::integrator::symplectic_euler;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyId, NVec2, System};

/// Bevy resource representing a fully-initialized simulation
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub gravity: NewtonianGravity,
}

impl Scenario {
    pub fn build_scenario(cfg: &ScenarioConfig) -> Result<Self> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = &cfg.parameters;
        let parameters = Parameters {
            g: p_cfg.g,
            dt: p_cfg.dt,
            trail_max_len: p_cfg.trail_max_len,
            trail_decimation: p_cfg.trail_decimation,
            tick_wrap: p_cfg.tick_wrap,
        };
        validate_parameters(&parameters)?;

        // Engine (runtime) from EngineConfig
        let engine = Engine {
            frame_rate: cfg.engine.frame_rate,
        };
        ensure!(
            engine.frame_rate.is_finite() && engine.frame_rate > 0.0,
            "frame_rate must be positive, got {}",
            engine.frame_rate
        );

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies = build_bodies(&cfg.bodies)?;
        debug!(
            "built {} bodies, anchor: {:?}",
            bodies.len(),
            bodies.iter().find(|b| b.anchor).map(|b| b.name.as_str())
        );

        let system = System::new(bodies, &parameters);
        let gravity = NewtonianGravity::new(parameters.g);

        Ok(Self {
            engine,
            parameters,
            system,
            gravity,
        })
    }

    /// Advance the world by one tick
    pub fn step(&mut self) {
        symplectic_euler(&mut self.system, &self.gravity, &self.parameters);
    }
}

fn validate_parameters(p: &Parameters) -> Result<()> {
    ensure!(p.g.is_finite() && p.g > 0.0, "G must be positive, got {}", p.g);
    ensure!(p.dt.is_finite() && p.dt > 0.0, "dt must be positive, got {}", p.dt);
    ensure!(p.trail_max_len > 0, "trail_max_len must be at least 1");
    ensure!(p.trail_decimation > 0, "trail_decimation must be at least 1");
    ensure!(
        p.tick_wrap > p.trail_decimation && p.tick_wrap % p.trail_decimation == 0,
        "tick_wrap ({}) must be a multiple of trail_decimation ({}) and larger than it",
        p.tick_wrap,
        p.trail_decimation
    );
    Ok(())
}

fn vec2(name: &str, field: &str, values: &[f64]) -> Result<NVec2> {
    match values {
        [x, y] if x.is_finite() && y.is_finite() => Ok(NVec2::new(*x, *y)),
        [_, _] => bail!("body '{name}': {field} must be finite"),
        _ => bail!("body '{name}': {field} needs exactly 2 components, got {}", values.len()),
    }
}

fn build_bodies(configs: &[BodyConfig]) -> Result<Vec<Body>> {
    ensure!(!configs.is_empty(), "scenario has no bodies");

    let mut names = HashSet::new();
    let mut bodies: Vec<Body> = Vec::with_capacity(configs.len());

    for (i, bc) in configs.iter().enumerate() {
        ensure!(names.insert(bc.name.as_str()), "duplicate body name '{}'", bc.name);
        ensure!(
            bc.m.is_finite() && bc.m > 0.0,
            "body '{}': mass must be positive, got {}",
            bc.name,
            bc.m
        );

        let x = vec2(&bc.name, "x", &bc.x)?;
        let v = vec2(&bc.name, "v", &bc.v)?;

        if let Some(other) = bodies.iter().find(|b| b.x == x) {
            bail!("bodies '{}' and '{}' start at the same position", other.name, bc.name);
        }
        if bc.anchor {
            if let Some(other) = bodies.iter().find(|b| b.anchor) {
                bail!("more than one anchor: '{}' and '{}'", other.name, bc.name);
            }
        }

        let mut body = Body::new(BodyId(i as u32), bc.name.clone(), x, v, bc.m)
            .with_tier(bc.tier)
            .with_display(bc.radius, bc.color);
        if bc.anchor {
            body = body.as_anchor();
        }
        bodies.push(body);
    }

    Ok(bodies)
}
