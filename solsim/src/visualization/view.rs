//! View state shared by input handling and drawing
//!
//! The scale is `scale_numerator / distance_unit` pixels per meter. Zoom keys
//! move the numerator in whole steps; physics never reads any of this.

use anyhow::{ensure, Result};
use bevy::log::info;
use bevy::prelude::Resource;

use crate::configuration::config::ViewConfig;
use crate::simulation::params::AU;
use crate::simulation::states::NVec2;

pub const DEFAULT_SCALE_NUMERATOR: f64 = 30.0;
pub const DEFAULT_ZOOM_STEP: f64 = 5.0;
pub const DEFAULT_DISTANCE_UNIT: f64 = AU;
pub const DEFAULT_VIEWPORT: [f32; 2] = [1920.0, 1080.0];

/// On-screen disc radius per unit of body radius per unit of numerator
pub const DISPLAY_RADIUS_FACTOR: f64 = 0.008;

/// The only input the simulation reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    ZoomIn,
    ZoomOut,
    Quit,
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ViewState {
    pub scale_numerator: f64,
    pub zoom_step: f64,
    pub distance_unit: f64, // meters per numerator unit
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            scale_numerator: DEFAULT_SCALE_NUMERATOR,
            zoom_step: DEFAULT_ZOOM_STEP,
            distance_unit: DEFAULT_DISTANCE_UNIT,
        }
    }
}

impl ViewState {
    /// Pixels per meter
    pub fn scale(&self) -> f64 {
        self.scale_numerator / self.distance_unit
    }

    pub fn zoom_in(&mut self) {
        self.scale_numerator += self.zoom_step;
        info!("scale numerator: {}", self.scale_numerator);
    }

    /// No floor: a numerator at or below zero mirrors or collapses the picture,
    /// the renderer hides discs with no positive radius
    pub fn zoom_out(&mut self) {
        self.scale_numerator -= self.zoom_step;
        info!("scale numerator: {}", self.scale_numerator);
    }

    /// Apply a zoom command. Returns `false` for `Quit`, which the view can't handle.
    pub fn apply(&mut self, command: ViewCommand) -> bool {
        match command {
            ViewCommand::ZoomIn => self.zoom_in(),
            ViewCommand::ZoomOut => self.zoom_out(),
            ViewCommand::Quit => return false,
        }
        true
    }

    /// World meters to screen pixels (origin top-left, y down)
    pub fn to_pixels(&self, world: &NVec2, viewport: [f32; 2]) -> [f64; 2] {
        let scale = self.scale();
        [
            world.x * scale + viewport[0] as f64 / 2.0,
            world.y * scale + viewport[1] as f64 / 2.0,
        ]
    }

    /// Disc radius in pixels for a body of display radius `radius`, never negative
    pub fn display_radius(&self, radius: f64) -> f64 {
        (self.scale_numerator * DISPLAY_RADIUS_FACTOR * radius).max(0.0)
    }
}

/// Label text for a distance in meters, e.g. `"149600000.0km"`
pub fn distance_label(meters: f64) -> String {
    format!("{:.1}km", meters / 1000.0)
}

/// Window settings handed to the viewer
#[derive(Debug, Clone)]
pub struct WindowSettings {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

/// Everything the viewer needs besides the simulation itself
#[derive(Debug, Clone)]
pub struct ViewSettings {
    pub view: ViewState,
    pub window: WindowSettings,
}

impl ViewSettings {
    pub fn from_config(cfg: &ViewConfig) -> Result<Self> {
        ensure!(cfg.zoom_step > 0.0, "zoom_step must be positive, got {}", cfg.zoom_step);
        ensure!(
            cfg.distance_unit > 0.0,
            "distance_unit must be positive, got {}",
            cfg.distance_unit
        );
        ensure!(
            cfg.scale_numerator.is_finite(),
            "scale_numerator must be finite, got {}",
            cfg.scale_numerator
        );
        ensure!(
            cfg.width > 0.0 && cfg.height > 0.0,
            "window size must be positive, got {}x{}",
            cfg.width,
            cfg.height
        );

        Ok(Self {
            view: ViewState {
                scale_numerator: cfg.scale_numerator,
                zoom_step: cfg.zoom_step,
                distance_unit: cfg.distance_unit,
            },
            window: WindowSettings {
                title: cfg.title.clone(),
                width: cfg.width,
                height: cfg.height,
            },
        })
    }
}
