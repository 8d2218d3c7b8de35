//! High-level runtime engine settings
//!
//! How fast the driver steps the physics. Each physics tick advances the
//! world by one fixed `Parameters::dt`, independent of the frame rate.

use std::time::Duration;

/// Physics ticks per real second
pub const DEFAULT_FRAME_RATE: f64 = 60.0;

#[derive(Debug, Clone)]
pub struct Engine {
    pub frame_rate: f64, // fixed-timestep rate in Hz
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
        }
    }
}

impl Engine {
    /// Real time between two physics ticks. Also the most virtual time a
    /// single rendered frame may advance, so a frame runs at most one tick.
    pub fn tick_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frame_rate)
    }
}
