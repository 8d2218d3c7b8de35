//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant and fixed step size (`g`, `dt`),
//! - trail bound and decimation divisor for outer bodies,
//! - the wrap point of the world tick counter

/// Gravitational constant (SI)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67428e-11;

/// One simulated day in seconds
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// One astronomical unit in meters
pub const AU: f64 = 149.6e6 * 1000.0;

pub const TRAIL_MAX_LEN: usize = 5000;

/// Close to 5000 samples over a ~60,000 day orbit
pub const TRAIL_DECIMATION: u32 = 13;

/// Multiple of `TRAIL_DECIMATION` so the cadence survives the wrap
pub const TICK_WRAP: u32 = TRAIL_DECIMATION * 400;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub g: f64, // gravitational constant
    pub dt: f64, // step size in seconds
    pub trail_max_len: usize, // max samples per trail
    pub trail_decimation: u32, // decimated bodies sample every n ticks
    pub tick_wrap: u32, // tick counter resets to zero here
}

impl Default for Parameters {
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
