//! Orbit trail bookkeeping
//!
//! A `Trail` is the bounded history of a body's past positions. How often it
//! grows is decided by the body's `SamplingTier` and the world `TickCounter`:
//! outer planets are sampled on every `decimation`-th tick only, so their
//! longer orbits still close into a full loop before old samples fall off.

use std::collections::VecDeque;

use serde::Deserialize;

use super::states::NVec2;

/// Minimum number of samples needed to draw a trail as a polyline
pub const MIN_DRAWABLE_SAMPLES: usize = 3;

/// How often a body's trail is extended
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplingTier {
    #[default]
    #[serde(rename = "frequent")] // every tick (inner planets)
    Frequent,

    #[serde(rename = "decimated")] // once every `decimation` ticks (outer planets)
    Decimated,
}

impl SamplingTier {
    /// Whether a body in this tier records a sample on world tick `tick`
    pub fn samples_on(self, tick: u32, decimation: u32) -> bool {
        match self {
            SamplingTier::Frequent => true,
            SamplingTier::Decimated => tick % decimation == 0,
        }
    }
}

/// World-wide step counter, wraps to zero once it reaches `wrap`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickCounter {
    value: u32,
    wrap: u32,
}

impl TickCounter {
    pub fn new(wrap: u32) -> Self {
        Self { value: 0, wrap }
    }

    /// Advance by one tick and return the new value
    pub fn advance(&mut self) -> u32 {
        self.value += 1;
        if self.value >= self.wrap {
            self.value = 0;
        }
        self.value
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}

/// Oldest-first history of positions in meters
#[derive(Debug, Clone, Default)]
pub struct Trail {
    samples: VecDeque<NVec2>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `point`, dropping the oldest sample once `max_len` is exceeded
    pub fn record(&mut self, point: NVec2, max_len: usize) {
        self.samples.push_back(point);
        if self.samples.len() > max_len {
            self.samples.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn is_drawable(&self) -> bool {
        self.samples.len() >= MIN_DRAWABLE_SAMPLES
    }

    pub fn iter(&self) -> impl Iterator<Item = &NVec2> + '_ {
        self.samples.iter()
    }

    pub fn oldest(&self) -> Option<&NVec2> {
        self.samples.front()
    }

    pub fn latest(&self) -> Option<&NVec2> {
        self.samples.back()
    }
}
