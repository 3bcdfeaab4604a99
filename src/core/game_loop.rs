//! Fixed-timestep accumulator.
//!
//! The driver feeds real elapsed time; the loop yields how many fixed
//! logic steps to run so game logic stays framerate-independent. Purely
//! arithmetic: no clocks, no sleeping.

use crate::core::constants::{FIXED_TIMESTEP_SECONDS, MAX_FRAME_SECONDS};

#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: f64,
    accumulator: f64,
    frame_count: u32,
    fps: u32,
    fps_window: f64,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new()
    }
}

impl FixedTimestep {
    pub fn new() -> Self {
        Self::with_step(FIXED_TIMESTEP_SECONDS)
    }

    pub fn with_step(step: f64) -> Self {
        Self {
            step,
            accumulator: 0.0,
            frame_count: 0,
            fps: 0,
            fps_window: 0.0,
        }
    }

    pub fn step_seconds(&self) -> f64 {
        self.step
    }

    /// Feeds one rendered frame's elapsed time (capped at 100 ms so a
    /// stall cannot produce a catch-up avalanche) and returns the number
    /// of fixed steps to simulate.
    pub fn advance(&mut self, elapsed_seconds: f64) -> u32 {
        let elapsed = elapsed_seconds.clamp(0.0, MAX_FRAME_SECONDS);

        self.frame_count += 1;
        self.fps_window += elapsed_seconds.max(0.0);
        if self.fps_window >= 1.0 {
            self.fps = self.frame_count;
            self.frame_count = 0;
            self.fps_window -= 1.0;
        }

        self.accumulator += elapsed;
        let mut steps = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            steps += 1;
        }
        steps
    }

    /// Fraction of a step accumulated, for render interpolation.
    pub fn interpolation(&self) -> f64 {
        self.accumulator / self.step
    }

    /// Frames counted over the last whole second.
    pub fn fps(&self) -> u32 {
        self.fps
    }
}
