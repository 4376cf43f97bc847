//! Frame timing for the terminal loop

use std::thread;
use std::time::{Duration, Instant};

/// Longest frame delta fed to the simulation (ms)
pub const MAX_FRAME_DELTA_MS: f32 = 100.0;

/// Measures frame deltas and paces the loop to a target rate
#[derive(Debug)]
pub struct FrameClock {
    frame_duration: Duration,
    last_frame: Instant,
    frame_start: Instant,
    frame_count: u64,
}

impl FrameClock {
    /// Clock pacing to `target_fps` frames per second (at least 1)
    pub fn new(target_fps: u32) -> Self {
        let now = Instant::now();
        Self {
            frame_duration: frame_duration(target_fps),
            last_frame: now,
            frame_start: now,
            frame_count: 0,
        }
    }

    /// Start a new frame and return the elapsed time since the last one (ms)
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now - self.last_frame;
        self.last_frame = now;
        self.frame_start = now;
        self.frame_count += 1;
        clamp_delta_ms(delta)
    }

    /// Sleep off whatever is left of the current frame's budget
    pub fn wait(&self) {
        let elapsed = self.frame_start.elapsed();
        if elapsed < self.frame_duration {
            thread::sleep(self.frame_duration - elapsed);
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

fn frame_duration(target_fps: u32) -> Duration {
    Duration::from_secs_f64(1.0 / target_fps.max(1) as f64)
}

fn clamp_delta_ms(delta: Duration) -> f32 {
    (delta.as_secs_f32() * 1000.0).min(MAX_FRAME_DELTA_MS)
}
