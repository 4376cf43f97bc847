//! Obstacle spawner
//!
//! A countdown in milliseconds; when it runs out one obstacle is picked by
//! weighted choice and the countdown is re-rolled, shorter at higher speeds.

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use serde::{Deserialize, Serialize};

use super::obstacle::{Obstacle, ObstacleKind};
use crate::consts::*;

/// Relative spawn weights, in `ObstacleKind::ALL` order
pub const SPAWN_WEIGHTS: [f32; 3] = [0.35, 0.30, 0.35];

/// Countdown-driven obstacle factory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spawner {
    /// Time left until the next spawn (ms)
    pub countdown_ms: f32,
    /// Floor applied to every re-rolled countdown (ms)
    pub min_interval_ms: f32,
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new(MIN_SPAWN_INTERVAL_MS)
    }
}

impl Spawner {
    /// A spawner that fires on the first frame
    pub fn new(min_interval_ms: f32) -> Self {
        Self {
            countdown_ms: 0.0,
            min_interval_ms: min_interval_ms.max(1.0),
        }
    }

    pub fn reset(&mut self) {
        self.countdown_ms = 0.0;
    }

    /// Count down by `dt_ms`; returns a new obstacle when the countdown expires
    pub fn update(&mut self, dt_ms: f32, speed: f32, rng: &mut impl Rng) -> Option<Obstacle> {
        self.countdown_ms -= dt_ms;
        if self.countdown_ms > 0.0 {
            return None;
        }

        let kind = pick_kind(rng);
        let obstacle = Obstacle::spawn(kind, speed, rng);
        self.countdown_ms = next_interval(speed, self.min_interval_ms, rng);
        log::trace!(
            "spawned {} at speed {:.1}, next in {:.0}ms",
            kind.as_str(),
            speed,
            self.countdown_ms
        );
        Some(obstacle)
    }
}

/// Weighted choice over the obstacle kinds
pub fn pick_kind(rng: &mut impl Rng) -> ObstacleKind {
    match WeightedIndex::new(SPAWN_WEIGHTS) {
        Ok(dist) => ObstacleKind::ALL[dist.sample(rng)],
        // Weights are constant and positive
        Err(_) => ObstacleKind::Archer,
    }
}

/// Roll the next countdown: [800, 1400) ms minus 20 ms per unit of speed,
/// floored at `min_interval_ms`
pub fn next_interval(speed: f32, min_interval_ms: f32, rng: &mut impl Rng) -> f32 {
    let base = rng.random_range(SPAWN_INTERVAL_MIN_MS..SPAWN_INTERVAL_MAX_MS) as f32;
    let discount = (speed * SPAWN_SPEED_DISCOUNT_MS).trunc();
    (base - discount).max(min_interval_ms)
}
