//! Game state and core simulation types
//!
//! Everything a session needs lives in `GameState`, including the seeded RNG,
//! so a seed plus an input sequence reproduces a run.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::cycle::DayNight;
use super::obstacle::{Obstacle, ObstacleKind};
use super::spawner::Spawner;
use super::world::World;
use crate::consts::*;

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Actor running, world scrolling
    #[default]
    Running,
    /// Actor hit an obstacle; waiting for restart
    GameOver,
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// An obstacle entered the world
    Spawned(ObstacleKind),
    /// Scroll speed stepped up
    SpeedUp { speed: f32 },
    /// Day turned to night or back
    PhaseFlip { is_day: bool },
    /// The actor hit an obstacle; the run is over
    GameOver { score: u32, high_score: u32 },
    /// A new run started
    Restarted,
}

/// Tunables for building a `GameState`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    pub cloud_count: usize,
    pub star_count: usize,
    /// Length of each day or night phase (ms)
    pub day_length_ms: f32,
    /// Floor for the spawn countdown (ms)
    pub min_spawn_interval_ms: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            cloud_count: CLOUD_COUNT,
            star_count: STAR_COUNT,
            day_length_ms: DAY_LENGTH_MS,
            min_spawn_interval_ms: MIN_SPAWN_INTERVAL_MS,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Shared generator for every random draw in the simulation
    pub rng: Pcg32,
    pub phase: Phase,
    pub actor: Actor,
    /// Live obstacles in spawn order (also draw order)
    pub obstacles: Vec<Obstacle>,
    pub spawner: Spawner,
    pub world: World,
    pub cycle: DayNight,
    pub score: u32,
    /// Best score this process has seen
    pub high_score: u32,
    /// Scroll speed, within [INIT_SPEED, MAX_SPEED]
    pub speed: f32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, &SimConfig::default())
    }

    pub fn with_config(seed: u64, config: &SimConfig) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let world = World::new(config.cloud_count, config.star_count, &mut rng);
        Self {
            seed,
            rng,
            phase: Phase::Running,
            actor: Actor::new(),
            obstacles: Vec::new(),
            spawner: Spawner::new(config.min_spawn_interval_ms),
            world,
            cycle: DayNight::new(config.day_length_ms),
            score: 0,
            high_score: 0,
            speed: INIT_SPEED,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Running -> GameOver; records the high score
    pub fn end_run(&mut self) -> GameEvent {
        self.phase = Phase::GameOver;
        self.high_score = self.high_score.max(self.score);
        GameEvent::GameOver {
            score: self.score,
            high_score: self.high_score,
        }
    }

    /// GameOver -> Running with a fresh actor, no obstacles, score 0 and
    /// initial speed. Scenery and the day/night cycle carry on.
    pub fn restart(&mut self) -> GameEvent {
        self.actor.reset();
        self.obstacles.clear();
        self.score = 0;
        self.speed = INIT_SPEED;
        self.spawner.reset();
        self.phase = Phase::Running;
        GameEvent::Restarted
    }

    /// Count one point and step the speed up on every threshold
    ///
    /// Returns the new speed when it changed.
    pub fn add_point(&mut self) -> Option<f32> {
        self.score += 1;
        if self.score % SPEED_INCREASE_EVERY == 0 && self.speed < MAX_SPEED {
            self.speed = (self.speed + SPEED_STEP).min(MAX_SPEED);
            return Some(self.speed);
        }
        None
    }
}
