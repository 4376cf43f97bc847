//! Ninja Runner - An endless side-scrolling runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actor physics, obstacles, world scroll, game state)
//! - `renderer`: Draw-call contract and scene composition
//! - `platform`: Terminal framebuffer, key input and frame clock
//! - `settings`: Runtime configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
///
/// Positions and speeds are in world units per frame, timers in milliseconds.
pub mod consts {
    /// Visible world size
    pub const VIEW_WIDTH: f32 = 900.0;
    pub const VIEW_HEIGHT: f32 = 340.0;
    /// Y coordinate the actor and obstacles stand on
    pub const GROUND_Y: f32 = 290.0;
    /// Target frame rate
    pub const FPS: u32 = 60;
    /// Nominal frame delta at the target frame rate (ms)
    pub const FRAME_MS: f32 = 1000.0 / FPS as f32;

    /// Actor physics
    pub const GRAVITY: f32 = 0.6;
    pub const JUMP_VELOCITY: f32 = -12.0;
    pub const RUN_HEIGHT: f32 = 46.0;
    pub const DUCK_HEIGHT: f32 = 28.0;
    pub const ACTOR_X: f32 = 80.0;
    pub const ACTOR_WIDTH: f32 = 42.0;
    /// Accumulated time before the run cycle advances one frame
    pub const LEG_FRAME_MS: f32 = 80.0;

    /// Scroll speed ramp
    pub const INIT_SPEED: f32 = 6.2;
    pub const MAX_SPEED: f32 = 17.0;
    pub const SPEED_STEP: f32 = 0.5;
    /// Score points between speed steps
    pub const SPEED_INCREASE_EVERY: u32 = 120;

    /// Obstacles enter just past the right edge
    pub const OBSTACLE_SPAWN_X: f32 = VIEW_WIDTH + 10.0;
    /// Obstacles are dropped once their right edge is this far past the left edge
    pub const OFFSCREEN_MARGIN: f32 = 10.0;
    pub const ROCK_SPEED_FACTOR: f32 = 1.05;

    /// Spawner countdown range (ms), before the speed discount
    pub const SPAWN_INTERVAL_MIN_MS: u32 = 800;
    pub const SPAWN_INTERVAL_MAX_MS: u32 = 1400;
    /// Countdown discount per unit of scroll speed (ms)
    pub const SPAWN_SPEED_DISCOUNT_MS: f32 = 20.0;
    /// Floor for the spawn countdown so it can never go non-positive
    pub const MIN_SPAWN_INTERVAL_MS: f32 = 250.0;

    /// Ground strip
    pub const GROUND_SCROLL_FACTOR: f32 = 0.9;
    pub const GROUND_INITIAL_FILL: f32 = VIEW_WIDTH + 120.0;
    pub const GROUND_REFILL_TO: f32 = VIEW_WIDTH + 100.0;
    pub const GROUND_DISCARD_X: f32 = -20.0;
    /// Largest gap between consecutive ground segments
    pub const GROUND_MAX_GAP: i32 = 24;

    /// Decorations
    pub const STAR_COUNT: usize = 60;
    pub const CLOUD_COUNT: usize = 3;
    /// Every n-th star shimmers on a twinkle
    pub const TWINKLE_STRIDE: usize = 7;

    /// Length of each day or night phase (ms)
    pub const DAY_LENGTH_MS: f32 = 18000.0;
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
