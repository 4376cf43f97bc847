//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per rendered frame, positions advance per frame
//! - Seeded RNG only, passed in explicitly
//! - Stable iteration order (spawn order for obstacles, left to right for ground)
//! - No rendering or platform dependencies

pub mod actor;
pub mod collision;
pub mod cycle;
pub mod obstacle;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod world;

pub use actor::Actor;
pub use collision::{Rect, first_overlap};
pub use cycle::{Celestial, CelestialKind, DayNight};
pub use obstacle::{Obstacle, ObstacleKind};
pub use spawner::Spawner;
pub use state::{GameEvent, GameState, Phase, SimConfig};
pub use tick::{TickInput, tick};
pub use world::{Cloud, Ground, GroundSegment, Starfield, World};
