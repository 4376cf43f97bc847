//! Obstacle family: archers, towers and rocks
//!
//! All obstacles enter at the right edge standing on the ground line and move
//! left every frame. Size is fixed at construction (towers and rocks roll
//! theirs), only `pos.x` changes afterwards.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// Obstacle variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Fixed-size archer with a drawn bow
    Archer,
    /// Tall crenellated tower, randomized size
    Tower,
    /// Low rock, randomized size, moves slightly faster than the world
    Rock,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] = [ObstacleKind::Archer, ObstacleKind::Tower, ObstacleKind::Rock];

    /// Multiplier applied to the scroll speed when moving
    pub fn speed_factor(&self) -> f32 {
        match self {
            ObstacleKind::Archer | ObstacleKind::Tower => 1.0,
            ObstacleKind::Rock => ROCK_SPEED_FACTOR,
        }
    }

    /// Roll a size for this kind
    pub fn roll_size(&self, rng: &mut impl Rng) -> Vec2 {
        match self {
            ObstacleKind::Archer => Vec2::new(28.0, 46.0),
            ObstacleKind::Tower => Vec2::new(
                rng.random_range(24..=34) as f32,
                rng.random_range(56..=96) as f32,
            ),
            ObstacleKind::Rock => Vec2::new(
                rng.random_range(18..=26) as f32,
                rng.random_range(14..=20) as f32,
            ),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ObstacleKind::Archer => "archer",
            ObstacleKind::Tower => "tower",
            ObstacleKind::Rock => "rock",
        }
    }
}

/// An obstacle in the world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    /// Top-left corner in world space
    pub pos: Vec2,
    pub size: Vec2,
    /// Scroll speed when this obstacle was spawned
    pub spawn_speed: f32,
}

impl Obstacle {
    /// Spawn an obstacle of `kind` at the right edge of the world
    pub fn spawn(kind: ObstacleKind, speed: f32, rng: &mut impl Rng) -> Self {
        let size = kind.roll_size(rng);
        Self::with_size(kind, size, speed)
    }

    /// Spawn with an explicit size (no randomness)
    pub fn with_size(kind: ObstacleKind, size: Vec2, speed: f32) -> Self {
        Self {
            kind,
            pos: Vec2::new(OBSTACLE_SPAWN_X, GROUND_Y - size.y),
            size,
            spawn_speed: speed,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Effective horizontal speed at the given scroll speed
    #[inline]
    pub fn effective_speed(&self, speed: f32) -> f32 {
        speed * self.kind.speed_factor()
    }

    /// Move left for one frame at the current scroll speed
    pub fn update(&mut self, speed: f32) {
        self.pos.x -= self.effective_speed(speed);
    }

    /// True once the right edge is past the off-screen margin
    pub fn offscreen(&self) -> bool {
        self.pos.x + self.size.x < -OFFSCREEN_MARGIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_sits_on_ground_at_right_edge() {
        let mut rng = Pcg32::seed_from_u64(7);
        for kind in ObstacleKind::ALL {
            let ob = Obstacle::spawn(kind, INIT_SPEED, &mut rng);
            assert_eq!(ob.pos.x, VIEW_WIDTH + 10.0);
            assert_eq!(ob.rect().bottom(), GROUND_Y);
            assert_eq!(ob.spawn_speed, INIT_SPEED);
        }
    }

    #[test]
    fn test_sizes_within_ranges() {
        let mut rng = Pcg32::seed_from_u64(99);
        for _ in 0..200 {
            let archer = ObstacleKind::Archer.roll_size(&mut rng);
            assert_eq!(archer, Vec2::new(28.0, 46.0));

            let tower = ObstacleKind::Tower.roll_size(&mut rng);
            assert!((24.0..=34.0).contains(&tower.x));
            assert!((56.0..=96.0).contains(&tower.y));

            let rock = ObstacleKind::Rock.roll_size(&mut rng);
            assert!((18.0..=26.0).contains(&rock.x));
            assert!((14.0..=20.0).contains(&rock.y));
        }
    }

    #[test]
    fn test_rock_moves_faster() {
        let mut archer = Obstacle::with_size(ObstacleKind::Archer, Vec2::new(28.0, 46.0), 10.0);
        let mut rock = Obstacle::with_size(ObstacleKind::Rock, Vec2::new(20.0, 16.0), 10.0);
        archer.update(10.0);
        rock.update(10.0);
        assert_eq!(archer.pos.x, OBSTACLE_SPAWN_X - 10.0);
        assert!((rock.pos.x - (OBSTACLE_SPAWN_X - 10.5)).abs() < 1e-4);
    }

    #[test]
    fn test_only_x_changes() {
        let mut ob = Obstacle::with_size(ObstacleKind::Tower, Vec2::new(30.0, 80.0), INIT_SPEED);
        let before = ob.clone();
        ob.update(INIT_SPEED);
        assert!(ob.pos.x < before.pos.x);
        assert_eq!(ob.pos.y, before.pos.y);
        assert_eq!(ob.size, before.size);
    }

    #[test]
    fn test_offscreen_boundary() {
        let mut ob = Obstacle::with_size(ObstacleKind::Archer, Vec2::new(28.0, 46.0), INIT_SPEED);
        // Right edge exactly at the margin: still on screen
        ob.pos.x = -38.0;
        assert!(!ob.offscreen());
        ob.pos.x = -38.5;
        assert!(ob.offscreen());
    }
}
