//! Scrolling world: ground strip, clouds and stars
//!
//! The ground is a strip of short segments kept in left-to-right order;
//! segments fall off the front and new ones are appended at the back so the
//! viewport is always covered. Clouds drift and wrap, stars only shimmer.

use std::collections::VecDeque;

use glam::{IVec2, Vec2};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// One piece of the textured ground strip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundSegment {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl GroundSegment {
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    /// Roll a segment starting at `x`
    fn roll(x: f32, rng: &mut impl Rng) -> Self {
        Self {
            x,
            y: GROUND_Y + rng.random_range(0..=2) as f32,
            w: rng.random_range(30..=70) as f32,
            h: rng.random_range(2..=6) as f32,
        }
    }
}

fn roll_gap(rng: &mut impl Rng) -> f32 {
    rng.random_range(8..=GROUND_MAX_GAP) as f32
}

/// The ground strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ground {
    pub segments: VecDeque<GroundSegment>,
}

impl Ground {
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut ground = Self {
            segments: VecDeque::new(),
        };
        ground.reset(rng);
        ground
    }

    /// Lay a fresh strip from x = 0 past the right edge
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.segments.clear();
        let mut x = 0.0;
        while x < GROUND_INITIAL_FILL {
            let seg = GroundSegment::roll(x, rng);
            x += seg.w + roll_gap(rng);
            self.segments.push_back(seg);
        }
    }

    /// Right edge of the last segment
    pub fn right_edge(&self) -> f32 {
        self.segments.back().map(GroundSegment::right).unwrap_or(0.0)
    }

    /// Scroll left at a fraction of the world speed and recycle segments
    pub fn update(&mut self, speed: f32, rng: &mut impl Rng) {
        let dx = speed * GROUND_SCROLL_FACTOR;
        for seg in &mut self.segments {
            seg.x -= dx;
        }

        while self
            .segments
            .front()
            .is_some_and(|s| s.right() < GROUND_DISCARD_X)
        {
            self.segments.pop_front();
        }

        let mut last_x = self.right_edge();
        while last_x < GROUND_REFILL_TO {
            let start = last_x + roll_gap(rng);
            let seg = GroundSegment::roll(start, rng);
            last_x = seg.right();
            self.segments.push_back(seg);
        }
    }
}

/// A drifting cloud (daytime decoration)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cloud {
    pub pos: Vec2,
    /// Leftward drift per frame, fixed until the cloud wraps
    pub speed: f32,
}

impl Cloud {
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            pos: Vec2::new(
                rng.random_range(0..=VIEW_WIDTH as i32) as f32,
                rng.random_range(40..=130) as f32,
            ),
            speed: rng.random_range(0.25..0.6),
        }
    }

    pub fn update(&mut self, rng: &mut impl Rng) {
        self.pos.x -= self.speed;
        if self.pos.x < -40.0 {
            self.pos.x = VIEW_WIDTH + rng.random_range(0..=160) as f32;
            self.pos.y = rng.random_range(40..=130) as f32;
            self.speed = rng.random_range(0.25..0.6);
        }
    }
}

/// Night sky star points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Starfield {
    pub points: Vec<IVec2>,
}

impl Starfield {
    pub fn new(count: usize, rng: &mut impl Rng) -> Self {
        let points = (0..count.max(1))
            .map(|_| {
                IVec2::new(
                    rng.random_range(0..=VIEW_WIDTH as i32),
                    rng.random_range(30..=170),
                )
            })
            .collect();
        Self { points }
    }

    /// Nudge every seventh star by up to one pixel per axis
    pub fn twinkle(&mut self, rng: &mut impl Rng) {
        for point in self.points.iter_mut().step_by(TWINKLE_STRIDE) {
            point.x += rng.random_range(-1..=1);
            point.y += rng.random_range(-1..=1);
        }
    }
}

/// All scrolling scenery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub ground: Ground,
    pub clouds: Vec<Cloud>,
    pub stars: Starfield,
}

impl World {
    pub fn new(cloud_count: usize, star_count: usize, rng: &mut impl Rng) -> Self {
        Self {
            ground: Ground::new(rng),
            clouds: (0..cloud_count.max(1)).map(|_| Cloud::new(rng)).collect(),
            stars: Starfield::new(star_count, rng),
        }
    }

    /// Scroll the ground and drift the clouds; stars twinkle only at night
    pub fn update(&mut self, speed: f32, is_day: bool, rng: &mut impl Rng) {
        self.ground.update(speed, rng);
        for cloud in &mut self.clouds {
            cloud.update(rng);
        }
        if !is_day {
            self.stars.twinkle(rng);
        }
    }
}
