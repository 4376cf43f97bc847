//! Axis-aligned collision detection
//!
//! Every entity in the runner is boxed by an axis-aligned rectangle in world
//! space (y grows downward). Two boxes collide when their interiors overlap;
//! touching edges do not count.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left corner plus size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Check whether the interiors of two rectangles overlap
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Return the index of the first rect in `others` that overlaps `subject`
///
/// The scan stops at the first hit; callers that only care whether a hit
/// happened can test `is_some()`.
pub fn first_overlap<I>(subject: &Rect, others: I) -> Option<usize>
where
    I: IntoIterator<Item = Rect>,
{
    others.into_iter().position(|r| subject.intersects(&r))
}
