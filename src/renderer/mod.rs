//! Rendering module
//!
//! The scene is drawn through the `Canvas` trait, an explicit drawing context
//! in world coordinates. Drawing reads game state and never mutates it.

pub mod palette;
pub mod pose;
pub mod scene;

pub use palette::Palette;
pub use pose::{ActorPose, LegPose, actor_pose};
pub use scene::draw_frame;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Rect;

/// 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

/// Font size for text draw calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextSize {
    Small,
    Large,
}

/// Primitive draw calls the scene is built from
///
/// Coordinates are world units: x right, y down, origin top-left of the
/// `VIEW_WIDTH` x `VIEW_HEIGHT` viewport.
pub trait Canvas {
    /// Fill the whole viewport
    fn fill(&mut self, color: Rgb);
    /// Filled axis-aligned rectangle
    fn fill_rect(&mut self, rect: Rect, color: Rgb);
    /// Straight line of the given thickness
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgb);
    /// Filled circle
    fn circle(&mut self, center: Vec2, radius: f32, color: Rgb);
    /// Filled polygon
    fn polygon(&mut self, points: &[Vec2], color: Rgb);
    /// Text with its top-left corner at `pos`
    fn text(&mut self, pos: Vec2, text: &str, size: TextSize, color: Rgb);
    /// Width the text would take when drawn
    fn text_width(&self, text: &str, size: TextSize) -> f32;
}

/// Draw connected line segments through `points`
pub fn polyline<C: Canvas + ?Sized>(canvas: &mut C, points: &[Vec2], width: f32, color: Rgb) {
    for pair in points.windows(2) {
        canvas.line(pair[0], pair[1], width, color);
    }
}
