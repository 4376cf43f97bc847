//! The player-controlled ninja
//!
//! Vertical motion is integrated per frame under constant gravity; the run
//! cycle is advanced by accumulated milliseconds. Height switches between the
//! run and duck profiles with the feet kept on the ground line.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::tick::TickInput;
use crate::consts::*;

/// Number of frames in the run cycle
pub const LEG_FRAMES: u8 = 4;

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Top-left corner in world space
    pub pos: Vec2,
    pub width: f32,
    /// Always `RUN_HEIGHT` or `DUCK_HEIGHT`
    pub height: f32,
    /// Vertical velocity (negative is up)
    pub vel_y: f32,
    pub is_jumping: bool,
    pub is_ducking: bool,
    /// Run cycle frame, 0..LEG_FRAMES
    pub leg_frame: u8,
    /// Time accumulated toward the next run cycle frame (ms)
    pub anim_time: f32,
}

impl Default for Actor {
    fn default() -> Self {
        Self::new()
    }
}

impl Actor {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(ACTOR_X, GROUND_Y - RUN_HEIGHT),
            width: ACTOR_WIDTH,
            height: RUN_HEIGHT,
            vel_y: 0.0,
            is_jumping: false,
            is_ducking: false,
            leg_frame: 0,
            anim_time: 0.0,
        }
    }

    /// Return to the freshly constructed state
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Bounding box used for collision
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    /// Not airborne
    #[inline]
    pub fn is_grounded(&self) -> bool {
        !self.is_jumping
    }

    /// Grounded at full height (the pose that runs)
    #[inline]
    pub fn is_running(&self) -> bool {
        !self.is_jumping && self.height == RUN_HEIGHT
    }

    /// Apply this frame's controls
    ///
    /// A jump starts only on a fresh press while grounded. Ducking is held and
    /// only honoured on the ground.
    pub fn handle_input(&mut self, input: &TickInput) {
        if input.jump_pressed && self.is_grounded() {
            // Launch from the run profile, feet where they are
            self.set_height(RUN_HEIGHT);
            self.is_jumping = true;
            self.vel_y = JUMP_VELOCITY;
        }
        self.is_ducking = input.duck_held && self.is_grounded();
    }

    /// Advance physics one frame; `dt_ms` drives the run cycle only
    pub fn update(&mut self, dt_ms: f32) {
        if self.is_jumping {
            self.pos.y += self.vel_y;
            self.vel_y += GRAVITY;

            let standing_y = GROUND_Y - self.height;
            if self.pos.y >= standing_y {
                self.pos.y = standing_y;
                self.is_jumping = false;
                self.vel_y = 0.0;
            }
        }

        let target_height = if self.is_ducking && !self.is_jumping {
            DUCK_HEIGHT
        } else {
            RUN_HEIGHT
        };
        self.set_height(target_height);

        if !self.is_jumping && !self.is_ducking {
            self.anim_time += dt_ms;
            if self.anim_time > LEG_FRAME_MS {
                self.leg_frame = (self.leg_frame + 1) % LEG_FRAMES;
                self.anim_time = 0.0;
            }
        }
    }

    /// Switch profile, keeping the bottom edge where it was
    fn set_height(&mut self, height: f32) {
        if height != self.height {
            self.pos.y += self.height - height;
            self.height = height;
        }
    }
}
