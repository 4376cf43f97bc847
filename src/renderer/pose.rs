//! Shape generation for the actor and obstacles
//!
//! Pure geometry derived from simulation state. Nothing here draws; the scene
//! turns these shapes into canvas calls.

use std::f32::consts::PI;

use glam::Vec2;

use crate::consts::{DUCK_HEIGHT, GROUND_Y, RUN_HEIGHT};
use crate::sim::{Actor, Rect};

const THIGH_LEN: i32 = 18;
const SHIN_LEN: i32 = 18;
const FOOT_LEN: i32 = 8;
/// Leg line thickness
pub const LEG_WIDTH: f32 = 4.0;

/// Knee/ankle offsets for the four run-cycle frames: forward, passing, back,
/// passing other
const LEG_OFFSETS: [(i32, i32); 4] = [(10, -6), (5, -2), (-8, 2), (2, -1)];

/// One articulated leg
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegPose {
    pub hip: Vec2,
    pub knee: Vec2,
    pub ankle: Vec2,
    /// Tip of the foot; the foot runs from `ankle` to `toe`
    pub toe: Vec2,
}

/// Full body pose for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct ActorPose {
    pub body: Rect,
    pub headband: Rect,
    pub eye: Rect,
    /// Left then right
    pub arms: [Rect; 2],
    /// Left then right
    pub legs: [LegPose; 2],
}

/// An arm placement: x offset and whether it swings forward
#[derive(Debug, Clone, Copy)]
struct Arm {
    dx: f32,
    /// Measure `dx` from the right edge instead of the left
    from_right: bool,
    forward: bool,
}

const fn arm(dx: f32, from_right: bool, forward: bool) -> Arm {
    Arm { dx, from_right, forward }
}

/// Leg phases and arm placements per run-cycle frame
const RUN_CYCLE: [((usize, usize), [Arm; 2]); 4] = [
    ((0, 2), [arm(-4.0, false, true), arm(-2.0, true, false)]),
    ((1, 3), [arm(-2.0, false, true), arm(-6.0, true, false)]),
    ((2, 0), [arm(-6.0, false, false), arm(0.0, true, true)]),
    ((3, 1), [arm(-2.0, false, true), arm(-6.0, true, false)]),
];
const JUMP_POSE: ((usize, usize), [Arm; 2]) =
    ((1, 3), [arm(-4.0, false, false), arm(-3.0, true, false)]);
const DUCK_POSE: ((usize, usize), [Arm; 2]) =
    ((1, 1), [arm(4.0, false, false), arm(-12.0, true, false)]);

/// Compute the actor's pose from its current state
pub fn actor_pose(actor: &Actor) -> ActorPose {
    let x = actor.pos.x;
    let y = actor.pos.y;
    let w = actor.width;
    let h = actor.height;
    let tall = h == RUN_HEIGHT;

    let band_y = if tall { y + 10.0 } else { y + 6.0 };
    let arm_y = if tall { y + 16.0 } else { y + 10.0 };
    let hip_y = y + h - 18.0;
    let hips = [x + 12.0, x + w - 12.0];
    let plant = actor.is_running();

    let ((left_phase, right_phase), arms) = if actor.is_jumping {
        JUMP_POSE
    } else if h == DUCK_HEIGHT {
        DUCK_POSE
    } else {
        RUN_CYCLE[actor.leg_frame as usize % RUN_CYCLE.len()]
    };

    let place_arm = |a: Arm| {
        let base = if a.from_right { x + w } else { x };
        arm_rect(base + a.dx, arm_y, a.forward)
    };

    ActorPose {
        body: actor.rect(),
        headband: Rect::new(x + 6.0, band_y, w - 12.0, 4.0),
        eye: Rect::new(x + 24.0, band_y + 6.0, 8.0, 3.0),
        arms: [place_arm(arms[0]), place_arm(arms[1])],
        legs: [
            leg(Vec2::new(hips[0], hip_y), left_phase, false, plant),
            leg(Vec2::new(hips[1], hip_y), right_phase, true, plant),
        ],
    }
}

fn arm_rect(x: f32, y: f32, forward: bool) -> Rect {
    let (w, h) = if forward { (7.0, 12.0) } else { (6.0, 10.0) };
    Rect::new(x.trunc(), y.trunc(), w, h)
}

/// Thigh, shin and foot from a hip point
///
/// `mirror` flips the stride for the far leg; `plant` keeps the ankle above
/// the ground line.
fn leg(hip: Vec2, phase: usize, mirror: bool, plant: bool) -> LegPose {
    let (mut fx, mut fy) = LEG_OFFSETS[phase % LEG_OFFSETS.len()];
    if mirror {
        fx = -fx;
        fy = (-fy).div_euclid(2);
    }

    let hx = hip.x as i32;
    let hy = hip.y as i32;
    let kx = hx + (fx as f32 * 0.5) as i32;
    let ky = hy + THIGH_LEN + fy;
    let ax = kx + (fx as f32 * 0.4) as i32;
    let mut ay = ky + SHIN_LEN - fy;
    if plant {
        ay = ay.min(GROUND_Y as i32 - 2);
    }

    let dir = if mirror { -1 } else { 1 };
    LegPose {
        hip: Vec2::new(hx as f32, hy as f32),
        knee: Vec2::new(kx as f32, ky as f32),
        ankle: Vec2::new(ax as f32, ay as f32),
        toe: Vec2::new((ax + dir * FOOT_LEN) as f32, ay as f32),
    }
}

/// Five-point outline of a rock
pub fn rock_outline(r: &Rect) -> [Vec2; 5] {
    [
        Vec2::new(r.x, r.y + r.h),
        Vec2::new(r.x + r.w * 0.2, r.y + r.h * 0.4),
        Vec2::new(r.x + r.w * 0.6, r.y + r.h * 0.2),
        Vec2::new(r.x + r.w, r.y + r.h),
        Vec2::new(r.x + r.w * 0.5, r.y + r.h * 0.8),
    ]
}

/// Crenellations along the top of a tower
pub fn tower_crenels(r: &Rect) -> Vec<Rect> {
    const STEP: usize = 8;
    let start = r.x as i32;
    let end = (r.x + r.w) as i32;
    (start..end)
        .step_by(STEP)
        .map(|i| Rect::new(i as f32, r.y - 6.0, (STEP / 2) as f32, 6.0))
        .collect()
}

/// Bow held at the archer's front: the left half of an ellipse
pub fn archer_bow(r: &Rect) -> Vec<Vec2> {
    const SEGMENTS: usize = 8;
    let center = Vec2::new(r.x + 2.0, r.y + 23.0);
    let (rx, ry) = (10.0, 13.0);
    (0..=SEGMENTS)
        .map(|i| {
            let theta = PI / 2.0 + PI * i as f32 / SEGMENTS as f32;
            Vec2::new(center.x + rx * theta.cos(), center.y - ry * theta.sin())
        })
        .collect()
}

/// Bowstring endpoints
pub fn archer_string(r: &Rect) -> (Vec2, Vec2) {
    (
        Vec2::new(r.x + 2.0, r.y + 10.0),
        Vec2::new(r.x + 2.0, r.y + 36.0),
    )
}
