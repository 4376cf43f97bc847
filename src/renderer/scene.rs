//! Scene composition
//!
//! Draw order per frame: sky, sun or moon, clouds or stars, ground, actor,
//! obstacles, HUD, then the game-over banner when the run has ended.

use glam::Vec2;

use super::palette::Palette;
use super::pose::{LEG_WIDTH, actor_pose, archer_bow, archer_string, rock_outline, tower_crenels};
use super::{Canvas, Rgb, TextSize, polyline};
use crate::consts::VIEW_WIDTH;
use crate::sim::{Actor, Celestial, CelestialKind, Cloud, GameState, Ground, Obstacle, ObstacleKind, Starfield};

pub const CONTROLS_HINT: &str = "Space/Up: Jump   Down: Duck   Enter: Restart";
pub const GAME_OVER_TEXT: &str = "GAME OVER";
pub const RESTART_PROMPT: &str = "Press Space/Up/Enter to restart";

/// Draw one complete frame
pub fn draw_frame<C: Canvas + ?Sized>(canvas: &mut C, state: &GameState, show_hint: bool) {
    let is_day = state.cycle.is_day;
    let palette = Palette::for_cycle(is_day);

    canvas.fill(palette.sky);
    draw_celestial(canvas, &state.cycle.celestial(), &palette);
    if is_day {
        for cloud in &state.world.clouds {
            draw_cloud(canvas, cloud, palette.cloud);
        }
    } else {
        draw_stars(canvas, &state.world.stars, palette.star);
    }

    draw_ground(canvas, &state.world.ground, palette.ground);
    draw_actor(canvas, &state.actor, &palette);
    for obstacle in &state.obstacles {
        draw_obstacle(canvas, obstacle, palette.obstacle);
    }

    draw_hud(canvas, state.score, state.high_score, show_hint, palette.text);
    if state.is_game_over() {
        draw_game_over(canvas, palette.text);
    }
}

fn draw_celestial<C: Canvas + ?Sized>(canvas: &mut C, body: &Celestial, palette: &Palette) {
    canvas.circle(body.center, body.radius, palette.celestial);
    if body.kind == CelestialKind::Moon {
        // Bite out a crescent with the sky color
        canvas.circle(body.center - Vec2::new(4.0, 0.0), body.radius - 2.0, palette.sky);
    }
}

fn draw_cloud<C: Canvas + ?Sized>(canvas: &mut C, cloud: &Cloud, color: Rgb) {
    let p = cloud.pos.trunc();
    canvas.circle(p, 12.0, color);
    canvas.circle(p + Vec2::new(14.0, 4.0), 10.0, color);
    canvas.circle(p + Vec2::new(-12.0, 6.0), 8.0, color);
}

fn draw_stars<C: Canvas + ?Sized>(canvas: &mut C, stars: &Starfield, color: Rgb) {
    for point in &stars.points {
        canvas.circle(point.as_vec2(), 1.0, color);
    }
}

fn draw_ground<C: Canvas + ?Sized>(canvas: &mut C, ground: &Ground, color: Rgb) {
    for seg in &ground.segments {
        canvas.fill_rect(seg.rect(), color);
    }
}

fn draw_actor<C: Canvas + ?Sized>(canvas: &mut C, actor: &Actor, palette: &Palette) {
    let pose = actor_pose(actor);
    canvas.fill_rect(pose.body, palette.figure);
    canvas.fill_rect(pose.headband, palette.accent);
    canvas.fill_rect(pose.eye, palette.eye);
    for leg in &pose.legs {
        canvas.line(leg.hip, leg.knee, LEG_WIDTH, palette.figure);
        canvas.line(leg.knee, leg.ankle, LEG_WIDTH, palette.figure);
        canvas.line(leg.ankle, leg.toe, LEG_WIDTH, palette.figure);
    }
    for arm in pose.arms {
        canvas.fill_rect(arm, palette.figure);
    }
}

fn draw_obstacle<C: Canvas + ?Sized>(canvas: &mut C, obstacle: &Obstacle, color: Rgb) {
    let rect = obstacle.rect();
    match obstacle.kind {
        ObstacleKind::Archer => {
            canvas.fill_rect(rect, color);
            polyline(canvas, &archer_bow(&rect), 2.0, color);
            let (top, bottom) = archer_string(&rect);
            canvas.line(top, bottom, 1.0, color);
        }
        ObstacleKind::Tower => {
            canvas.fill_rect(rect, color);
            for crenel in tower_crenels(&rect) {
                canvas.fill_rect(crenel, color);
            }
        }
        ObstacleKind::Rock => {
            canvas.polygon(&rock_outline(&rect), color);
        }
    }
}

fn draw_hud<C: Canvas + ?Sized>(canvas: &mut C, score: u32, high_score: u32, show_hint: bool, color: Rgb) {
    canvas.text(
        Vec2::new(VIEW_WIDTH - 160.0, 12.0),
        &format!("Score: {:05}", score),
        TextSize::Small,
        color,
    );
    canvas.text(
        Vec2::new(VIEW_WIDTH - 160.0, 32.0),
        &format!("HI: {:05}", high_score),
        TextSize::Small,
        color,
    );
    if show_hint {
        canvas.text(Vec2::new(12.0, 12.0), CONTROLS_HINT, TextSize::Small, color);
    }
}

fn draw_game_over<C: Canvas + ?Sized>(canvas: &mut C, color: Rgb) {
    let lines = [
        (GAME_OVER_TEXT, TextSize::Large, 110.0),
        (RESTART_PROMPT, TextSize::Small, 148.0),
    ];
    for (text, size, y) in lines {
        let x = (VIEW_WIDTH / 2.0 - canvas.text_width(text, size) / 2.0).trunc();
        canvas.text(Vec2::new(x, y), text, size, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recording::{DrawCall, RecordingCanvas};

    fn first_index(calls: &[DrawCall], pred: impl Fn(&DrawCall) -> bool) -> usize {
        calls.iter().position(pred).expect("draw call missing")
    }

    #[test]
    fn test_day_frame_order() {
        let mut state = GameState::new(8);
        state.obstacles.push(Obstacle::with_size(ObstacleKind::Rock, Vec2::new(20.0, 16.0), 6.2));
        let mut canvas = RecordingCanvas::default();
        draw_frame(&mut canvas, &state, true);

        let day = Palette::day();
        let calls = &canvas.calls;
        assert_eq!(calls[0], DrawCall::Fill(day.sky));
        assert!(matches!(calls[1], DrawCall::Circle(_, r, c) if r == 16.0 && c == day.celestial));
        let cloud = first_index(calls, |c| matches!(c, DrawCall::Circle(_, _, col) if *col == day.cloud));
        let ground = first_index(calls, |c| matches!(c, DrawCall::Rect(_, col) if *col == day.ground));
        let actor = first_index(calls, |c| matches!(c, DrawCall::Rect(r, _) if *r == state.actor.rect()));
        let rock = first_index(calls, |c| matches!(c, DrawCall::Polygon(..)));
        let hud = first_index(calls, |c| matches!(c, DrawCall::Text(..)));
        assert!(cloud < ground && ground < actor && actor < rock && rock < hud);

        assert_eq!(
            canvas.texts(),
            vec!["Score: 00000", "HI: 00000", CONTROLS_HINT]
        );
    }

    #[test]
    fn test_night_frame_uses_night_palette() {
        let mut state = GameState::new(9);
        state.cycle.is_day = false;
        let mut canvas = RecordingCanvas::default();
        draw_frame(&mut canvas, &state, false);

        let night = Palette::night();
        assert_eq!(canvas.calls[0], DrawCall::Fill(night.sky));
        // Moon plus crescent cut-out
        assert!(matches!(canvas.calls[2], DrawCall::Circle(_, _, c) if c == night.sky));
        let stars = canvas
            .calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Circle(_, r, col) if *r == 1.0 && *col == night.star))
            .count();
        assert_eq!(stars, state.world.stars.points.len());
        assert!(!canvas.calls.iter().any(|c| matches!(c, DrawCall::Circle(_, _, col) if *col == night.cloud)));
        assert!(canvas.calls.iter().any(|c| matches!(c, DrawCall::Rect(_, col) if *col == night.figure)));
        assert_eq!(canvas.texts(), vec!["Score: 00000", "HI: 00000"]);
    }

    #[test]
    fn test_game_over_banner_centered() {
        let mut state = GameState::new(10);
        state.score = 321;
        state.end_run();
        let mut canvas = RecordingCanvas::default();
        draw_frame(&mut canvas, &state, true);

        let texts = canvas.texts();
        assert_eq!(texts[0], "Score: 00321");
        assert_eq!(texts[1], "HI: 00321");
        assert_eq!(&texts[3..], &[GAME_OVER_TEXT, RESTART_PROMPT]);

        let banner = canvas
            .calls
            .iter()
            .find_map(|c| match c {
                DrawCall::Text(pos, t, _) if t == GAME_OVER_TEXT => Some(*pos),
                _ => None,
            })
            .unwrap();
        // 9 chars * 16 wide = 144
        assert_eq!(banner, Vec2::new(378.0, 110.0));
    }

    #[test]
    fn test_drawing_leaves_state_untouched() {
        let mut state = GameState::new(11);
        for _ in 0..30 {
            crate::sim::tick(&mut state, &Default::default(), crate::consts::FRAME_MS);
        }
        let actor = state.actor.clone();
        let obstacles = state.obstacles.clone();
        let world = state.world.clone();
        let mut canvas = RecordingCanvas::default();
        draw_frame(&mut canvas, &state, true);
        draw_frame(&mut canvas, &state, true);
        assert_eq!(state.actor, actor);
        assert_eq!(state.obstacles, obstacles);
        assert_eq!(state.world, world);
    }
}
