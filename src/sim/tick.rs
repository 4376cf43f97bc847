//! Per-frame simulation tick
//!
//! Drives the Running/GameOver state machine. One call per rendered frame.

use super::collision::first_overlap;
use super::state::{GameEvent, GameState, Phase};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Jump key went down this frame (space/up)
    pub jump_pressed: bool,
    /// Duck key is held (down)
    pub duck_held: bool,
    /// Confirm key went down this frame (enter)
    pub confirm_pressed: bool,
}

impl TickInput {
    /// Whether this frame's input asks to start a new run
    #[inline]
    pub fn wants_restart(&self) -> bool {
        self.jump_pressed || self.confirm_pressed
    }
}

/// Advance the game state by one frame of `dt_ms` milliseconds
///
/// Running frames go, in order: input, actor, scenery, spawner, obstacle
/// motion, pruning, collision, score and speed ramp, day/night. A collision
/// skips the score step but the day/night timer still advances. GameOver
/// frames only watch for a restart.
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match state.phase {
        Phase::GameOver => {
            if input.wants_restart() {
                events.push(state.restart());
                log::info!("Run restarted");
            }
            return events;
        }
        Phase::Running => {}
    }

    // Actor
    state.actor.handle_input(input);
    state.actor.update(dt_ms);

    // Scenery
    state
        .world
        .update(state.speed, state.cycle.is_day, &mut state.rng);

    // Spawner
    if let Some(obstacle) = state.spawner.update(dt_ms, state.speed, &mut state.rng) {
        events.push(GameEvent::Spawned(obstacle.kind));
        state.obstacles.push(obstacle);
    }

    // Obstacles
    for obstacle in &mut state.obstacles {
        obstacle.update(state.speed);
    }
    state.obstacles.retain(|o| !o.offscreen());

    // Collision, else score and difficulty
    let actor_rect = state.actor.rect();
    if first_overlap(&actor_rect, state.obstacles.iter().map(|o| o.rect())).is_some() {
        let event = state.end_run();
        log::info!(
            "Game over: score {} (best {})",
            state.score,
            state.high_score
        );
        events.push(event);
    } else if let Some(speed) = state.add_point() {
        log::debug!("Speed up to {:.1} at score {}", speed, state.score);
        events.push(GameEvent::SpeedUp { speed });
    }

    // Day/night
    if state.cycle.advance(dt_ms) {
        events.push(GameEvent::PhaseFlip {
            is_day: state.cycle.is_day,
        });
    }

    events
}
