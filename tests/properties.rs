//! Property tests for the simulation invariants

use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use ninja_runner::consts::*;
use ninja_runner::sim::{
    Actor, GameEvent, GameState, Ground, Obstacle, ObstacleKind, TickInput, tick,
};

fn input_strategy() -> impl Strategy<Value = TickInput> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(jump_pressed, duck_held, confirm_pressed)| TickInput {
            jump_pressed,
            duck_held,
            confirm_pressed,
        },
    )
}

fn assert_actor_invariant(actor: &Actor) -> Result<(), TestCaseError> {
    prop_assert!(actor.height == RUN_HEIGHT || actor.height == DUCK_HEIGHT);
    let bottom = actor.pos.y + actor.height;
    prop_assert!(bottom <= GROUND_Y + 1e-3, "actor below ground: {bottom}");
    if !actor.is_jumping {
        prop_assert!((bottom - GROUND_Y).abs() < 1e-3, "grounded actor floating: {bottom}");
    }
    if actor.is_ducking {
        prop_assert!(!actor.is_jumping);
    }
    prop_assert!((actor.leg_frame as usize) < 4);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn actor_stays_on_or_above_ground(
        inputs in prop::collection::vec(input_strategy(), 1..300),
    ) {
        let mut actor = Actor::new();
        for input in &inputs {
            actor.handle_input(input);
            actor.update(FRAME_MS);
            assert_actor_invariant(&actor)?;
        }
    }

    #[test]
    fn speed_ramp_bounded_and_monotonic(
        seed in any::<u64>(),
        inputs in prop::collection::vec(input_strategy(), 1..600),
    ) {
        let mut state = GameState::new(seed);
        let mut last_speed = state.speed;
        for input in &inputs {
            let events = tick(&mut state, input, FRAME_MS);
            if events.contains(&GameEvent::Restarted) {
                prop_assert_eq!(state.speed, INIT_SPEED);
                prop_assert_eq!(state.score, 0);
                last_speed = state.speed;
            }
            prop_assert!(state.speed >= INIT_SPEED && state.speed <= MAX_SPEED);
            prop_assert!(state.speed >= last_speed);
            last_speed = state.speed;

            prop_assert!(state.high_score >= state.score || state.is_running());
            prop_assert!(state.obstacles.iter().all(|o| !o.offscreen()));
            assert_actor_invariant(&state.actor)?;
        }
    }

    #[test]
    fn obstacles_move_left_until_removed(
        kind in prop::sample::select(ObstacleKind::ALL.to_vec()),
        seed in any::<u64>(),
        speed in INIT_SPEED..=MAX_SPEED,
    ) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut obstacle = Obstacle::spawn(kind, speed, &mut rng);
        prop_assert_eq!(obstacle.pos.x, OBSTACLE_SPAWN_X);
        prop_assert_eq!(obstacle.pos.y + obstacle.size.y, GROUND_Y);

        let mut frames = 0;
        while !obstacle.offscreen() {
            let before = obstacle.pos.x;
            obstacle.update(speed);
            prop_assert!(obstacle.pos.x < before);
            prop_assert!((before - obstacle.pos.x - obstacle.effective_speed(speed)).abs() < 1e-3);
            frames += 1;
            prop_assert!(frames < 1000, "obstacle never left the screen");
        }
        prop_assert!(obstacle.pos.x + obstacle.size.x < -OFFSCREEN_MARGIN);
    }

    #[test]
    fn ground_keeps_covering_view(
        seed in any::<u64>(),
        speeds in prop::collection::vec(INIT_SPEED..=MAX_SPEED, 1..400),
    ) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut ground = Ground::new(&mut rng);
        for speed in speeds {
            ground.update(speed, &mut rng);

            prop_assert!(ground.right_edge() >= GROUND_REFILL_TO);
            let first = &ground.segments[0];
            prop_assert!(first.right() >= GROUND_DISCARD_X);
            prop_assert!(first.x <= GROUND_MAX_GAP as f32);
            for pair in ground.segments.iter().collect::<Vec<_>>().windows(2) {
                let gap = pair[1].x - pair[0].right();
                prop_assert!(gap >= 8.0 - 0.05 && gap <= GROUND_MAX_GAP as f32 + 0.05, "gap {gap}");
            }
        }
    }

    #[test]
    fn same_seed_same_run(
        seed in any::<u64>(),
        inputs in prop::collection::vec(input_strategy(), 1..200),
    ) {
        let mut a = GameState::new(seed);
        let mut b = GameState::new(seed);
        for input in &inputs {
            let ea = tick(&mut a, input, FRAME_MS);
            let eb = tick(&mut b, input, FRAME_MS);
            prop_assert_eq!(ea, eb);
        }
        prop_assert_eq!(a.score, b.score);
        prop_assert_eq!(a.actor, b.actor);
        prop_assert_eq!(a.obstacles, b.obstacles);
        prop_assert_eq!(a.world, b.world);
    }
}
