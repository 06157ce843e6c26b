//! Property tests for the simulation core

use glam::Vec2;
use pillar_flap::Tuning;
use pillar_flap::game_loop::{GameLoop, Host, ManualScheduler};
use pillar_flap::renderer::FrameState;
use pillar_flap::sim::{
    GameEvent, GamePhase, GameState, Obstacle, autopilot, collides, jump, spawn_burst, tick,
};
use proptest::prelude::*;

struct Blind;

/// No gravity and gaps that always contain the resting body
fn hover_tuning(spawn_interval_frames: u64) -> Tuning {
    Tuning {
        gravity: 0.0,
        spawn_interval_frames,
        top_height_min: 100,
        top_height_span: 100,
        ..Tuning::default()
    }
}

impl Host for Blind {
    fn render(&mut self, _frame: &FrameState<'_>) {}
}

proptest! {
    /// Score never decreases, whatever the player does
    #[test]
    fn score_is_monotonic(seed in any::<u64>(), presses in prop::collection::vec(any::<bool>(), 900)) {
        let mut state = GameState::new(seed);
        let mut last = 0;
        for (frame, &press) in presses.iter().enumerate() {
            let now = frame as f64 * 16.0;
            if press && autopilot::wants_jump(&state) {
                jump(&mut state, now);
            }
            tick(&mut state, now, 16.0);
            prop_assert!(state.score >= last);
            last = state.score;
        }
    }

    /// Score equals the number of obstacles that have scrolled past the body
    #[test]
    fn score_counts_cleared_obstacles(seed in any::<u64>(), frames in 1u64..3000) {
        let mut state = GameState::with_tuning(seed, hover_tuning(180));
        let mut scored_events = 0u64;
        for frame in 1..=frames {
            for event in tick(&mut state, frame as f64 * 16.0, 16.0) {
                if let GameEvent::Scored { score } = event {
                    scored_events += 1;
                    prop_assert_eq!(score as u64, scored_events);
                }
            }
        }
        // Spawned at x=600, scrolling 2 px a frame: cleared 291 frames later
        let cleared = (1..=frames / 180).filter(|k| frames - k * 180 >= 291).count() as u32;
        prop_assert_eq!(state.phase, GamePhase::Active);
        prop_assert_eq!(state.score, cleared);
    }

    /// Burst radius grows and opacity fades monotonically until removal
    #[test]
    fn burst_is_monotonic(steps in prop::collection::vec(0.0f64..60.0, 1..40)) {
        let tuning = Tuning::default();
        let mut burst = spawn_burst(Vec2::new(110.0, 220.0), 0.0, &tuning);
        let (mut radius, mut opacity) = (burst.radius, burst.opacity);
        let mut now = 0.0;
        for dt in steps {
            now += dt;
            burst.sample(now);
            prop_assert!(burst.radius >= radius);
            prop_assert!(burst.opacity <= opacity);
            prop_assert!(burst.radius <= 50.0 && burst.opacity >= 0.0);
            radius = burst.radius;
            opacity = burst.opacity;
        }
    }

    /// A body centred in a gap with room to spare never collides
    #[test]
    fn body_inside_gap_is_safe(top in 50.0f32..250.0, x in -200.0f32..400.0, offset in -69.0f32..69.0) {
        let obstacle = Obstacle::new(x, top, 180.0, 80.0);
        let mut state = GameState::new(0);
        state.body.pos.y = top + 90.0 + offset;
        prop_assert!(!collides(&state.body, &obstacle));
    }

    /// Obstacle count spawned across N frames is floor(N / interval)
    #[test]
    fn spawn_cadence_matches_interval(frames in 1u32..2000, interval in 1u64..400) {
        let mut state = GameState::with_tuning(9, hover_tuning(interval));
        let mut spawned = 0u64;
        for frame in 1..=frames {
            tick(&mut state, frame as f64 * 16.0, 16.0);
            if state.obstacles.last().is_some_and(|o| o.x == 600.0) {
                spawned += 1;
            }
        }
        prop_assert_eq!(state.phase, GamePhase::Active);
        prop_assert_eq!(spawned, frames as u64 / interval);
    }
}

#[test]
fn restart_matches_fresh_session() {
    let mut game = GameLoop::new(GameState::new(77), ManualScheduler::new(0.0), Blind);
    game.start(|_| {});
    for _ in 0..30 {
        game.on_jump_input();
        game.step(16.0);
    }
    while !game.state().is_over() {
        game.step(16.0);
    }

    game.restart();
    let fresh = GameState::new(77);
    let state = game.state();
    assert_eq!(state.phase, GamePhase::Active);
    assert_eq!(state.score, 0);
    assert_eq!(state.frame_count, 0);
    assert_eq!(state.body, fresh.body);
    assert!(state.obstacles.is_empty());
    assert!(state.bursts.is_empty());
}
