//! Per-frame simulation step
//!
//! One call advances effects, motion, spawning, scoring and collision in a
//! fixed order and reports what happened as [`GameEvent`]s.

use glam::Vec2;

use super::collision::{collides_any, hits_world_bounds};
use super::effects::{spawn_burst, tick_bursts};
use super::physics::{advance_obstacles, apply_jump, integrate};
use super::scoring::update_score;
use super::spawner::{maybe_spawn, prune};
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the game by one frame
///
/// `now` is the host clock in ms (drives bursts); `dt_ms` is the time since
/// the previous frame (drives obstacle scrolling only).
pub fn tick(state: &mut GameState, now: f64, dt_ms: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Bursts animate out even after the run ends
    tick_bursts(&mut state.bursts, now);

    if state.phase != GamePhase::Active {
        return events;
    }

    let tuning = &state.tuning;

    integrate(&mut state.body, tuning.gravity);
    advance_obstacles(
        &mut state.obstacles,
        tuning.obstacle_speed,
        dt_ms,
        tuning.reference_frame_ms,
    );
    prune(&mut state.obstacles);

    state.frame_count += 1;
    if let Some(obstacle) = maybe_spawn(state.frame_count, tuning, &mut state.rng) {
        state.obstacles.push(obstacle);
    }

    let passed = update_score(&mut state.obstacles, state.body.pos.x);
    if passed > 0 {
        state.score += passed;
        events.push(GameEvent::Scored { score: state.score });
    }

    let crashed = hits_world_bounds(&state.body, tuning.field_height)
        || collides_any(&state.body, &state.obstacles);
    if crashed {
        state.phase = GamePhase::Over;
        log::info!(
            "Game over at frame {} with score {}",
            state.frame_count,
            state.score
        );
        events.push(GameEvent::GameOver {
            final_score: state.score,
        });
    }

    events
}

/// Apply a jump command immediately
///
/// Returns `None` (and changes nothing) once the run is over.
pub fn jump(state: &mut GameState, now: f64) -> Option<GameEvent> {
    if state.is_over() {
        log::debug!("Jump ignored: game over");
        return None;
    }

    let tuning = &state.tuning;
    apply_jump(&mut state.body, tuning.jump_velocity);

    let origin = state.body.pos + Vec2::new(tuning.burst_offset_x, tuning.burst_offset_y);
    state.bursts.push(spawn_burst(origin, now, tuning));

    Some(GameEvent::Jumped)
}
