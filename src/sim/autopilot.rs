//! Attract-mode controller
//!
//! Decides once per frame whether to jump. It aims for a line near the bottom
//! of the next gap and jumps whenever the body has sunk below it and stopped
//! rising; a jump's arc then carries it back up through the gap.

use super::state::GameState;

/// Distance kept between the aim line and the bottom barrier
const AIM_ABOVE_GAP_BOTTOM: f32 = 40.0;

/// Vertical line the body should stay above
pub fn aim_line(state: &GameState) -> f32 {
    let body = &state.body;
    state
        .obstacles
        .iter()
        .find(|o| o.right() > body.left())
        .map(|o| o.gap_bottom() - AIM_ABOVE_GAP_BOTTOM)
        .unwrap_or(state.tuning.field_height / 2.0)
}

/// True if the controller wants to jump this frame
pub fn wants_jump(state: &GameState) -> bool {
    if state.is_over() {
        return false;
    }
    state.body.pos.y > aim_line(state) && state.body.velocity >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Obstacle;
    use crate::sim::tick::{jump, tick};

    #[test]
    fn test_aims_at_next_gap() {
        let mut state = GameState::new(1);
        assert_eq!(aim_line(&state), 250.0);

        // Already behind the body: ignored
        state.obstacles.push(Obstacle::new(-10.0, 50.0, 180.0, 80.0));
        state.obstacles.push(Obstacle::new(300.0, 100.0, 180.0, 80.0));
        assert_eq!(aim_line(&state), 240.0);
    }

    #[test]
    fn test_no_jump_while_rising() {
        let mut state = GameState::new(1);
        state.body.pos.y = 300.0;
        state.body.velocity = -1.0;
        assert!(!wants_jump(&state));
        state.body.velocity = 0.5;
        assert!(wants_jump(&state));
    }

    #[test]
    fn test_autopilot_clears_obstacles() {
        let mut state = GameState::new(2024);
        for frame in 1..=1500u32 {
            let now = frame as f64 * 16.0;
            if wants_jump(&state) {
                jump(&mut state, now);
            }
            tick(&mut state, now, 16.0);
        }
        assert!(!state.is_over());
        assert!(state.score >= 5);
    }
}
