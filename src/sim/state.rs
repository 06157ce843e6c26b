//! Game state and core simulation types
//!
//! The session state is a single owned structure; every subsystem function
//! borrows the pieces it needs from it for the duration of one call.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Gravity, jumps, obstacles, scoring and collisions all run
    Active,
    /// Run ended; only effects keep animating
    Over,
}

/// Something the host may want to react to (sound, HUD, persistence)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A jump was applied
    Jumped,
    /// An obstacle was cleared; carries the new total
    Scored { score: u32 },
    /// The run just ended (emitted once per run)
    GameOver { final_score: u32 },
}

/// The player-controlled character
///
/// `pos.x` never changes during a run; obstacles move instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub radius: f32,
    /// Vertical velocity in px per tick (positive is down)
    pub velocity: f32,
}

impl Body {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            radius,
            velocity: 0.0,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// A top/bottom barrier pair with a gap between them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Height of the top barrier (its lower edge)
    pub top_height: f32,
    pub gap: f32,
    pub width: f32,
    /// Already counted toward the score
    pub passed: bool,
}

impl Obstacle {
    pub fn new(x: f32, top_height: f32, gap: f32, width: f32) -> Self {
        Self {
            x,
            top_height,
            gap,
            width,
            passed: false,
        }
    }

    /// Right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Upper edge of the bottom barrier
    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.top_height + self.gap
    }
}

/// A short-lived expanding ring spawned by a jump (cosmetic only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Burst {
    pub origin: Vec2,
    pub radius: f32,
    pub opacity: f32,
    /// Host timestamp (ms) at creation
    pub started_at: f64,
    pub duration_ms: f32,
    pub start_radius: f32,
    pub growth: f32,
    pub start_opacity: f32,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    /// Gameplay constants for this session
    pub tuning: Tuning,
    /// Source for obstacle placement
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u32,
    /// Active ticks since the run started (drives spawn cadence)
    pub frame_count: u64,
    pub body: Body,
    /// Oldest (leftmost) first
    pub obstacles: Vec<Obstacle>,
    /// Visual bursts (not gameplay-affecting)
    pub bursts: Vec<Burst>,
}

impl GameState {
    /// Create a new session with reference tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new session with custom tuning
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let body = Self::initial_body(&tuning);
        Self {
            seed,
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Active,
            score: 0,
            frame_count: 0,
            body,
            obstacles: Vec::new(),
            bursts: Vec::new(),
        }
    }

    fn initial_body(tuning: &Tuning) -> Body {
        Body::new(
            Vec2::new(tuning.body_start_x, tuning.body_start_y),
            tuning.body_radius,
        )
    }

    /// Return every owned value to its start-of-run state.
    ///
    /// The RNG keeps its stream so consecutive runs get different layouts.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Active;
        self.score = 0;
        self.frame_count = 0;
        self.body = Self::initial_body(&self.tuning);
        self.obstacles.clear();
        self.bursts.clear();
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::Active);
        assert_eq!(state.score, 0);
        assert_eq!(state.frame_count, 0);
        assert_eq!(state.body.pos, Vec2::new(100.0, 250.0));
        assert_eq!(state.body.radius, 20.0);
        assert_eq!(state.body.velocity, 0.0);
        assert!(state.obstacles.is_empty());
        assert!(state.bursts.is_empty());
    }

    #[test]
    fn test_body_extents() {
        let body = Body::new(Vec2::new(100.0, 250.0), 20.0);
        assert_eq!(body.left(), 80.0);
        assert_eq!(body.right(), 120.0);
        assert_eq!(body.top(), 230.0);
        assert_eq!(body.bottom(), 270.0);
    }

    #[test]
    fn test_obstacle_edges() {
        let obstacle = Obstacle::new(100.0, 100.0, 180.0, 80.0);
        assert_eq!(obstacle.right(), 180.0);
        assert_eq!(obstacle.gap_bottom(), 280.0);
        assert!(!obstacle.passed);
    }
}
