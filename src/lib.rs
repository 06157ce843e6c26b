//! Pillar Flap - a one-button arcade game
//!
//! Core modules:
//! - `sim`: Simulation (physics, collisions, spawning, scoring, effects)
//! - `game_loop`: Frame-driven loop and host interface
//! - `renderer`: Backend-agnostic draw lists
//! - `highscores`: Top-5 leaderboard
//! - `settings`: Player preferences
//! - `tuning`: Data-driven game balance

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod game_loop;
pub mod highscores;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game_loop::{FrameRequest, GameLoop, Host, ManualScheduler, Scheduler};
pub use highscores::HighScores;
pub use settings::Settings;
pub use tuning::{Tuning, TuningError};

/// Reference tuning constants.
///
/// All distances are in pixels of a 600x500 play field, y pointing down.
pub mod consts {
    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 600.0;
    pub const FIELD_HEIGHT: f32 = 500.0;
    /// Where the ground strip is drawn (collision uses FIELD_HEIGHT)
    pub const GROUND_Y: f32 = 480.0;

    /// Frame time (ms) the per-tick constants were tuned against
    pub const REFERENCE_FRAME_MS: f32 = 16.0;

    /// Added to vertical velocity once per tick
    pub const GRAVITY: f32 = 0.2;
    /// Vertical velocity set by a jump (negative is up)
    pub const JUMP_VELOCITY: f32 = -5.5;

    /// Body defaults
    pub const BODY_START_X: f32 = 100.0;
    pub const BODY_START_Y: f32 = 250.0;
    pub const BODY_RADIUS: f32 = 20.0;

    /// Obstacle defaults
    pub const OBSTACLE_SPEED: f32 = 2.0; // px per reference frame
    pub const OBSTACLE_GAP: f32 = 180.0;
    pub const OBSTACLE_WIDTH: f32 = 80.0;
    pub const SPAWN_INTERVAL_FRAMES: u64 = 180;
    /// Top barrier height is drawn from [MIN, MIN + SPAN)
    pub const TOP_HEIGHT_MIN: u32 = 50;
    pub const TOP_HEIGHT_SPAN: u32 = 200;

    /// Jump burst effect
    pub const BURST_START_RADIUS: f32 = 10.0;
    pub const BURST_GROWTH: f32 = 40.0;
    pub const BURST_START_OPACITY: f32 = 0.8;
    pub const BURST_DURATION_MS: f32 = 400.0;
    pub const BURST_OFFSET_X: f32 = 10.0;
    pub const BURST_OFFSET_Y: f32 = -30.0;
}
