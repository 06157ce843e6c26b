//! Simulation module
//!
//! All gameplay logic lives here. Everything is a plain function over the
//! owned [`GameState`]:
//! - Seeded RNG only
//! - Stable iteration order (oldest obstacle first)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod effects;
pub mod physics;
pub mod scoring;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{collides, collides_any, hits_world_bounds};
pub use effects::{spawn_burst, tick_bursts};
pub use physics::{advance_obstacles, apply_jump, integrate};
pub use scoring::update_score;
pub use spawner::{maybe_spawn, prune};
pub use state::{Body, Burst, GameEvent, GamePhase, GameState, Obstacle};
pub use tick::{jump, tick};
