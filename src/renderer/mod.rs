//! Rendering module
//!
//! The core never touches pixels. Each frame it hands the host a
//! [`FrameState`]; [`draw_list`] turns that into back-to-front
//! [`DrawCommand`]s any 2D backend can replay.

pub mod palette;
pub mod shapes;

use glam::Vec2;

use crate::sim::{Body, Burst, GamePhase, GameState, Obstacle};
use palette::Color;

/// Read-only view of everything needed to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameState<'a> {
    pub body: &'a Body,
    pub obstacles: &'a [Obstacle],
    pub bursts: &'a [Burst],
    pub score: u32,
    pub phase: GamePhase,
    pub field_size: Vec2,
    pub ground_y: f32,
}

impl<'a> FrameState<'a> {
    pub fn new(state: &'a GameState) -> Self {
        Self {
            body: &state.body,
            obstacles: &state.obstacles,
            bursts: &state.bursts,
            score: state.score,
            phase: state.phase,
            field_size: Vec2::new(state.tuning.field_width, state.tuning.field_height),
            ground_y: state.tuning.ground_y,
        }
    }
}

/// A single 2D drawing primitive in field coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Backdrop image (or fill) covering the whole field
    Background { size: Vec2 },
    Rect { pos: Vec2, size: Vec2, color: Color },
    Line { from: Vec2, to: Vec2, width: f32, color: Color },
    /// Radial gradient disc
    Glow {
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        stops: [(f32, Color); 3],
    },
    /// Stroked circle
    Ring { center: Vec2, radius: f32, width: f32, color: Color },
    /// Character sprite: top-left corner and square edge length
    Sprite { pos: Vec2, size: f32 },
    /// Centred, outlined text
    Text {
        text: String,
        pos: Vec2,
        font_px: f32,
        fill: Color,
        stroke: Color,
        stroke_width: f32,
    },
}

/// Build the frame's draw commands in painter's order:
/// background, ground, obstacles, bursts, body, score.
pub fn draw_list(frame: &FrameState<'_>) -> Vec<DrawCommand> {
    let mut out = Vec::with_capacity(4 + frame.obstacles.len() * 18 + frame.bursts.len() * 2);

    out.push(DrawCommand::Background {
        size: frame.field_size,
    });
    out.push(DrawCommand::Rect {
        pos: Vec2::new(0.0, frame.ground_y),
        size: Vec2::new(frame.field_size.x, frame.field_size.y - frame.ground_y),
        color: palette::GROUND,
    });

    for obstacle in frame.obstacles {
        out.extend(shapes::pillar_pair(obstacle, frame.field_size.y));
    }
    for burst in frame.bursts {
        out.extend(shapes::burst(burst));
    }

    out.push(shapes::body_sprite(frame.body));
    out.push(shapes::score_text(frame.score, frame.field_size.x));
    out
}
