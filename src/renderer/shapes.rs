//! Shape generation for game elements
//!
//! Everything is emitted in field coordinates; the backend only has to know
//! how to fill a rectangle, stroke a line, and draw a few circles.

use glam::Vec2;

use super::palette::{self, Color};
use super::DrawCommand;
use crate::sim::{Body, Burst, Obstacle};

/// Number of vertical flute lines per pillar shaft
const FLUTE_COUNT: u32 = 5;
/// Plinth / capital geometry
const BASE_HEIGHT: f32 = 15.0;
const ABACUS_HEIGHT: f32 = 20.0;
const ECHINUS_HEIGHT: f32 = 10.0;
const ABACUS_OVERHANG: f32 = 8.0;
const ECHINUS_OVERHANG: f32 = 5.0;

/// Sprite is drawn larger than the hit circle
const SPRITE_SCALE: f32 = 3.5;

fn rect(x: f32, y: f32, w: f32, h: f32, color: Color) -> DrawCommand {
    DrawCommand::Rect {
        pos: Vec2::new(x, y),
        size: Vec2::new(w, h.max(0.0)),
        color,
    }
}

fn flutes(out: &mut Vec<DrawCommand>, x: f32, width: f32, y0: f32, y1: f32) {
    let spacing = width / (FLUTE_COUNT + 1) as f32;
    for i in 1..=FLUTE_COUNT {
        let fx = x + i as f32 * spacing;
        out.push(DrawCommand::Line {
            from: Vec2::new(fx, y0),
            to: Vec2::new(fx, y1),
            width: 2.0,
            color: palette::PILLAR_FLUTE,
        });
    }
}

/// Capital at the gap edge: a wide abacus slab, then a narrower echinus
fn capital(out: &mut Vec<DrawCommand>, x: f32, width: f32, y: f32) {
    out.push(rect(
        x - ABACUS_OVERHANG,
        y,
        width + 2.0 * ABACUS_OVERHANG,
        ABACUS_HEIGHT,
        palette::PILLAR_CAPITAL,
    ));
    out.push(rect(
        x - ECHINUS_OVERHANG,
        y + ABACUS_HEIGHT,
        width + 2.0 * ECHINUS_OVERHANG,
        ECHINUS_HEIGHT,
        palette::PILLAR_CAPITAL,
    ));
}

/// Draw commands for an obstacle as a pair of fluted pillars
pub fn pillar_pair(obstacle: &Obstacle, field_height: f32) -> Vec<DrawCommand> {
    let mut out = Vec::with_capacity(20);
    let (x, w) = (obstacle.x, obstacle.width);
    let top = obstacle.top_height;

    // Hanging pillar: base slab sits at the gap edge
    out.push(rect(
        x - ECHINUS_OVERHANG,
        top - BASE_HEIGHT,
        w + 2.0 * ECHINUS_OVERHANG,
        BASE_HEIGHT,
        palette::PILLAR_BASE,
    ));
    out.push(rect(x, 0.0, w, top - BASE_HEIGHT, palette::PILLAR_SHAFT));
    flutes(&mut out, x, w, 0.0, top - BASE_HEIGHT);
    capital(&mut out, x, w, 0.0);

    // Standing pillar
    let bottom_y = obstacle.gap_bottom();
    capital(&mut out, x, w, bottom_y);
    let shaft_y = bottom_y + ABACUS_HEIGHT + ECHINUS_HEIGHT;
    out.push(rect(
        x,
        shaft_y,
        w,
        field_height - shaft_y - BASE_HEIGHT,
        palette::PILLAR_SHAFT,
    ));
    flutes(&mut out, x, w, shaft_y, field_height);
    out.push(rect(
        x - ECHINUS_OVERHANG,
        field_height - BASE_HEIGHT,
        w + 2.0 * ECHINUS_OVERHANG,
        BASE_HEIGHT,
        palette::PILLAR_BASE,
    ));

    out
}

/// Glow plus hollow ring, both faded by the burst's opacity
pub fn burst(burst: &Burst) -> [DrawCommand; 2] {
    let a = burst.opacity;
    [
        DrawCommand::Glow {
            center: burst.origin,
            inner_radius: burst.radius * 0.5,
            outer_radius: burst.radius,
            stops: [
                (0.0, palette::BURST_CORE.with_alpha(a * 0.8)),
                (0.7, palette::BURST_MID.with_alpha(a * 0.4)),
                (1.0, palette::BURST_EDGE.with_alpha(0.0)),
            ],
        },
        DrawCommand::Ring {
            center: burst.origin,
            radius: burst.radius * 0.7,
            width: 3.0,
            color: palette::BURST_CORE.with_alpha(a),
        },
    ]
}

/// Character sprite, anchored at the hit circle's top-left
pub fn body_sprite(body: &Body) -> DrawCommand {
    DrawCommand::Sprite {
        pos: Vec2::new(body.left(), body.top()),
        size: body.radius * SPRITE_SCALE,
    }
}

/// Score overlay, horizontally centred near the top
pub fn score_text(score: u32, field_width: f32) -> DrawCommand {
    DrawCommand::Text {
        text: score.to_string(),
        pos: Vec2::new(field_width / 2.0, 60.0),
        font_px: 36.0,
        fill: palette::SCORE_FILL,
        stroke: palette::SCORE_STROKE,
        stroke_width: 3.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pillar_pair_geometry() {
        let obstacle = Obstacle::new(200.0, 100.0, 180.0, 80.0);
        let cmds = pillar_pair(&obstacle, 500.0);
        // 2 bases, 2 shafts, 2x2 capital slabs, 2x5 flutes
        assert_eq!(cmds.len(), 18);

        let lines = cmds
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count();
        assert_eq!(lines, 10);

        // Lower capital starts exactly at the gap bottom
        let at_gap = cmds.iter().any(|c| {
            matches!(c, DrawCommand::Rect { pos, size, .. } if pos.y == 280.0 && size.x == 96.0)
        });
        assert!(at_gap);
    }

    #[test]
    fn test_burst_fades_with_opacity() {
        let mut b = crate::sim::spawn_burst(Vec2::new(0.0, 0.0), 0.0, &crate::Tuning::default());
        b.sample(400.0);
        let [glow, ring] = burst(&b);
        match ring {
            DrawCommand::Ring { radius, color, .. } => {
                assert!((radius - 35.0).abs() < 1e-4);
                assert_eq!(color.a, 0.0);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(glow, DrawCommand::Glow { outer_radius, .. } if outer_radius == 50.0));
    }

    #[test]
    fn test_score_text() {
        match score_text(12, 600.0) {
            DrawCommand::Text { text, pos, .. } => {
                assert_eq!(text, "12");
                assert_eq!(pos, Vec2::new(300.0, 60.0));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
