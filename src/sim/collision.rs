//! Collision tests between the circular body and the world
//!
//! The body is tested by its axis-aligned extents (center ± radius), which is
//! how the game has always judged hits against the rectangular barriers.

use super::state::{Body, Obstacle};

/// Check whether the body overlaps either barrier of an obstacle
///
/// Horizontal extents must overlap, and then the body must reach above the
/// top barrier's lower edge or below the bottom barrier's upper edge.
pub fn collides(body: &Body, obstacle: &Obstacle) -> bool {
    let overlaps_x = body.right() > obstacle.x && body.left() < obstacle.right();
    if !overlaps_x {
        return false;
    }
    body.top() < obstacle.top_height || body.bottom() > obstacle.gap_bottom()
}

/// Check whether the body touches the ceiling (y = 0) or the floor
pub fn hits_world_bounds(body: &Body, field_height: f32) -> bool {
    body.top() <= 0.0 || body.bottom() >= field_height
}

/// True if the body hits any obstacle in the collection
pub fn collides_any(body: &Body, obstacles: &[Obstacle]) -> bool {
    obstacles.iter().any(|obstacle| collides(body, obstacle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn body_at(x: f32, y: f32) -> Body {
        Body::new(Vec2::new(x, y), 20.0)
    }

    #[test]
    fn test_body_inside_gap() {
        let obstacle = Obstacle::new(100.0, 100.0, 180.0, 80.0);
        assert!(!collides(&body_at(100.0, 250.0), &obstacle));
    }

    #[test]
    fn test_body_hits_top_barrier() {
        let obstacle = Obstacle::new(100.0, 100.0, 180.0, 80.0);
        // Top edge at 70, above the barrier's lower edge at 100
        assert!(collides(&body_at(100.0, 90.0), &obstacle));
    }

    #[test]
    fn test_body_hits_bottom_barrier() {
        let obstacle = Obstacle::new(100.0, 100.0, 180.0, 80.0);
        // Bottom edge at 285, below the gap bottom at 280
        assert!(collides(&body_at(100.0, 265.0), &obstacle));
    }

    #[test]
    fn test_no_horizontal_overlap() {
        let obstacle = Obstacle::new(300.0, 100.0, 180.0, 80.0);
        // Vertically it would hit, but the obstacle is far to the right
        assert!(!collides(&body_at(100.0, 50.0), &obstacle));

        // Touching edges do not count
        let touching = Obstacle::new(120.0, 100.0, 180.0, 80.0);
        assert!(!collides(&body_at(100.0, 50.0), &touching));

        let behind = Obstacle::new(0.0, 100.0, 180.0, 80.0);
        assert!(!collides(&body_at(100.0, 50.0), &behind));
    }

    #[test]
    fn test_world_bounds() {
        assert!(!hits_world_bounds(&body_at(100.0, 250.0), 500.0));
        assert!(hits_world_bounds(&body_at(100.0, 20.0), 500.0));
        assert!(hits_world_bounds(&body_at(100.0, -5.0), 500.0));
        assert!(hits_world_bounds(&body_at(100.0, 480.0), 500.0));
        assert!(hits_world_bounds(&body_at(100.0, 600.0), 500.0));
        assert!(!hits_world_bounds(&body_at(100.0, 479.0), 500.0));
    }

    #[test]
    fn test_collides_any() {
        let obstacles = vec![
            Obstacle::new(400.0, 100.0, 180.0, 80.0),
            Obstacle::new(90.0, 300.0, 180.0, 80.0),
        ];
        // Second obstacle's top barrier reaches down to 300
        assert!(collides_any(&body_at(100.0, 250.0), &obstacles));
        assert!(!collides_any(&body_at(100.0, 400.0), &obstacles));
    }
}
