//! Motion integration
//!
//! Vertical motion advances a fixed step per tick; horizontal obstacle motion
//! is scaled by the real frame time. The two are tuned together, so keep them
//! that way.

use super::state::{Body, Obstacle};

/// Apply one tick of gravity, then move the body by its velocity
#[inline]
pub fn integrate(body: &mut Body, gravity: f32) {
    body.velocity += gravity;
    body.pos.y += body.velocity;
}

/// Set the body's vertical velocity to the jump velocity (jumps never stack)
#[inline]
pub fn apply_jump(body: &mut Body, jump_velocity: f32) {
    body.velocity = jump_velocity;
}

/// Scroll every obstacle left by `speed` per reference frame of elapsed time
pub fn advance_obstacles(obstacles: &mut [Obstacle], speed: f32, dt_ms: f32, reference_frame_ms: f32) {
    let step = speed * (dt_ms / reference_frame_ms);
    for obstacle in obstacles {
        obstacle.x -= step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_integrate_gravity() {
        let mut body = Body::new(Vec2::new(100.0, 250.0), 20.0);
        integrate(&mut body, 0.2);
        assert!((body.velocity - 0.2).abs() < 1e-6);
        assert!((body.pos.y - 250.2).abs() < 1e-4);

        integrate(&mut body, 0.2);
        assert!((body.velocity - 0.4).abs() < 1e-6);
        assert!((body.pos.y - 250.6).abs() < 1e-4);
        assert_eq!(body.pos.x, 100.0);
    }

    #[test]
    fn test_jump_overwrites_velocity() {
        let mut body = Body::new(Vec2::new(100.0, 250.0), 20.0);
        body.velocity = 3.0;
        apply_jump(&mut body, -5.5);
        assert_eq!(body.velocity, -5.5);

        // A second jump does not add to the first
        apply_jump(&mut body, -5.5);
        assert_eq!(body.velocity, -5.5);
    }

    #[test]
    fn test_obstacles_scale_with_frame_time() {
        let mut obstacles = vec![
            Obstacle::new(600.0, 100.0, 180.0, 80.0),
            Obstacle::new(300.0, 150.0, 180.0, 80.0),
        ];
        advance_obstacles(&mut obstacles, 2.0, 16.0, 16.0);
        assert_eq!(obstacles[0].x, 598.0);
        assert_eq!(obstacles[1].x, 298.0);

        // Twice the frame time, twice the distance
        advance_obstacles(&mut obstacles, 2.0, 32.0, 16.0);
        assert_eq!(obstacles[0].x, 594.0);

        // Zero elapsed time leaves them in place
        advance_obstacles(&mut obstacles, 2.0, 0.0, 16.0);
        assert_eq!(obstacles[0].x, 594.0);
        assert_eq!(obstacles[0].top_height, 100.0);
        assert_eq!(obstacles[0].width, 80.0);
    }
}
