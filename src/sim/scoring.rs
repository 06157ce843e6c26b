//! Score bookkeeping

use super::state::Obstacle;

/// Mark every obstacle whose right edge is left of `body_x` as passed
///
/// Returns how many obstacles were newly passed. Each obstacle contributes
/// at most once over its lifetime.
pub fn update_score(obstacles: &mut [Obstacle], body_x: f32) -> u32 {
    let mut delta = 0;
    for obstacle in obstacles.iter_mut().filter(|o| !o.passed) {
        if obstacle.right() < body_x {
            obstacle.passed = true;
            delta += 1;
        }
    }
    delta
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_once() {
        let mut obstacles = vec![Obstacle::new(10.0, 100.0, 180.0, 80.0)];
        assert_eq!(update_score(&mut obstacles, 100.0), 1);
        assert!(obstacles[0].passed);
        assert_eq!(update_score(&mut obstacles, 100.0), 0);
    }

    #[test]
    fn test_right_edge_must_be_strictly_past() {
        let mut obstacles = vec![Obstacle::new(20.0, 100.0, 180.0, 80.0)];
        assert_eq!(update_score(&mut obstacles, 100.0), 0);
        obstacles[0].x = 19.5;
        assert_eq!(update_score(&mut obstacles, 100.0), 1);
    }

    #[test]
    fn test_multiple_obstacles() {
        let mut obstacles = vec![
            Obstacle::new(-50.0, 100.0, 180.0, 80.0),
            Obstacle::new(0.0, 100.0, 180.0, 80.0),
            Obstacle::new(300.0, 100.0, 180.0, 80.0),
        ];
        assert_eq!(update_score(&mut obstacles, 100.0), 2);
        assert!(!obstacles[2].passed);
    }
}
