//! Obstacle spawning and retirement

use rand::Rng;

use super::state::Obstacle;
use crate::tuning::Tuning;

/// Spawn a new obstacle at the field's right edge on every `spawn_interval_frames`th frame
///
/// The top barrier height is a whole number drawn uniformly from
/// `[top_height_min, top_height_min + top_height_span)`.
pub fn maybe_spawn<R: Rng + ?Sized>(frame_count: u64, tuning: &Tuning, rng: &mut R) -> Option<Obstacle> {
    if tuning.spawn_interval_frames == 0 || !frame_count.is_multiple_of(tuning.spawn_interval_frames) {
        return None;
    }
    let range = tuning.top_height_min..tuning.top_height_max();
    if range.is_empty() {
        log::warn!("Empty top height range {:?}, skipping spawn", range);
        return None;
    }
    let top_height = rng.random_range(range) as f32;
    Some(Obstacle::new(
        tuning.field_width,
        top_height,
        tuning.obstacle_gap,
        tuning.obstacle_width,
    ))
}

/// Drop obstacles that have scrolled fully past the left edge, keeping order
pub fn prune(obstacles: &mut Vec<Obstacle>) {
    obstacles.retain(|obstacle| obstacle.right() > 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_cadence() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);

        assert!(maybe_spawn(1, &tuning, &mut rng).is_none());
        assert!(maybe_spawn(179, &tuning, &mut rng).is_none());
        assert!(maybe_spawn(180, &tuning, &mut rng).is_some());
        assert!(maybe_spawn(181, &tuning, &mut rng).is_none());
        assert!(maybe_spawn(360, &tuning, &mut rng).is_some());
    }

    #[test]
    fn test_unvalidated_empty_range_skips_spawn() {
        let mut rng = Pcg32::seed_from_u64(3);
        let zero_span = Tuning {
            top_height_span: 0,
            ..Tuning::default()
        };
        assert!(maybe_spawn(180, &zero_span, &mut rng).is_none());

        let saturated = Tuning {
            top_height_min: u32::MAX,
            ..Tuning::default()
        };
        assert!(maybe_spawn(180, &saturated, &mut rng).is_none());
    }

    #[test]
    fn test_spawned_obstacle_shape() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(99);

        for frame in (180..180 * 200).step_by(180) {
            let obstacle = maybe_spawn(frame, &tuning, &mut rng).unwrap();
            assert_eq!(obstacle.x, 600.0);
            assert_eq!(obstacle.gap, 180.0);
            assert_eq!(obstacle.width, 80.0);
            assert!(!obstacle.passed);
            assert!(obstacle.top_height >= 50.0 && obstacle.top_height < 250.0);
            assert_eq!(obstacle.top_height.fract(), 0.0);
        }
    }

    #[test]
    fn test_spawn_is_reproducible() {
        let tuning = Tuning::default();
        let mut a = Pcg32::seed_from_u64(42);
        let mut b = Pcg32::seed_from_u64(42);
        for frame in [180, 360, 540] {
            assert_eq!(
                maybe_spawn(frame, &tuning, &mut a),
                maybe_spawn(frame, &tuning, &mut b)
            );
        }
    }

    #[test]
    fn test_prune_keeps_order() {
        let mut obstacles = vec![
            Obstacle::new(-80.0, 50.0, 180.0, 80.0),
            Obstacle::new(-79.5, 60.0, 180.0, 80.0),
            Obstacle::new(200.0, 70.0, 180.0, 80.0),
            Obstacle::new(560.0, 80.0, 180.0, 80.0),
        ];
        prune(&mut obstacles);
        let heights: Vec<f32> = obstacles.iter().map(|o| o.top_height).collect();
        assert_eq!(heights, vec![60.0, 70.0, 80.0]);
    }
}
