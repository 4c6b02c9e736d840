//! Obstacle and hazard spawning
//!
//! Spawning never fails: the height range and sizes were checked when the
//! [`Tuning`](crate::Tuning) was validated.

use glam::Vec2;
use rand::Rng;

use super::state::{GameEvent, GameState, Hazard, Obstacle};
use crate::frames_from_f32;
use crate::tuning::ObstacleTuning;

/// Frames between obstacle spawns at the given world speed
///
/// `max(min_interval, base_interval - speed * slope)`, floored.
pub fn obstacle_interval(speed: f32, tuning: &ObstacleTuning) -> u64 {
    frames_from_f32((tuning.base_interval - speed * tuning.slope).max(tuning.min_interval))
}

/// Whether an obstacle is due on this frame
#[inline]
pub fn obstacle_due(frame: u64, speed: f32, tuning: &ObstacleTuning) -> bool {
    frame.is_multiple_of(obstacle_interval(speed, tuning))
}

/// Push a building of random height at the right edge, resting on the ground
pub fn spawn_obstacle(state: &mut GameState) -> u32 {
    let tuning = &state.tuning.obstacle;
    let height = state.rng.random_range(tuning.min_height..=tuning.max_height) as f32;
    let width = tuning.width;
    let color = tuning.color;
    let x = state.tuning.viewport_width;
    let y = state.tuning.ground_y() - height;

    let id = state.next_entity_id();
    state.obstacles.push(Obstacle {
        id,
        pos: Vec2::new(x, y),
        size: Vec2::new(width, height),
        color,
    });
    log::trace!("Obstacle {} spawned: height {} at frame {}", id, height, state.frame);
    state.push_event(GameEvent::ObstacleSpawned { id });
    id
}

/// Fire a projectile from the antagonist's leading edge
pub fn spawn_hazard(state: &mut GameState) -> u32 {
    let hazard = &state.tuning.antagonist.hazard;
    let size = Vec2::new(hazard.width, hazard.height);
    let speed = state.speed * hazard.speed_factor;
    let color = hazard.color;
    let x = state.antagonist.pos.x + state.antagonist.size.x;
    let y = state.tuning.antagonist.behavior.hazard_y(
        &state.antagonist,
        hazard.height,
        state.tuning.ground_y(),
    );

    let id = state.next_entity_id();
    state.hazards.push(Hazard {
        id,
        pos: Vec2::new(x, y),
        size,
        speed,
        color,
    });
    log::trace!("Hazard {} fired at speed {} on frame {}", id, speed, state.frame);
    state.push_event(GameEvent::HazardSpawned { id });
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;

    #[test]
    fn test_interval_formula() {
        let tuning = ObstacleTuning::default();
        // 120 - 5 * 5 = 95
        assert_eq!(obstacle_interval(5.0, &tuning), 95);
        // 120 - 5.5 * 5 = 92.5 -> 92
        assert_eq!(obstacle_interval(5.5, &tuning), 92);
        // Clamped at the minimum
        assert_eq!(obstacle_interval(12.0, &tuning), 60);
        assert_eq!(obstacle_interval(50.0, &tuning), 60);
    }

    #[test]
    fn test_obstacle_due() {
        let tuning = ObstacleTuning::default();
        assert!(!obstacle_due(94, 5.0, &tuning));
        assert!(obstacle_due(95, 5.0, &tuning));
        assert!(obstacle_due(190, 5.0, &tuning));
    }

    #[test]
    fn test_obstacle_rests_on_ground_at_right_edge() {
        let mut state = GameState::new(Tuning::default(), 5).unwrap();
        for _ in 0..200 {
            spawn_obstacle(&mut state);
        }
        let ground_y = state.tuning.ground_y();
        for obstacle in &state.obstacles {
            let rect = obstacle.rect();
            assert_eq!(rect.left(), 800.0);
            assert_eq!(rect.bottom(), ground_y);
            assert!((20.0..=70.0).contains(&obstacle.size.y));
            assert_eq!(obstacle.size.y.fract(), 0.0);
            assert!(obstacle.size.x > 0.0);
        }
    }

    #[test]
    fn test_shockwave_hugs_ground() {
        let mut state = GameState::new(Tuning::ground_pounder(), 5).unwrap();
        state.speed = 5.0;
        spawn_hazard(&mut state);
        let hazard = &state.hazards[0];
        assert_eq!(hazard.pos.x, -10.0 + 90.0);
        assert_eq!(hazard.rect().bottom(), state.tuning.ground_y());
        assert!((hazard.speed - 8.0).abs() < 1e-5);
    }

    #[test]
    fn test_flame_leaves_mouth() {
        let mut state = GameState::new(Tuning::breath_attacker(), 5).unwrap();
        spawn_hazard(&mut state);
        let hazard = &state.hazards[0];
        assert_eq!(hazard.pos.x, -20.0 + 100.0);
        assert_eq!(hazard.pos.y, state.antagonist.pos.y + 20.0);
        assert!((hazard.speed - 7.5).abs() < 1e-5);
    }
}
