//! Demo autopilot
//!
//! Steers the player's balloon away from the nearest incoming obstacle.
//! Used by the headless runner; the game itself never calls it.

use super::state::{GameState, Obstacle};

/// How far above the balloon obstacles are considered a threat (pixels)
const LOOKAHEAD: f32 = 260.0;
/// Extra horizontal clearance kept around hitboxes (pixels)
const SAFETY_MARGIN: f32 = 8.0;
/// Dead zone around the center before drifting back (pixels)
const CENTER_DEAD_ZONE: f32 = 40.0;

/// Steering decision for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    Left,
    Right,
    Hold,
}

/// Decide which way to steer this tick
pub fn steer(state: &GameState) -> Steer {
    let balloon = &state.balloon;
    let (min_x, max_x) = balloon.x_bounds(&state.viewport);
    let bx = balloon.pos.x;
    let by = balloon.pos.y;

    // Closest obstacle that will cross the balloon's lane
    let threat = state
        .obstacles
        .iter()
        .filter(|o| o.pos.y <= by + balloon.hitbox_radius && by - o.pos.y < LOOKAHEAD)
        .filter(|o| (o.pos.x - bx).abs() < reach(balloon.hitbox_radius, o))
        .min_by(|a, b| {
            (by - a.pos.y)
                .abs()
                .partial_cmp(&(by - b.pos.y).abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let Some(threat) = threat else {
        // Nothing incoming: drift back toward the middle to keep options open
        let center = state.viewport.width / 2.0;
        return if bx < center - CENTER_DEAD_ZONE {
            Steer::Right
        } else if bx > center + CENTER_DEAD_ZONE {
            Steer::Left
        } else {
            Steer::Hold
        };
    };

    // Distance we still need to move sideways to clear it
    let needed = reach(balloon.hitbox_radius, threat) - (threat.pos.x - bx).abs();
    let room_left = bx - min_x;
    let room_right = max_x - bx;

    let prefer_left = threat.pos.x >= bx;
    if prefer_left {
        if room_left >= needed || room_left >= room_right {
            Steer::Left
        } else {
            Steer::Right
        }
    } else if room_right >= needed || room_right >= room_left {
        Steer::Right
    } else {
        Steer::Left
    }
}

fn reach(balloon_radius: f32, obstacle: &Obstacle) -> f32 {
    balloon_radius + obstacle.hitbox_radius + SAFETY_MARGIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{ObstacleKind, Viewport};
    use crate::tuning::Tuning;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn setup(balloon_x: f32) -> GameState {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut state = GameState::new(Viewport::new(800.0, 600.0), &Tuning::default(), &mut rng);
        state.balloon.pos = Vec2::new(balloon_x, 300.0);
        state
    }

    fn obstacle(x: f32, y: f32) -> Obstacle {
        Obstacle {
            id: 9,
            kind: ObstacleKind::Bird,
            pos: Vec2::new(x, y),
            size: 56.0,
            speed: 4.5,
            hitbox_radius: 20.0,
        }
    }

    #[test]
    fn test_holds_when_clear_and_centered() {
        assert_eq!(steer(&setup(400.0)), Steer::Hold);
    }

    #[test]
    fn test_returns_toward_center_when_clear() {
        assert_eq!(steer(&setup(100.0)), Steer::Right);
        assert_eq!(steer(&setup(700.0)), Steer::Left);
    }

    #[test]
    fn test_dodges_away_from_obstacle() {
        let mut state = setup(400.0);
        state.obstacles.push(obstacle(410.0, 200.0));
        assert_eq!(steer(&state), Steer::Left);

        let mut state = setup(400.0);
        state.obstacles.push(obstacle(390.0, 200.0));
        assert_eq!(steer(&state), Steer::Right);
    }

    #[test]
    fn test_dodges_toward_open_side_near_wall() {
        // Pinned against the left wall, obstacle just right of center
        let mut state = setup(30.0);
        state.obstacles.push(obstacle(35.0, 200.0));
        assert_eq!(steer(&state), Steer::Right);
    }

    #[test]
    fn test_ignores_obstacles_below_or_far_away() {
        let mut state = setup(400.0);
        state.obstacles.push(obstacle(400.0, 400.0));
        state.obstacles.push(obstacle(400.0, -100.0));
        assert_eq!(steer(&state), Steer::Hold);
    }
}
