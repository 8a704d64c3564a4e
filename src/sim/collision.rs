//! Collision detection between the balloon and obstacles
//!
//! Both shapes use circular hitboxes that are smaller than the drawn
//! sprites, so grazing contact is forgiven.

use glam::Vec2;

use super::state::{Balloon, Obstacle};

/// True if two circles overlap (touching edges do not count)
#[inline]
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    a.distance(b) < radius_a + radius_b
}

/// True if the balloon overlaps this obstacle
#[inline]
pub fn balloon_hits(balloon: &Balloon, obstacle: &Obstacle) -> bool {
    circles_overlap(
        balloon.pos,
        balloon.hitbox_radius,
        obstacle.pos,
        obstacle.hitbox_radius,
    )
}

/// Id of the first obstacle the balloon overlaps
pub fn first_collision(balloon: &Balloon, obstacles: &[Obstacle]) -> Option<u32> {
    obstacles
        .iter()
        .find(|obstacle| balloon_hits(balloon, obstacle))
        .map(|obstacle| obstacle.id)
}

/// True if the balloon overlaps any obstacle
pub fn collides(balloon: &Balloon, obstacles: &[Obstacle]) -> bool {
    obstacles.iter().any(|obstacle| balloon_hits(balloon, obstacle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{ObstacleKind, Viewport};
    use crate::tuning::Tuning;

    fn balloon_at(x: f32, y: f32) -> Balloon {
        let mut balloon = Balloon::spawn(&Tuning::default(), &Viewport::new(800.0, 600.0));
        balloon.pos = Vec2::new(x, y);
        balloon
    }

    fn obstacle_at(id: u32, x: f32, y: f32, size: f32) -> Obstacle {
        Obstacle {
            id,
            kind: ObstacleKind::Bird,
            pos: Vec2::new(x, y),
            size,
            speed: 4.5,
            hitbox_radius: size / 2.8,
        }
    }

    #[test]
    fn test_overlapping_hitboxes_collide() {
        // Radii 20 + 14.29; distance 10
        let balloon = balloon_at(100.0, 100.0);
        let obstacles = [obstacle_at(1, 110.0, 100.0, 40.0)];
        assert!(collides(&balloon, &obstacles));
        assert_eq!(first_collision(&balloon, &obstacles), Some(1));
    }

    #[test]
    fn test_distant_obstacle_misses() {
        let balloon = balloon_at(100.0, 100.0);
        let obstacles = [obstacle_at(1, 300.0, 100.0, 40.0)];
        assert!(!collides(&balloon, &obstacles));
        assert_eq!(first_collision(&balloon, &obstacles), None);
    }

    #[test]
    fn test_hitbox_is_circular_not_boxy() {
        // Corner-diagonal placement: boxes would overlap, circles do not.
        // dx = dy = 26 -> distance 36.8 > 34.3
        let balloon = balloon_at(100.0, 100.0);
        let obstacles = [obstacle_at(1, 126.0, 126.0, 40.0)];
        assert!(!collides(&balloon, &obstacles));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        assert!(!circles_overlap(Vec2::ZERO, 10.0, Vec2::new(20.0, 0.0), 10.0));
        assert!(circles_overlap(Vec2::ZERO, 10.0, Vec2::new(19.9, 0.0), 10.0));
    }

    #[test]
    fn test_any_match_reported() {
        let balloon = balloon_at(100.0, 100.0);
        let obstacles = [
            obstacle_at(1, 500.0, 100.0, 40.0),
            obstacle_at(2, 100.0, 120.0, 60.0),
        ];
        assert!(collides(&balloon, &obstacles));
        assert_eq!(first_collision(&balloon, &obstacles), Some(2));
    }

    #[test]
    fn test_empty_field_never_collides() {
        assert!(!collides(&balloon_at(100.0, 100.0), &[]));
    }
}
