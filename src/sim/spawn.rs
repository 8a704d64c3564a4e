//! Procedural obstacle generation
//!
//! Spawn rate tightens as difficulty and the global speed multiplier rise.

use glam::Vec2;
use rand::Rng;

use super::state::{GameEvent, GameState, Obstacle, ObstacleKind};
use crate::tuning::Tuning;

/// Ticks between spawns for the given progression.
///
/// `(base - difficulty * step) / speed_multiplier`, rounded up to whole
/// ticks and never below `min_spawn_interval_ticks`.
pub fn spawn_interval_ticks(difficulty: f32, speed_multiplier: f32, tuning: &Tuning) -> u32 {
    let floor = tuning.min_spawn_interval_ticks;
    let raw = (tuning.spawn_interval_base - difficulty * tuning.spawn_interval_per_difficulty)
        / speed_multiplier.max(f32::EPSILON);
    if !raw.is_finite() || raw <= floor as f32 {
        return floor;
    }
    raw.ceil() as u32
}

/// Create one obstacle just above the top edge and add it to the state
pub fn spawn_obstacle(state: &mut GameState, tuning: &Tuning, rng: &mut impl Rng) -> u32 {
    let viewport = state.viewport;
    let size = rng.random_range(tuning.obstacle_min_size..tuning.obstacle_max_size);
    let x = rng.random_range(
        tuning.obstacle_edge_margin..viewport.width - tuning.obstacle_edge_margin,
    );
    let kind = if rng.random_bool(0.5) {
        ObstacleKind::Spike
    } else {
        ObstacleKind::Bird
    };

    let id = state.next_entity_id();
    state.obstacles.push(Obstacle {
        id,
        kind,
        pos: Vec2::new(x, -size),
        size,
        speed: tuning.obstacle_base_speed + state.difficulty * tuning.obstacle_speed_per_difficulty,
        hitbox_radius: size / tuning.obstacle_hitbox_divisor,
    });
    state.events.push(GameEvent::ObstacleSpawned { id, kind });
    log::debug!(
        "Spawned {:?} #{} size={:.1} x={:.1} ({} active)",
        kind,
        id,
        size,
        x,
        state.obstacles.len()
    );
    id
}

/// Count one tick toward the next spawn; spawns and resets when due.
/// Returns the new obstacle's id if one was created.
pub fn advance_spawn_timer(
    state: &mut GameState,
    tuning: &Tuning,
    rng: &mut impl Rng,
) -> Option<u32> {
    state.spawn_timer += 1;
    let interval = spawn_interval_ticks(state.difficulty, state.speed_multiplier, tuning);
    if state.spawn_timer >= interval {
        state.spawn_timer = 0;
        Some(spawn_obstacle(state, tuning, rng))
    } else {
        None
    }
}
