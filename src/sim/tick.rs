//! Fixed-step simulation tick
//!
//! Advances one running, unpaused tick. Phase handling (idle, paused, game
//! over) belongs to the session; callers only invoke `tick` while running.
//! Increments are per tick, not scaled by elapsed time.

use rand::Rng;

use super::collision::first_collision;
use super::input::InputTracker;
use super::spawn::advance_spawn_timer;
use super::state::{GameEvent, GameState};
use crate::tuning::Tuning;

/// What the tick ended with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Advanced,
    /// The balloon hit an obstacle; the run is over
    Collided { obstacle_id: u32 },
}

/// Advance the game state by one tick
pub fn tick(
    state: &mut GameState,
    input: &InputTracker,
    tuning: &Tuning,
    rng: &mut impl Rng,
) -> TickOutcome {
    state.events.clear();
    state.time_ticks += 1;

    let viewport = state.viewport;
    let multiplier = state.speed_multiplier;

    // Balloon: steer, then rise toward the ceiling
    let balloon = &mut state.balloon;
    balloon.apply_speed_multiplier(multiplier);
    balloon.dx = match input.horizontal() {
        -1 => -balloon.speed,
        1 => balloon.speed,
        _ => 0.0,
    };
    balloon.pos.x += balloon.dx;
    balloon.pos.y -= balloon.rise_speed;
    balloon.clamp_to(&viewport);

    // Obstacles: descend, then drop the ones that left the screen
    for obstacle in &mut state.obstacles {
        obstacle.pos.y += obstacle.speed * multiplier;
    }
    let before = state.obstacles.len();
    state.obstacles.retain(|obstacle| !obstacle.has_passed(&viewport));
    let passed = before - state.obstacles.len();

    let mut milestones = 0u32;
    for _ in 0..passed {
        state.score += tuning.score_per_obstacle;
        state.events.push(GameEvent::ScoreChanged { score: state.score });
        if state.score % tuning.difficulty_score_interval == 0 {
            milestones += 1;
        }
    }

    for cloud in &mut state.clouds {
        cloud.drift(&viewport, rng);
    }

    advance_spawn_timer(state, tuning, rng);

    // Difficulty steps land after spawning so this tick's spawn uses the old value
    for _ in 0..milestones {
        state.difficulty += tuning.difficulty_step;
        state.events.push(GameEvent::DifficultyIncreased {
            difficulty: state.difficulty,
        });
        log::debug!(
            "Difficulty {:.1} at score {}",
            state.difficulty,
            state.score
        );
    }

    state.speed_multiplier =
        (state.speed_multiplier + tuning.speed_ramp_per_tick).min(tuning.max_speed_multiplier);

    match first_collision(&state.balloon, &state.obstacles) {
        Some(obstacle_id) => {
            state.events.push(GameEvent::Collision { obstacle_id });
            TickOutcome::Collided { obstacle_id }
        }
        None => TickOutcome::Advanced,
    }
}
