//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick increments only
//! - Seeded RNG only (owned by the caller)
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod input;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::{Steer, steer};
pub use collision::{balloon_hits, circles_overlap, collides, first_collision};
pub use input::{InputTracker, Key};
pub use spawn::{advance_spawn_timer, spawn_interval_ticks, spawn_obstacle};
pub use state::{Balloon, Cloud, GameEvent, GameState, Obstacle, ObstacleKind, Viewport};
pub use tick::{TickOutcome, tick};
