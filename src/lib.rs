//! Balloon Rise - A rising-balloon reflex game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, input, spawning, collisions, tick)
//! - `session`: Session state machine and presentation callbacks
//! - `platform`: Host-side helpers (fixed-rate tick driver)
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod session;
pub mod sim;
pub mod tuning;

pub use session::{Session, SessionAction, SessionListener, SessionPhase, Transition};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Host frame cadence the game was balanced for (ticks per second)
    pub const TICK_RATE_HZ: u32 = 60;
    /// Maximum ticks run per host frame to prevent spiral of death
    pub const MAX_TICKS_PER_FRAME: u32 = 4;

    /// Viewport dimensions
    pub const DEFAULT_VIEWPORT_WIDTH: f32 = 800.0;
    pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 600.0;
    /// Smallest accepted viewport edge; keeps clamps and spawn ranges non-empty
    pub const MIN_VIEWPORT_EDGE: f32 = 160.0;

    /// Balloon defaults
    pub const BALLOON_WIDTH: f32 = 50.0;
    pub const BALLOON_HEIGHT: f32 = 70.0;
    pub const BALLOON_SPEED: f32 = 6.0;
    pub const BALLOON_RISE_SPEED: f32 = 4.0;
    /// Spawn height above the bottom edge
    pub const BALLOON_SPAWN_OFFSET: f32 = 150.0;
    /// Hitbox radius = width / divisor (smaller than the drawn balloon)
    pub const BALLOON_HITBOX_DIVISOR: f32 = 2.5;

    /// Obstacle defaults
    pub const OBSTACLE_MIN_SIZE: f32 = 40.0;
    pub const OBSTACLE_MAX_SIZE: f32 = 80.0;
    /// Horizontal spawn margin from either edge
    pub const OBSTACLE_EDGE_MARGIN: f32 = 50.0;
    pub const OBSTACLE_BASE_SPEED: f32 = 4.0;
    /// Descent speed gained per unit of difficulty
    pub const OBSTACLE_SPEED_PER_DIFFICULTY: f32 = 0.5;
    pub const OBSTACLE_HITBOX_DIVISOR: f32 = 2.8;
    pub const SCORE_PER_OBSTACLE: u32 = 10;

    /// Spawn cadence: interval = (BASE - difficulty * STEP) / speed_multiplier
    pub const SPAWN_INTERVAL_BASE: f32 = 40.0;
    pub const SPAWN_INTERVAL_PER_DIFFICULTY: f32 = 2.0;
    pub const MIN_SPAWN_INTERVAL_TICKS: u32 = 5;

    /// Difficulty ramp
    pub const START_DIFFICULTY: f32 = 1.0;
    pub const DIFFICULTY_STEP: f32 = 0.1;
    pub const DIFFICULTY_SCORE_INTERVAL: u32 = 50;

    /// Global speed ramp
    pub const START_SPEED_MULTIPLIER: f32 = 1.0;
    pub const SPEED_RAMP_PER_TICK: f32 = 0.0005;
    pub const MAX_SPEED_MULTIPLIER: f32 = 2.5;

    /// Decorative clouds
    pub const CLOUD_COUNT: usize = 5;
    pub const CLOUD_MIN_WIDTH: f32 = 100.0;
    pub const CLOUD_MAX_WIDTH: f32 = 200.0;
    pub const CLOUD_MIN_HEIGHT: f32 = 40.0;
    pub const CLOUD_MAX_HEIGHT: f32 = 70.0;
    pub const CLOUD_MIN_SPEED: f32 = 0.3;
    pub const CLOUD_MAX_SPEED: f32 = 0.8;
    /// Clouds wrap once they drift past this x
    pub const CLOUD_WRAP_LEFT: f32 = -200.0;
    /// Re-entry offset past the right edge
    pub const CLOUD_REENTRY_OFFSET: f32 = 100.0;
}
