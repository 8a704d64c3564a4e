//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives here. The session RNG is kept
//! outside so the state stays plain data (serializable, comparable).

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::Tuning;

/// Playfield size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Build a viewport, clamping each edge to `MIN_VIEWPORT_EDGE`.
    /// Non-finite or non-positive sizes are absorbed the same way.
    pub fn new(width: f32, height: f32) -> Self {
        let clamped = Self {
            width: clamp_edge(width),
            height: clamp_edge(height),
        };
        if clamped.width != width || clamped.height != height {
            log::warn!(
                "Viewport {}x{} below minimum, using {}x{}",
                width,
                height,
                clamped.width,
                clamped.height
            );
        }
        clamped
    }

    /// The balloon may not rise above this line
    #[inline]
    pub fn ceiling_y(&self) -> f32 {
        self.height / 2.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT)
    }
}

fn clamp_edge(edge: f32) -> f32 {
    if edge.is_finite() {
        edge.max(MIN_VIEWPORT_EDGE)
    } else {
        MIN_VIEWPORT_EDGE
    }
}

/// The player's balloon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balloon {
    /// Center position
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Horizontal velocity applied this tick
    pub dx: f32,
    pub base_speed: f32,
    pub base_rise_speed: f32,
    /// Base speeds scaled by the global speed multiplier
    pub speed: f32,
    pub rise_speed: f32,
    pub hitbox_radius: f32,
}

impl Balloon {
    /// Create a balloon at its spawn point for the given viewport
    pub fn spawn(tuning: &Tuning, viewport: &Viewport) -> Self {
        let mut balloon = Self {
            pos: Vec2::new(
                viewport.width / 2.0,
                viewport.height - tuning.balloon_spawn_offset,
            ),
            width: tuning.balloon_width,
            height: tuning.balloon_height,
            dx: 0.0,
            base_speed: tuning.balloon_speed,
            base_rise_speed: tuning.balloon_rise_speed,
            speed: tuning.balloon_speed,
            rise_speed: tuning.balloon_rise_speed,
            hitbox_radius: tuning.balloon_width / tuning.balloon_hitbox_divisor,
        };
        balloon.clamp_to(viewport);
        balloon
    }

    /// Recompute current speeds from the base values
    pub fn apply_speed_multiplier(&mut self, multiplier: f32) {
        self.speed = self.base_speed * multiplier;
        self.rise_speed = self.base_rise_speed * multiplier;
    }

    /// Horizontal range the balloon center may occupy
    #[inline]
    pub fn x_bounds(&self, viewport: &Viewport) -> (f32, f32) {
        // Collapses to the center line if the balloon is wider than the viewport
        let half = (self.width / 2.0).min(viewport.width / 2.0);
        (half, viewport.width - half)
    }

    /// Keep the balloon inside the viewport and below the vertical center
    pub fn clamp_to(&mut self, viewport: &Viewport) {
        let (min_x, max_x) = self.x_bounds(viewport);
        self.pos.x = self.pos.x.clamp(min_x, max_x);
        self.pos.y = self.pos.y.max(viewport.ceiling_y());
    }
}

/// Obstacle variants (purely visual distinction; both behave the same)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Spike,
    Bird,
}

/// A descending obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    /// Center position
    pub pos: Vec2,
    /// Width and height (obstacles are square)
    pub size: f32,
    /// Descent speed captured at spawn, before the global multiplier
    pub speed: f32,
    pub hitbox_radius: f32,
}

impl Obstacle {
    #[inline]
    pub fn width(&self) -> f32 {
        self.size
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size
    }

    /// True once the obstacle has fully left through the bottom edge
    #[inline]
    pub fn has_passed(&self, viewport: &Viewport) -> bool {
        self.pos.y > viewport.height + self.height()
    }
}

/// Background cloud (cosmetic, recycled forever)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cloud {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Leftward drift per tick
    pub speed: f32,
}

impl Cloud {
    pub fn random(viewport: &Viewport, rng: &mut impl Rng) -> Self {
        Self {
            pos: Vec2::new(
                rng.random_range(0.0..viewport.width),
                rng.random_range(0.0..viewport.height),
            ),
            width: rng.random_range(CLOUD_MIN_WIDTH..CLOUD_MAX_WIDTH),
            height: rng.random_range(CLOUD_MIN_HEIGHT..CLOUD_MAX_HEIGHT),
            speed: rng.random_range(CLOUD_MIN_SPEED..CLOUD_MAX_SPEED),
        }
    }

    /// Drift left, re-entering from the right at a new height
    pub fn drift(&mut self, viewport: &Viewport, rng: &mut impl Rng) {
        self.pos.x -= self.speed;
        if self.pos.x < CLOUD_WRAP_LEFT {
            self.pos.x = viewport.width + CLOUD_REENTRY_OFFSET;
            self.pos.y = rng.random_range(0.0..viewport.height);
        }
    }
}

/// Things that happened during the last tick, for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// An obstacle passed the bottom edge; carries the new score
    ScoreChanged { score: u32 },
    ObstacleSpawned { id: u32, kind: ObstacleKind },
    DifficultyIncreased { difficulty: f32 },
    /// Balloon touched an obstacle
    Collision { obstacle_id: u32 },
}

/// Complete simulation state for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub viewport: Viewport,
    pub balloon: Balloon,
    /// Active obstacles, in spawn order
    pub obstacles: Vec<Obstacle>,
    pub clouds: Vec<Cloud>,
    pub score: u32,
    pub difficulty: f32,
    pub speed_multiplier: f32,
    /// Ticks since the last obstacle spawn
    pub spawn_timer: u32,
    /// Unpaused ticks simulated this run
    pub time_ticks: u64,
    /// Events emitted by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Fresh run state: balloon at spawn, no obstacles, new clouds
    pub fn new(viewport: Viewport, tuning: &Tuning, rng: &mut impl Rng) -> Self {
        let clouds = (0..tuning.cloud_count)
            .map(|_| Cloud::random(&viewport, rng))
            .collect();

        Self {
            viewport,
            balloon: Balloon::spawn(tuning, &viewport),
            obstacles: Vec::new(),
            clouds,
            score: 0,
            difficulty: tuning.start_difficulty,
            speed_multiplier: tuning.start_speed_multiplier,
            spawn_timer: 0,
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Adopt a new viewport without resetting the run
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.balloon.clamp_to(&viewport);
    }
}
