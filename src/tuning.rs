//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads lives here so a host can
//! ship alternate balance files without recompiling. Defaults reproduce the
//! classic game.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Gameplay balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Balloon ===
    pub balloon_width: f32,
    pub balloon_height: f32,
    /// Base horizontal speed (pixels/tick)
    pub balloon_speed: f32,
    /// Base rise speed (pixels/tick)
    pub balloon_rise_speed: f32,
    pub balloon_spawn_offset: f32,
    pub balloon_hitbox_divisor: f32,

    // === Obstacles ===
    pub obstacle_min_size: f32,
    pub obstacle_max_size: f32,
    pub obstacle_edge_margin: f32,
    pub obstacle_base_speed: f32,
    pub obstacle_speed_per_difficulty: f32,
    pub obstacle_hitbox_divisor: f32,
    pub score_per_obstacle: u32,

    // === Spawn cadence ===
    pub spawn_interval_base: f32,
    pub spawn_interval_per_difficulty: f32,
    pub min_spawn_interval_ticks: u32,

    // === Progression ===
    pub start_difficulty: f32,
    pub difficulty_step: f32,
    /// Difficulty rises each time the score reaches a multiple of this
    pub difficulty_score_interval: u32,
    pub start_speed_multiplier: f32,
    pub speed_ramp_per_tick: f32,
    pub max_speed_multiplier: f32,

    // === Scenery ===
    pub cloud_count: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            balloon_width: BALLOON_WIDTH,
            balloon_height: BALLOON_HEIGHT,
            balloon_speed: BALLOON_SPEED,
            balloon_rise_speed: BALLOON_RISE_SPEED,
            balloon_spawn_offset: BALLOON_SPAWN_OFFSET,
            balloon_hitbox_divisor: BALLOON_HITBOX_DIVISOR,

            obstacle_min_size: OBSTACLE_MIN_SIZE,
            obstacle_max_size: OBSTACLE_MAX_SIZE,
            obstacle_edge_margin: OBSTACLE_EDGE_MARGIN,
            obstacle_base_speed: OBSTACLE_BASE_SPEED,
            obstacle_speed_per_difficulty: OBSTACLE_SPEED_PER_DIFFICULTY,
            obstacle_hitbox_divisor: OBSTACLE_HITBOX_DIVISOR,
            score_per_obstacle: SCORE_PER_OBSTACLE,

            spawn_interval_base: SPAWN_INTERVAL_BASE,
            spawn_interval_per_difficulty: SPAWN_INTERVAL_PER_DIFFICULTY,
            min_spawn_interval_ticks: MIN_SPAWN_INTERVAL_TICKS,

            start_difficulty: START_DIFFICULTY,
            difficulty_step: DIFFICULTY_STEP,
            difficulty_score_interval: DIFFICULTY_SCORE_INTERVAL,
            start_speed_multiplier: START_SPEED_MULTIPLIER,
            speed_ramp_per_tick: SPEED_RAMP_PER_TICK,
            max_speed_multiplier: MAX_SPEED_MULTIPLIER,

            cloud_count: CLOUD_COUNT,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load a tuning file from disk
    pub fn load(path: &Path) -> Result<Self, TuningError> {
        let json = fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_json_str(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Serialize to pretty JSON (for writing a starter balance file)
    pub fn to_json_pretty(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would make the simulation degenerate
    pub fn validate(&self) -> Result<(), TuningError> {
        positive("balloon_width", self.balloon_width)?;
        positive("balloon_height", self.balloon_height)?;
        non_negative("balloon_speed", self.balloon_speed)?;
        non_negative("balloon_rise_speed", self.balloon_rise_speed)?;
        non_negative("balloon_spawn_offset", self.balloon_spawn_offset)?;
        positive("balloon_hitbox_divisor", self.balloon_hitbox_divisor)?;
        if self.balloon_width >= MIN_VIEWPORT_EDGE {
            return Err(invalid(
                "balloon_width",
                format!("must be narrower than the minimum viewport ({MIN_VIEWPORT_EDGE})"),
            ));
        }

        positive("obstacle_min_size", self.obstacle_min_size)?;
        positive("obstacle_max_size", self.obstacle_max_size)?;
        if !(self.obstacle_max_size > self.obstacle_min_size) {
            return Err(invalid(
                "obstacle_max_size",
                "must be greater than obstacle_min_size".to_string(),
            ));
        }
        non_negative("obstacle_edge_margin", self.obstacle_edge_margin)?;
        if self.obstacle_edge_margin * 2.0 >= MIN_VIEWPORT_EDGE {
            return Err(invalid(
                "obstacle_edge_margin",
                format!("both margins must fit inside the minimum viewport ({MIN_VIEWPORT_EDGE})"),
            ));
        }
        positive("obstacle_base_speed", self.obstacle_base_speed)?;
        non_negative(
            "obstacle_speed_per_difficulty",
            self.obstacle_speed_per_difficulty,
        )?;
        positive("obstacle_hitbox_divisor", self.obstacle_hitbox_divisor)?;
        if self.score_per_obstacle == 0 {
            return Err(invalid("score_per_obstacle", "must be at least 1".to_string()));
        }

        positive("spawn_interval_base", self.spawn_interval_base)?;
        non_negative(
            "spawn_interval_per_difficulty",
            self.spawn_interval_per_difficulty,
        )?;
        if self.min_spawn_interval_ticks == 0 {
            return Err(invalid(
                "min_spawn_interval_ticks",
                "must be at least 1".to_string(),
            ));
        }

        non_negative("start_difficulty", self.start_difficulty)?;
        non_negative("difficulty_step", self.difficulty_step)?;
        if self.difficulty_score_interval == 0 {
            return Err(invalid(
                "difficulty_score_interval",
                "must be at least 1".to_string(),
            ));
        }
        positive("start_speed_multiplier", self.start_speed_multiplier)?;
        non_negative("speed_ramp_per_tick", self.speed_ramp_per_tick)?;
        positive("max_speed_multiplier", self.max_speed_multiplier)?;
        if !(self.max_speed_multiplier >= self.start_speed_multiplier) {
            return Err(invalid(
                "max_speed_multiplier",
                "must be at least start_speed_multiplier".to_string(),
            ));
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> TuningError {
    TuningError::Invalid { field, reason }
}

fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be a positive number, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be zero or positive, got {value}")))
    }
}
