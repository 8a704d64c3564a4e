//! Keyboard state tracking
//!
//! Decoupled from any event source: hosts translate their own key events
//! into `set_pressed` calls.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Pause,
}

impl Key {
    /// Map a host key name (DOM `KeyboardEvent.key` style) to a game key
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "a" | "A" => Some(Key::Left),
            "ArrowRight" | "d" | "D" => Some(Key::Right),
            "Escape" | "p" | "P" => Some(Key::Pause),
            _ => None,
        }
    }
}

/// Currently held keys
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    held: HashSet<Key>,
    /// Pause is edge-triggered; this only suppresses auto-repeat
    pause_down: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition.
    ///
    /// Returns true when this call is a fresh press of the pause key, which
    /// the caller should treat as a pause toggle. Pause is never reported as
    /// held by `is_pressed`.
    pub fn set_pressed(&mut self, key: Key, pressed: bool) -> bool {
        if key == Key::Pause {
            let edge = pressed && !self.pause_down;
            self.pause_down = pressed;
            return edge;
        }

        if pressed {
            self.held.insert(key);
        } else {
            self.held.remove(&key);
        }
        false
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        key != Key::Pause && self.held.contains(&key)
    }

    /// Query by host key name; unknown names are never pressed
    pub fn is_pressed_name(&self, name: &str) -> bool {
        Key::from_name(name).is_some_and(|key| self.is_pressed(key))
    }

    /// Horizontal intent: -1 left, 1 right, 0 neutral. Left wins when both are held.
    pub fn horizontal(&self) -> i8 {
        if self.is_pressed(Key::Left) {
            -1
        } else if self.is_pressed(Key::Right) {
            1
        } else {
            0
        }
    }

    /// Release everything
    pub fn clear(&mut self) {
        self.held.clear();
        self.pause_down = false;
    }
}
