//! Game session state machine
//!
//! Owns everything scoped to a play session: the simulation state, input,
//! RNG and phase. The presentation layer drives it with `tick()` and the
//! menu actions, and observes it through `SessionListener`.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::sim::{GameEvent, GameState, InputTracker, Key, TickOutcome, Viewport, tick};
use crate::tuning::Tuning;

/// Session phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Main menu: before the first start or after quitting
    Idle,
    Running,
    /// Simulation frozen; ticks are still accepted and ignored
    Paused,
    /// Run ended; final score frozen
    GameOver,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionAction {
    Start,
    TogglePause,
    Resume,
    Restart,
    QuitToMenu,
    /// Raised by the simulation when the balloon hits an obstacle
    Collide,
}

/// Result of a transition attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub applied: bool,
    pub from: SessionPhase,
    pub to: SessionPhase,
    pub action: SessionAction,
}

/// Phase reached by `action` from `phase`, or None if the action is not allowed
pub fn next_phase(phase: SessionPhase, action: SessionAction) -> Option<SessionPhase> {
    use SessionAction as A;
    use SessionPhase as P;

    match (phase, action) {
        (P::Idle, A::Start) => Some(P::Running),
        (P::Running, A::TogglePause) => Some(P::Paused),
        (P::Paused, A::TogglePause | A::Resume) => Some(P::Running),
        (P::Running, A::Collide) => Some(P::GameOver),
        (P::GameOver | P::Paused, A::Restart) => Some(P::Running),
        (P::GameOver | P::Paused, A::QuitToMenu) => Some(P::Idle),
        _ => None,
    }
}

/// Callbacks for the presentation layer. All methods default to no-ops.
pub trait SessionListener {
    /// Fired on every score increment
    fn on_score_changed(&mut self, _score: u32) {}

    /// Fired once when a run ends
    fn on_game_over(&mut self, _final_score: u32) {}

    /// Fired after every applied transition
    fn on_state_changed(&mut self, _phase: SessionPhase) {}
}

/// One player's game session
pub struct Session {
    phase: SessionPhase,
    seed: u64,
    rng: Pcg32,
    tuning: Tuning,
    state: GameState,
    input: InputTracker,
    listener: Option<Box<dyn SessionListener>>,
}

impl Session {
    /// Create an idle session. The seed determines every run started from it.
    pub fn new(tuning: Tuning, width: f32, height: f32, seed: u64) -> Self {
        let viewport = Viewport::new(width, height);
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = GameState::new(viewport, &tuning, &mut rng);
        Self {
            phase: SessionPhase::Idle,
            seed,
            rng,
            tuning,
            state,
            input: InputTracker::new(),
            listener: None,
        }
    }

    pub fn with_listener(mut self, listener: Box<dyn SessionListener>) -> Self {
        self.listener = Some(listener);
        self
    }

    pub fn set_listener(&mut self, listener: Box<dyn SessionListener>) {
        self.listener = Some(listener);
    }

    // === Queries ===

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn difficulty(&self) -> f32 {
        self.state.difficulty
    }

    pub fn speed_multiplier(&self) -> f32 {
        self.state.speed_multiplier
    }

    /// Full simulation state for rendering
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn viewport(&self) -> Viewport {
        self.state.viewport
    }

    pub fn input(&self) -> &InputTracker {
        &self.input
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Seed used by the next start or restart
    pub fn set_seed(&mut self, seed: u64) {
        self.seed = seed;
    }

    // === Menu actions ===

    pub fn start(&mut self) -> Transition {
        self.apply(SessionAction::Start)
    }

    pub fn toggle_pause(&mut self) -> Transition {
        self.apply(SessionAction::TogglePause)
    }

    pub fn resume(&mut self) -> Transition {
        self.apply(SessionAction::Resume)
    }

    pub fn restart(&mut self) -> Transition {
        self.apply(SessionAction::Restart)
    }

    pub fn quit_to_menu(&mut self) -> Transition {
        self.apply(SessionAction::QuitToMenu)
    }

    /// Attempt a transition. Disallowed actions are ignored and reported
    /// with `applied == false`.
    pub fn apply(&mut self, action: SessionAction) -> Transition {
        let from = self.phase;
        let Some(to) = next_phase(from, action) else {
            log::debug!("Ignoring {:?} while {:?}", action, from);
            return Transition {
                applied: false,
                from,
                to: from,
                action,
            };
        };

        match action {
            SessionAction::Start | SessionAction::Restart => self.reset(),
            SessionAction::QuitToMenu => {
                self.reset();
                self.input.clear();
            }
            _ => {}
        }

        self.phase = to;
        log::info!("Session {:?} -> {:?} ({:?})", from, to, action);

        if let Some(listener) = self.listener.as_mut() {
            listener.on_state_changed(to);
            if to == SessionPhase::GameOver {
                listener.on_game_over(self.state.score);
            }
        }

        Transition {
            applied: true,
            from,
            to,
            action,
        }
    }

    // === Host inputs ===

    /// Record a key transition. A fresh pause press toggles pause while a
    /// run is in progress.
    pub fn set_pressed(&mut self, key: Key, pressed: bool) {
        let pause_edge = self.input.set_pressed(key, pressed);
        if pause_edge && matches!(self.phase, SessionPhase::Running | SessionPhase::Paused) {
            self.toggle_pause();
        }
    }

    /// Record a key transition by host key name; unknown names are ignored
    pub fn set_key_name(&mut self, name: &str, pressed: bool) {
        if let Some(key) = Key::from_name(name) {
            self.set_pressed(key, pressed);
        }
    }

    /// Adopt a new viewport without resetting the run
    pub fn set_viewport_size(&mut self, width: f32, height: f32) -> Viewport {
        let viewport = Viewport::new(width, height);
        self.state.set_viewport(viewport);
        viewport
    }

    /// Advance one tick. No-op unless running. Returns true if the
    /// simulation advanced.
    pub fn tick(&mut self) -> bool {
        if self.phase != SessionPhase::Running {
            return false;
        }

        let outcome = tick(&mut self.state, &self.input, &self.tuning, &mut self.rng);

        if let Some(listener) = self.listener.as_mut() {
            for event in &self.state.events {
                if let GameEvent::ScoreChanged { score } = event {
                    listener.on_score_changed(*score);
                }
            }
        }

        if let TickOutcome::Collided { obstacle_id } = outcome {
            log::info!(
                "Balloon hit obstacle #{} after {} ticks, final score {}",
                obstacle_id,
                self.state.time_ticks,
                self.state.score
            );
            self.apply(SessionAction::Collide);
        }
        true
    }

    /// Fresh run state from the session seed
    fn reset(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.state = GameState::new(self.state.viewport, &self.tuning, &mut self.rng);
    }
}
