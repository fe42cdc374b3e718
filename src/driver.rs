//! Simulation driver
//!
//! Owns the game state between frames. Key events update a held-key set;
//! each frame turns wall-clock time into a delta, snapshots the keys into a
//! `TickInput`, rate-limits firing and runs one tick.

use std::collections::HashSet;

use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{GameState, ResolveEvents, TickInput, autopilot, tick_with_events};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Fire,
}

impl Key {
    /// Map a DOM-style key name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "a" | "A" => Some(Key::Left),
            "ArrowRight" | "d" | "D" => Some(Key::Right),
            "ArrowUp" | "w" | "W" => Some(Key::Up),
            " " | "Space" => Some(Key::Fire),
            _ => None,
        }
    }
}

/// Keys currently held down
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Key>,
}

impl InputState {
    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Snapshot for one tick; `fire` here means "fire requested"
    pub fn snapshot(&self) -> TickInput {
        TickInput {
            rotate_left: self.is_held(Key::Left),
            rotate_right: self.is_held(Key::Right),
            thrust: self.is_held(Key::Up),
            fire: self.is_held(Key::Fire),
        }
    }
}

/// Game instance holding all state
pub struct Game {
    state: GameState,
    settings: Settings,
    input: InputState,
    /// Timestamp of the previous frame (ms)
    last_time: Option<f64>,
    /// Timestamp of the last accepted shot (ms)
    last_shot: Option<f64>,
    /// Idle/demo mode - the autopilot flies
    pub idle_mode: bool,
}

impl Game {
    pub fn new(settings: Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(clock_seed);
        Self::with_seed(settings, seed)
    }

    pub fn with_seed(settings: Settings, seed: u64) -> Self {
        Self {
            state: GameState::new(seed, settings.arena),
            settings,
            input: InputState::default(),
            last_time: None,
            last_shot: None,
            idle_mode: false,
        }
    }

    /// Current snapshot for rendering
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn key_down(&mut self, key: Key) {
        self.input.press(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.input.release(key);
    }

    /// Convert a frame timestamp into nominal-frame units
    fn delta(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_time {
            Some(last) => ((now_ms - last).max(0.0) / NOMINAL_FRAME_MS) as f32,
            None => 1.0,
        };
        self.last_time = Some(now_ms);
        dt
    }

    /// Whether a shot at `now_ms` clears the cooldown
    fn cooldown_ready(&self, now_ms: f64) -> bool {
        self.last_shot.is_none_or(|last| now_ms - last >= FIRE_COOLDOWN_MS)
    }

    /// Run one frame at wall-clock time `now_ms`
    pub fn frame(&mut self, now_ms: f64) -> ResolveEvents {
        let dt = self.delta(now_ms);

        if self.state.is_game_over() {
            return ResolveEvents::default();
        }

        let mut input = if self.idle_mode {
            autopilot(&self.state)
        } else {
            self.input.snapshot()
        };
        if input.fire {
            if self.cooldown_ready(now_ms) {
                self.last_shot = Some(now_ms);
            } else {
                input.fire = false;
            }
        }

        // The previous snapshot stays valid until the new one is complete
        let (state, events) = tick_with_events(self.state.clone(), &input, dt, &self.settings);
        if events.game_over {
            log::info!(
                "Round over after {} ticks, final score {}",
                state.time_ticks,
                state.score
            );
        }
        self.state = state;
        events
    }

    /// Throw the round away and start a fresh one
    pub fn restart(&mut self) {
        self.state = self.state.clone().reset();
        self.last_shot = None;
        log::info!("Started new game with seed: {}", self.state.seed);
    }
}

/// Seed from the system clock
fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5eed)
}
