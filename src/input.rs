//! Keyboard input sampled once per tick.
//!
//! `KeyStates` is the raw down/up state of every key the game cares about.
//! `InputTracker` compares it with the previous tick to tell held keys from
//! freshly pressed ones, so every read in a tick sees the same snapshot.

use crate::debug_input;
use macroquad::input::{KeyCode, is_key_down};
use macroquad::math::Vec2;

// Key bindings
pub const KEY_LEFT: KeyCode = KeyCode::Left;
pub const KEY_RIGHT: KeyCode = KeyCode::Right;
pub const KEY_UP: KeyCode = KeyCode::Up;
pub const KEY_DOWN: KeyCode = KeyCode::Down;
pub const KEY_PAUSE: KeyCode = KeyCode::Space;
pub const KEY_RESTART: KeyCode = KeyCode::Enter;

/// Which logical keys are down right now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyStates {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub pause: bool,
    pub restart: bool,
}

impl KeyStates {
    // Reads the keyboard through macroquad; needs a live window
    pub fn poll() -> Self {
        KeyStates {
            left: is_key_down(KEY_LEFT),
            right: is_key_down(KEY_RIGHT),
            up: is_key_down(KEY_UP),
            down: is_key_down(KEY_DOWN),
            pause: is_key_down(KEY_PAUSE),
            restart: is_key_down(KEY_RESTART),
        }
    }
}

/// Input for a single tick: held directions plus edge-triggered actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub pause_pressed: bool,
    pub restart_pressed: bool,
}

impl InputSnapshot {
    /// Per-axis direction, each component -1, 0 or 1.
    pub fn direction(&self) -> Vec2 {
        let axis = |negative: bool, positive: bool| match (negative, positive) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        };
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }
}

// Remembers last tick's keys to detect presses
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    previous: KeyStates,
}

impl InputTracker {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn next(&mut self, keys: KeyStates) -> InputSnapshot {
        let snapshot = InputSnapshot {
            left: keys.left,
            right: keys.right,
            up: keys.up,
            down: keys.down,
            pause_pressed: keys.pause && !self.previous.pause,
            restart_pressed: keys.restart && !self.previous.restart,
        };
        if snapshot != InputSnapshot::default() {
            debug_input!("{:?}", snapshot);
        }
        self.previous = keys;
        snapshot
    }
}
