//! Keyboard tracking
//!
//! Terminals report keys as events, not as a keyboard state. `InputTracker`
//! keeps the frame each key was last seen so held keys can be reconstructed:
//!
//! * With keyboard enhancement (kitty protocol terminals) keys arrive as
//!   `Press`/`Repeat`/`Release` and are dropped on release.
//! * Classic terminals only send `Press`, repeated by the OS while the key is
//!   down. A key then counts as held until it has been silent for the hold
//!   window, which must outlast the OS delay before the first repeat.
//!
//! A `Press` for a key that is not already held is a new press; OS repeats of
//! a held key are not.

use std::collections::{HashMap, HashSet};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::sim::TickInput;

/// How long a key stays held without a refresh when releases are reported (ms)
pub const HOLD_WINDOW_MS: f32 = 133.0;
/// Hold window for terminals without release events (ms)
pub const REPEAT_DELAY_WINDOW_MS: f32 = 500.0;

/// Per-frame key state
#[derive(Debug)]
pub struct InputTracker {
    /// Frame each held key was last pressed or repeated
    key_frame: HashMap<KeyCode, u64>,
    /// Keys that went down since the last `next_input`
    pressed: HashSet<KeyCode>,
    hold_frames: u64,
    frame: u64,
    quit: bool,
}

impl InputTracker {
    /// Tracker whose hold window matches the given frame rate
    ///
    /// `release_events` is whether the terminal reports key releases. Without
    /// them the window has to bridge the OS key-repeat delay.
    pub fn new(target_fps: u32, release_events: bool) -> Self {
        let window_ms = if release_events {
            HOLD_WINDOW_MS
        } else {
            REPEAT_DELAY_WINDOW_MS
        };
        let hold_frames = (window_ms * target_fps.max(1) as f32 / 1000.0).ceil() as u64;
        Self {
            key_frame: HashMap::new(),
            pressed: HashSet::new(),
            hold_frames: hold_frames.max(1),
            frame: 0,
            quit: false,
        }
    }

    /// Feed one key event
    pub fn handle_key(&mut self, event: KeyEvent) {
        let code = normalize(event.code);
        match event.kind {
            KeyEventKind::Press => {
                if is_quit(code, event.modifiers) {
                    self.quit = true;
                }
                if !self.is_held(code) {
                    self.pressed.insert(code);
                }
                self.key_frame.insert(code, self.frame);
            }
            KeyEventKind::Repeat => {
                self.key_frame.insert(code, self.frame);
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&code);
            }
        }
    }

    /// Whether a quit key has been pressed
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Build this frame's `TickInput` and move on to the next frame
    pub fn next_input(&mut self) -> TickInput {
        let input = TickInput {
            jump_pressed: JUMP_KEYS.iter().any(|k| self.pressed.contains(k)),
            duck_held: self.is_held(KeyCode::Down),
            confirm_pressed: self.pressed.contains(&KeyCode::Enter),
        };
        self.pressed.clear();
        self.frame += 1;

        let (frame, window) = (self.frame, self.hold_frames);
        self.key_frame
            .retain(|_, last| frame.saturating_sub(*last) <= window);
        input
    }

    fn is_held(&self, code: KeyCode) -> bool {
        self.key_frame
            .get(&code)
            .is_some_and(|&last| self.frame.saturating_sub(last) <= self.hold_frames)
    }
}

const JUMP_KEYS: [KeyCode; 2] = [KeyCode::Char(' '), KeyCode::Up];

fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Esc | KeyCode::Char('q') => !modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
