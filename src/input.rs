//! Turns raw terminal key events into one [`InputState`] per frame.
//!
//! Terminals without keyboard enhancement never report releases, only a
//! first press followed by OS key repeats.  A key therefore counts as held
//! while its last press or repeat is recent enough.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, ModifierKeyCode};

use crate::entities::InputState;

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  The OS key-repeat rate is ≥ 15 Hz, so a window of 8
/// frames (≈128 ms at 16 ms per frame) is always refreshed before expiry.
pub const HOLD_WINDOW: u64 = 8;

const LEFT_KEYS: [KeyCode; 3] = [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
const RIGHT_KEYS: [KeyCode; 3] = [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];
const JUMP_KEYS: [KeyCode; 2] = [KeyCode::Char(' '), KeyCode::Up];
const THROW_KEYS: [KeyCode; 3] = [
    KeyCode::Char('f'),
    KeyCode::Char('F'),
    KeyCode::Modifier(ModifierKeyCode::LeftControl),
];

pub fn is_quit_key(code: &KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Remembers the frame each key was last seen on.
#[derive(Debug, Default)]
pub struct KeyTracker {
    key_frame: HashMap<KeyCode, u64>,
    quit: bool,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one key event that arrived during `frame`.
    pub fn record(&mut self, event: &KeyEvent, frame: u64) {
        match event.kind {
            KeyEventKind::Press => {
                self.quit |= is_quit_key(&event.code, event.modifiers);
                self.key_frame.insert(event.code, frame);
            }
            KeyEventKind::Repeat => {
                self.key_frame.insert(event.code, frame);
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&event.code);
            }
        }
    }

    /// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
    pub fn is_held(&self, key: &KeyCode, frame: u64) -> bool {
        self.key_frame
            .get(key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    fn any_held(&self, keys: &[KeyCode], frame: u64) -> bool {
        keys.iter().any(|k| self.is_held(k, frame))
    }

    /// The logical input for `frame`.  A quit request is reported once.
    pub fn snapshot(&mut self, frame: u64) -> InputState {
        InputState {
            left: self.any_held(&LEFT_KEYS, frame),
            right: self.any_held(&RIGHT_KEYS, frame),
            jump: self.any_held(&JUMP_KEYS, frame),
            throw: self.any_held(&THROW_KEYS, frame),
            quit: std::mem::take(&mut self.quit),
        }
    }
}
