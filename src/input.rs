//! Per-frame input accumulation.
//!
//! Window and device events are folded into an [`InputState`] as they
//! arrive; once per frame the app drains it into a [`FrameInput`] snapshot
//! for the physics step. Mouse motion only steers the camera while the
//! cursor is captured.

use std::collections::HashSet;

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// One frame's worth of resolved input, consumed by `Player::update`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub jump_requested: bool,
    /// Accumulated mouse motion in pixels (x, y) since the last frame.
    pub look_delta: (f32, f32),
}

/// Accumulates winit events between frames.
pub struct InputState {
    keys_held: HashSet<KeyCode>,
    jump_latch: bool,
    mouse_delta: (f32, f32),
    cursor_captured: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys_held: HashSet::new(),
            jump_latch: false,
            mouse_delta: (0.0, 0.0),
            cursor_captured: true,
        }
    }

    /// Folds a keyboard event into the held-key set and the jump latch.
    pub fn process_key_event(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };
        match event.state {
            ElementState::Pressed => {
                if code == KeyCode::Space && !event.repeat {
                    self.jump_latch = true;
                }
                self.keys_held.insert(code);
            }
            ElementState::Released => {
                self.keys_held.remove(&code);
            }
        }
    }

    /// Accumulates a raw mouse motion delta. Ignored while the cursor is
    /// free, so releasing the mouse never yanks the view.
    pub fn process_mouse_motion(&mut self, delta: (f64, f64)) {
        if !self.cursor_captured {
            return;
        }
        self.mouse_delta.0 += delta.0 as f32;
        self.mouse_delta.1 += delta.1 as f32;
    }

    pub fn set_cursor_captured(&mut self, captured: bool) {
        self.cursor_captured = captured;
    }

    pub fn cursor_captured(&self) -> bool {
        self.cursor_captured
    }

    /// Drains the per-frame state into a snapshot. Held keys persist across
    /// frames; the jump latch and mouse delta fire once.
    pub fn take_frame_input(&mut self) -> FrameInput {
        let frame = FrameInput {
            forward: self.keys_held.contains(&KeyCode::KeyW),
            back: self.keys_held.contains(&KeyCode::KeyS),
            left: self.keys_held.contains(&KeyCode::KeyA),
            right: self.keys_held.contains(&KeyCode::KeyD),
            jump_requested: self.jump_latch,
            look_delta: self.mouse_delta,
        };
        self.jump_latch = false;
        self.mouse_delta = (0.0, 0.0);
        frame
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
