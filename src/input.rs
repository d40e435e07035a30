//! Mouse and keyboard state tracking.
//!
//! winit delivers input as events; the vignettes want state ("is the left
//! button down, where was the cursor last frame"). These trackers fold the
//! event stream into that state and know the normalized coordinate mapping
//! the trackball math expects.

use std::collections::HashSet;

use cgmath::Vector2;
use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, MouseButton, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

/// Cursor position and left-button drag state.
#[derive(Debug, Clone, Copy)]
pub struct MouseState {
    pub position: PhysicalPosition<f64>,
    pub previous: PhysicalPosition<f64>,
    pub dragging: bool,
}

impl MouseState {
    pub fn new() -> Self {
        Self {
            position: PhysicalPosition::new(0.0, 0.0),
            previous: PhysicalPosition::new(0.0, 0.0),
            dragging: false,
        }
    }

    /// Folds a window event into the tracker. Wheel events are left to the
    /// caller; zoom semantics differ per vignette.
    pub fn process(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.previous = self.position;
                self.position = *position;
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.dragging = *state == ElementState::Pressed;
            }
            _ => {}
        }
    }

    /// True while the cursor moved since the previous frame.
    pub fn moved(&self) -> bool {
        self.position != self.previous
    }

    /// Marks the current position as consumed so the same motion is not
    /// applied twice.
    pub fn sync(&mut self) {
        self.previous = self.position;
    }

    /// The previous and current cursor positions in the [-1, 1] trackball
    /// coordinates (x right, y up).
    pub fn trackball_pair(&self, width: u32, height: u32) -> (Vector2<f32>, Vector2<f32>) {
        (
            trackball_coords(self.previous.x as f32, self.previous.y as f32, width, height),
            trackball_coords(self.position.x as f32, self.position.y as f32, width, height),
        )
    }

    /// Cursor delta in pixels since the previous frame.
    pub fn delta(&self) -> (f32, f32) {
        (
            (self.position.x - self.previous.x) as f32,
            (self.position.y - self.previous.y) as f32,
        )
    }
}

impl Default for MouseState {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a pixel position into the trackball's normalized coordinates.
pub fn trackball_coords(x: f32, y: f32, width: u32, height: u32) -> Vector2<f32> {
    let w = width as f32;
    let h = height as f32;
    Vector2::new(-(w - 2.0 * x) / w, -(2.0 * y - h) / h)
}

/// The set of currently held keys.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pressed: HashSet<KeyCode>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self {
            pressed: HashSet::new(),
        }
    }

    /// Folds a window event into the tracker. Returns the key if this event
    /// was a fresh press (not a repeat), which is what toggle-style bindings
    /// want.
    pub fn process(&mut self, event: &WindowEvent) -> Option<KeyCode> {
        if let WindowEvent::KeyboardInput { event, .. } = event {
            if let PhysicalKey::Code(code) = event.physical_key {
                match event.state {
                    ElementState::Pressed => {
                        if self.pressed.insert(code) {
                            return Some(code);
                        }
                    }
                    ElementState::Released => {
                        self.pressed.remove(&code);
                    }
                }
            }
        }
        None
    }

    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }
}
