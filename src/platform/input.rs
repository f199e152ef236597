//! Polled input
//!
//! Event handlers only record raw facts (key pressed, button held, pointer
//! moved). The simulation asks for a [`TickInput`] snapshot once per frame.

use std::collections::HashSet;

use glam::Vec2;

use crate::consts::MOBILE_BREAKPOINT;
use crate::sim::TickInput;

/// Logical controls, also the on-screen button set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Up,
    Down,
    Left,
    Right,
    Attack,
}

impl Control {
    /// Keyboard `KeyboardEvent.key` values bound to this control
    pub fn keys(&self) -> &'static [&'static str] {
        match self {
            Control::Up => &["w", "ArrowUp"],
            Control::Down => &["s", "ArrowDown"],
            Control::Left => &["a", "ArrowLeft"],
            Control::Right => &["d", "ArrowRight"],
            Control::Attack => &[" ", "Space"],
        }
    }

    /// Parse an on-screen button name (`"up"`, `"attack"`, ...)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "up" => Some(Control::Up),
            "down" => Some(Control::Down),
            "left" => Some(Control::Left),
            "right" => Some(Control::Right),
            "attack" => Some(Control::Attack),
            _ => None,
        }
    }
}

/// Canvas bounding rect in client coordinates (`getBoundingClientRect`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Raw input state accumulated between frames
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashSet<String>,
    buttons: HashSet<Control>,
    pointer: Option<Vec2>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: &str) {
        self.keys.insert(key.to_string());
    }

    pub fn key_up(&mut self, key: &str) {
        self.keys.remove(key);
    }

    /// On-screen button pressed or released (pointerdown / pointerup / pointerleave)
    pub fn set_button(&mut self, control: Control, pressed: bool) {
        if pressed {
            self.buttons.insert(control);
        } else {
            self.buttons.remove(&control);
        }
    }

    /// Pointer moved over the canvas; ignored unless a match is being played
    ///
    /// Client coordinates are mapped into canvas space so aiming works when
    /// the canvas is displayed at a different size than its backing store.
    pub fn pointer_move(
        &mut self,
        client: Vec2,
        rect: CanvasRect,
        canvas_size: Vec2,
        playing: bool,
    ) {
        if !playing || rect.width <= 0.0 || rect.height <= 0.0 {
            return;
        }
        let scale = canvas_size / Vec2::new(rect.width, rect.height);
        self.pointer = Some((client - Vec2::new(rect.left, rect.top)) * scale);
    }

    /// Pointer left the play surface
    pub fn pointer_leave(&mut self) {
        self.pointer = None;
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// True if any source (keyboard or on-screen button) holds `control`
    pub fn is_active(&self, control: Control) -> bool {
        self.buttons.contains(&control) || control.keys().iter().any(|k| self.keys.contains(*k))
    }

    /// Sample the current intents for one frame
    pub fn snapshot(&self) -> TickInput {
        TickInput {
            up: self.is_active(Control::Up),
            down: self.is_active(Control::Down),
            left: self.is_active(Control::Left),
            right: self.is_active(Control::Right),
            attack: self.is_active(Control::Attack),
            pointer: self.pointer,
        }
    }
}

/// Whether the on-screen controls should be shown for this viewport width
pub fn show_touch_controls(viewport_width: f32) -> bool {
    viewport_width < MOBILE_BREAKPOINT
}
