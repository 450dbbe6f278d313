//! Flat pressed/released state for the five logical controls.
//!
//! Input callbacks write into an [`InputState`] whenever events arrive; the
//! simulation copies it once per fixed tick. A press and release that both land
//! between two ticks is never seen by physics.

use crate::{bitmask_flags::BitmaskFlags, define_bitmask_flags};

define_bitmask_flags!(Control, u8, {
    Forward,
    Back,
    Left,
    Right,
    Jump,
});

impl Control {
    pub const ALL: [Control; 5] = [
        Control::Forward,
        Control::Back,
        Control::Left,
        Control::Right,
        Control::Jump,
    ];

    /// Map a DOM `KeyboardEvent.code` to its control (WASD + Space).
    pub fn from_key_code(code: &str) -> Option<Control> {
        match code {
            "KeyW" => Some(Control::Forward),
            "KeyS" => Some(Control::Back),
            "KeyA" => Some(Control::Left),
            "KeyD" => Some(Control::Right),
            "Space" => Some(Control::Jump),
            _ => None,
        }
    }
}

/// Last-write-wins snapshot of which controls are held.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct InputState {
    flags: BitmaskFlags<u8>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience for tests and scripted input.
    pub fn with(controls: &[Control]) -> Self {
        let mut state = Self::new();
        for &c in controls {
            state.press(c);
        }
        state
    }

    #[inline]
    pub fn set(&mut self, control: Control, pressed: bool) {
        self.flags.set(control, pressed);
    }

    #[inline]
    pub fn press(&mut self, control: Control) {
        self.set(control, true);
    }

    #[inline]
    pub fn release(&mut self, control: Control) {
        self.set(control, false);
    }

    #[inline]
    pub fn is_pressed(&self, control: Control) -> bool {
        self.flags.has(control)
    }

    /// Any of forward/back/left/right held.
    #[inline]
    pub fn any_direction(&self) -> bool {
        self.flags.has_any(&[
            Control::Forward,
            Control::Back,
            Control::Left,
            Control::Right,
        ])
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.flags.is_empty()
    }

    /// Release everything, e.g. when the host window loses focus.
    #[inline]
    pub fn clear(&mut self) {
        self.flags.clear();
    }

    /// Apply a key event by DOM key code. Unknown codes are ignored.
    ///
    /// Returns whether the code mapped to a control.
    pub fn apply_key(&mut self, code: &str, pressed: bool) -> bool {
        match Control::from_key_code(code) {
            Some(control) => {
                self.set(control, pressed);
                true
            }
            None => false,
        }
    }
}
