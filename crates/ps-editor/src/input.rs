//! Input abstraction layer.
//!
//! Normalizes the page's pointer and keyboard events into an `InputEvent`
//! enum consumed by the resize session. Coordinates are viewport pixels.
//! Pointer-down is not an event here: it starts a session via
//! `ResizeSession::begin`.

/// Modifier keys held during a pointer event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Alt/Option: bypass snapping while held.
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self { alt: false };

    pub fn alt() -> Self {
        Self { alt: true }
    }
}

/// A normalized input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerMove {
        x: f64,
        y: f64,
        modifiers: Modifiers,
    },

    PointerUp {
        x: f64,
        y: f64,
        modifiers: Modifiers,
    },

    /// Key press; `key` follows `KeyboardEvent.key` (e.g. `"Escape"`).
    Key { key: String, modifiers: Modifiers },
}

impl InputEvent {
    pub fn pointer_move(x: f64, y: f64) -> Self {
        Self::PointerMove {
            x,
            y,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn pointer_up(x: f64, y: f64) -> Self {
        Self::PointerUp {
            x,
            y,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn key(key: &str) -> Self {
        Self::Key {
            key: key.to_string(),
            modifiers: Modifiers::NONE,
        }
    }
}
