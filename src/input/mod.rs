//! Pointer input handling for the canvas editor.
//!
//! `state` holds the gesture state machine, `coords` the screen/canvas
//! conversions. The `pointer_*` modules implement the event routing on
//! [`crate::editor::Editor`].

pub mod coords;
mod pointer_down;
mod pointer_move;
mod pointer_up;
pub mod state;

pub use state::InputState;

/// Keyboard modifiers relevant to pointer routing.
#[derive(Clone, Copy, Debug, Default)]
pub struct Modifiers {
    /// Shift toggles multi-select membership
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { shift: false };
    pub const SHIFT: Modifiers = Modifiers { shift: true };
}
