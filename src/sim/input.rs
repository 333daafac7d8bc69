//! Input intent aggregation
//!
//! Decouples physical key identity from game semantics: the front end
//! translates whatever raw events it has (keyboard, touch, gamepad) into
//! [`InputAction`] press/release calls, and the simulation only ever sees the
//! per-tick [`TickInput`] snapshot.

use serde::{Deserialize, Serialize};

/// Logical input actions, independent of raw key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputAction {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
    /// Pause toggle; edge-triggered, release is a no-op
    Pause,
}

/// Vertical movement resolved for one paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleMove {
    Up,
    Down,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: Option<PaddleMove>,
    pub right: Option<PaddleMove>,
    /// Pause toggle (one-shot)
    pub pause: bool,
}

/// Tracks currently-held actions between ticks.
///
/// Movement actions are level-triggered: held until released. Pause is
/// edge-triggered: each press latches exactly one toggle, drained by the next
/// [`tick_input`](InputState::tick_input) call.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    left_up: bool,
    left_down: bool,
    right_up: bool,
    right_down: bool,
    pause_pending: bool,
}

impl InputState {
    pub fn press(&mut self, action: InputAction) {
        match action {
            InputAction::LeftUp => self.left_up = true,
            InputAction::LeftDown => self.left_down = true,
            InputAction::RightUp => self.right_up = true,
            InputAction::RightDown => self.right_down = true,
            InputAction::Pause => self.pause_pending = true,
        }
    }

    pub fn release(&mut self, action: InputAction) {
        match action {
            InputAction::LeftUp => self.left_up = false,
            InputAction::LeftDown => self.left_down = false,
            InputAction::RightUp => self.right_up = false,
            InputAction::RightDown => self.right_down = false,
            InputAction::Pause => {}
        }
    }

    /// Snapshot the intents for the next tick, draining any latched pause.
    pub fn tick_input(&mut self) -> TickInput {
        TickInput {
            left: resolve(self.left_up, self.left_down),
            right: resolve(self.right_up, self.right_down),
            pause: std::mem::take(&mut self.pause_pending),
        }
    }
}

// Up wins when both directions are held for the same paddle
fn resolve(up: bool, down: bool) -> Option<PaddleMove> {
    if up {
        Some(PaddleMove::Up)
    } else if down {
        Some(PaddleMove::Down)
    } else {
        None
    }
}
