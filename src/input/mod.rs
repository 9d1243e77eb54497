//! Pointer input handling for draggable/resizable elements.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InteractionState`) to
//! track the current interaction. Handlers for each pointer phase are
//! `impl DragResize` blocks split by phase, mirroring the event sequence
//! down -> move* -> up | cancel.
//!
//! ## Modules
//!
//! - `coords` - Screen to element-local delta conversion
//! - `state` - Interaction state machine enum and helper methods
//! - `pointer_down` - Start drags/resizes, activation
//! - `pointer_move` - Run the engines for the cumulative sample
//! - `pointer_up` - Commit (up) or revert (cancel)

pub mod coords;
mod pointer_down;
mod pointer_move;
mod pointer_up;
mod state;

pub use state::InteractionState;

use crate::types::{ScreenPoint, Stick};
use serde::{Deserialize, Serialize};

/// Phase of a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    /// Lost pointer capture, window blur, or an aborted gesture
    Cancel,
}

/// What a pointer down landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "stick", rename_all = "lowercase")]
pub enum PointerTarget {
    /// The element body
    #[default]
    Body,
    /// One of the resize sticks
    Stick(Stick),
    /// Anywhere outside the element
    Outside,
}

/// A pointer event in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub position: ScreenPoint,
    /// Only meaningful for `Down`
    #[serde(default)]
    pub target: PointerTarget,
}

impl PointerEvent {
    pub fn down(x: f64, y: f64, target: PointerTarget) -> Self {
        Self {
            phase: PointerPhase::Down,
            position: ScreenPoint::new(x, y),
            target,
        }
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self {
            phase: PointerPhase::Move,
            position: ScreenPoint::new(x, y),
            target: PointerTarget::Body,
        }
    }

    pub fn up(x: f64, y: f64) -> Self {
        Self {
            phase: PointerPhase::Up,
            position: ScreenPoint::new(x, y),
            target: PointerTarget::Body,
        }
    }

    pub fn cancel() -> Self {
        Self {
            phase: PointerPhase::Cancel,
            position: ScreenPoint::default(),
            target: PointerTarget::Body,
        }
    }
}
