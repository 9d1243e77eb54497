//! Interaction state machine - the single source of truth for what the
//! pointer is currently doing to an element.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging             (pointer down on the body, dragging enabled)
//! Idle -> Resizing(stick)      (pointer down on an enabled stick, resizing enabled)
//!
//! Dragging | Resizing -> Idle  (pointer up commits, pointer cancel reverts)
//! ```
//!
//! Everything captured at pointer down (starting rectangle, screen origin)
//! lives inside the variant that needs it, so a drag can never observe resize
//! data and `Idle` carries nothing at all.

use crate::types::{InteractionMode, PointerSample, Rectangle, ScreenPoint, Stick};

/// Internal state of one element's pointer interaction.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionState {
    /// No active interaction
    #[default]
    Idle,

    /// Moving the element body
    Dragging {
        /// Rectangle at pointer down (restored on cancel)
        start_rect: Rectangle,
        /// Screen position of the pointer down
        origin: ScreenPoint,
        /// Cumulative local displacement since pointer down
        sample: PointerSample,
    },

    /// Resizing from one stick
    Resizing {
        /// Stick that was grabbed
        stick: Stick,
        /// Rectangle at pointer down (restored on cancel)
        start_rect: Rectangle,
        /// Screen position of the pointer down
        origin: ScreenPoint,
        /// Cumulative local displacement since pointer down
        sample: PointerSample,
    },
}

impl InteractionState {
    /// Public mode projection
    pub fn mode(&self) -> InteractionMode {
        match self {
            Self::Idle => InteractionMode::Idle,
            Self::Dragging { .. } => InteractionMode::Dragging,
            Self::Resizing { stick, .. } => InteractionMode::Resizing(*stick),
        }
    }

    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Get the stick being resized, if any
    pub fn resizing_stick(&self) -> Option<Stick> {
        match self {
            Self::Resizing { stick, .. } => Some(*stick),
            _ => None,
        }
    }

    /// Rectangle captured at pointer down
    pub fn start_rect(&self) -> Option<Rectangle> {
        match self {
            Self::Dragging { start_rect, .. } | Self::Resizing { start_rect, .. } => {
                Some(*start_rect)
            }
            Self::Idle => None,
        }
    }

    /// Screen position captured at pointer down
    pub fn origin(&self) -> Option<ScreenPoint> {
        match self {
            Self::Dragging { origin, .. } | Self::Resizing { origin, .. } => Some(*origin),
            Self::Idle => None,
        }
    }

    /// Current cumulative pointer sample
    pub fn sample(&self) -> Option<PointerSample> {
        match self {
            Self::Dragging { sample, .. } | Self::Resizing { sample, .. } => Some(*sample),
            Self::Idle => None,
        }
    }

    /// Replace the cumulative sample. No-op while idle.
    pub fn set_sample(&mut self, new_sample: PointerSample) {
        match self {
            Self::Dragging { sample, .. } | Self::Resizing { sample, .. } => *sample = new_sample,
            Self::Idle => {}
        }
    }

    /// Start dragging from `start_rect`
    pub fn start_dragging(&mut self, start_rect: Rectangle, origin: ScreenPoint) {
        *self = Self::Dragging {
            start_rect,
            origin,
            sample: PointerSample::ZERO,
        };
    }

    /// Start resizing from `stick`
    pub fn start_resizing(
        &mut self,
        stick: Stick,
        start_rect: Rectangle,
        origin: ScreenPoint,
    ) {
        *self = Self::Resizing {
            stick,
            start_rect,
            origin,
            sample: PointerSample::ZERO,
        };
    }

    /// Reset to Idle, returning the state that was active
    pub fn reset(&mut self) -> InteractionState {
        std::mem::take(self)
    }
}
