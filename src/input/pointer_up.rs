//! Pointer up / cancel handling - commit or revert the interaction.
//!
//! Both end the interaction and apply any configuration queued while it ran.
//! Up keeps the rectangle from the last accepted move; cancel restores the
//! rectangle captured at pointer down.

use crate::element::{DragResize, Update, UpdateKind};
use crate::input::InteractionState;
use tracing::{debug, trace};

impl DragResize {
    pub fn pointer_up(&mut self) -> Option<Update> {
        if self.state.is_idle() {
            trace!(element = self.id, "Pointer up while idle, ignoring");
            return None;
        }

        let previous = self.state.reset();
        let kind = match previous {
            InteractionState::Resizing { .. } => UpdateKind::ResizeStopped,
            _ => UpdateKind::DragStopped,
        };
        self.apply_pending_configuration();
        debug!(
            element = self.id,
            rect = %self.rect,
            ?kind,
            sample = ?previous.sample(),
            "Interaction finished"
        );
        self.stats.log_summary();
        Some(self.snapshot(kind))
    }

    pub fn pointer_cancel(&mut self) -> Option<Update> {
        if self.state.is_idle() {
            trace!(element = self.id, "Pointer cancel while idle, ignoring");
            return None;
        }

        let previous = self.state.reset();
        if let Some(start_rect) = previous.start_rect() {
            self.rect = start_rect;
        }
        self.apply_pending_configuration();
        debug!(
            element = self.id,
            rect = %self.rect,
            discarded = ?previous.sample(),
            "Interaction cancelled, rectangle reverted"
        );
        Some(self.snapshot(UpdateKind::Cancelled))
    }
}
