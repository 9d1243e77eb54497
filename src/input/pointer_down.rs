//! Pointer down handling - drag/resize initiation and activation.
//!
//! Transition guards live here: a drag only starts when dragging is enabled,
//! a resize only when resizing is enabled and the grabbed stick is in the
//! enabled set. The engines' own `DragDisabled`/`HandleDisabled` checks are
//! therefore never reached through this path.

use crate::element::{DragResize, Update, UpdateKind};
use crate::error::{EngineError, EngineResult};
use crate::input::PointerTarget;
use crate::types::ScreenPoint;
use tracing::{debug, warn};

impl DragResize {
    pub fn pointer_down(
        &mut self,
        position: ScreenPoint,
        target: PointerTarget,
    ) -> EngineResult<Option<Update>> {
        if !self.state.is_idle() {
            warn!(
                element = self.id,
                mode = ?self.mode(),
                "Pointer down refused: interaction already active"
            );
            return Err(EngineError::InteractionAlreadyActive);
        }
        if !position.is_finite() {
            warn!(
                element = self.id,
                x = position.x,
                y = position.y,
                "Pointer down refused: non-finite position"
            );
            return Err(EngineError::InvalidPosition {
                x: position.x,
                y: position.y,
            });
        }

        match target {
            PointerTarget::Outside => Ok(self.deactivate_by_pointer()),

            PointerTarget::Body => {
                let activated = self.activate_by_pointer();

                if !self.config.is_draggable {
                    debug!(element = self.id, "Body pressed, dragging disabled");
                    let kind = if activated {
                        UpdateKind::Activated
                    } else {
                        UpdateKind::Clicked
                    };
                    return Ok(Some(self.snapshot(kind)));
                }

                self.state.start_dragging(self.rect, position);
                debug!(element = self.id, rect = %self.rect, "Drag started");
                Ok(Some(self.snapshot(UpdateKind::DragStarted)))
            }

            PointerTarget::Stick(stick) => {
                if !self.config.is_stick_enabled(stick) {
                    debug!(element = self.id, %stick, "Stick pressed while disabled, ignoring");
                    return Ok(None);
                }

                self.activate_by_pointer();
                self.state.start_resizing(stick, self.rect, position);
                debug!(element = self.id, %stick, rect = %self.rect, "Resize started");
                Ok(Some(self.snapshot(UpdateKind::ResizeStarted)))
            }
        }
    }
}
