//! The draggable/resizable element - owner of the rectangle, the interaction
//! state machine and the active configuration.
//!
//! Pointer handling lives in `input::{pointer_down, pointer_move, pointer_up}`
//! as further `impl DragResize` blocks; this module holds construction,
//! configuration management, activation and the notification types.
//!
//! Every accepted transition returns an [`Update`] describing the new
//! rectangle and mode. Refused or ignored events return `Ok(None)` or an
//! error and never touch the rectangle.

use crate::config::Configuration;
use crate::constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::{EngineError, EngineResult};
use crate::input::coords::CoordinateConverter;
use crate::input::{InteractionState, PointerEvent, PointerPhase, PointerTarget};
use crate::perf::InteractionStats;
use crate::sticks;
use crate::types::{InteractionMode, Rectangle, ScreenPoint};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

/// Source of element ids used to tell elements apart in logs
static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

// ============================================================================
// Notifications
// ============================================================================

/// What kind of transition produced an [`Update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum UpdateKind {
    /// The element became active without starting an interaction
    Activated,
    /// The element lost its active state
    Deactivated,
    /// A body press that neither started a drag nor changed activation
    Clicked,
    DragStarted,
    Dragging,
    DragStopped,
    ResizeStarted,
    Resizing,
    ResizeStopped,
    /// The interaction was aborted and the rectangle reverted
    Cancelled,
}

/// Snapshot emitted for the rendering collaborator after an accepted transition.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Update {
    pub kind: UpdateKind,
    pub rect: Rectangle,
    pub mode: InteractionMode,
    pub active: bool,
}

// ============================================================================
// Element
// ============================================================================

/// One draggable, resizable element.
///
/// Each element exclusively owns its state; nothing is shared between
/// elements, so all mutation goes through `&mut self`.
#[derive(Debug)]
pub struct DragResize {
    pub(crate) id: u64,
    pub(crate) rect: Rectangle,
    pub(crate) config: Configuration,
    /// Configuration received mid-interaction, applied when it ends
    pub(crate) pending_config: Option<Configuration>,
    pub(crate) state: InteractionState,
    pub(crate) active: bool,
    pub(crate) stats: InteractionStats,
}

/// A 200x200 element at the parent origin with the default configuration.
impl Default for DragResize {
    fn default() -> Self {
        Self::from_parts(
            Rectangle::new(0.0, 0.0, DEFAULT_WIDTH, DEFAULT_HEIGHT),
            Configuration::default(),
        )
    }
}

impl DragResize {
    /// Create an idle, inactive element.
    ///
    /// Fails if the configuration is invalid or the rectangle is below the
    /// configured minimum size.
    pub fn new(rect: Rectangle, config: Configuration) -> EngineResult<Self> {
        config.validate()?;
        config.admits(&rect)?;
        Ok(Self::from_parts(rect, config))
    }

    fn from_parts(rect: Rectangle, config: Configuration) -> Self {
        let id = NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed);
        debug!(element = id, %rect, "Element created");
        Self {
            id,
            rect,
            config,
            pending_config: None,
            state: InteractionState::Idle,
            active: false,
            stats: InteractionStats::new(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Current rectangle
    pub fn rect(&self) -> Rectangle {
        self.rect
    }

    /// Current interaction mode
    pub fn mode(&self) -> InteractionMode {
        self.state.mode()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Configuration the current (or next) interaction runs with
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Configuration queued until the running interaction ends
    pub fn pending_configuration(&self) -> Option<&Configuration> {
        self.pending_config.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Timing of pointer handling for this element
    pub fn stats(&self) -> &InteractionStats {
        &self.stats
    }

    /// Current state as an update, for hosts that want to resync.
    pub fn snapshot(&self, kind: UpdateKind) -> Update {
        Update {
            kind,
            rect: self.rect,
            mode: self.state.mode(),
            active: self.active,
        }
    }

    // ------------------------------------------------------------------------
    // Configuration and external updates
    // ------------------------------------------------------------------------

    /// Replace the configuration.
    ///
    /// Applied immediately while idle, and refused if the current rectangle
    /// would violate it. During a drag or resize the new value is queued
    /// (replacing any earlier queued value) so constraints never change under
    /// the user's hand; it is checked against the rectangle the interaction
    /// leaves behind.
    pub fn set_configuration(&mut self, config: Configuration) -> EngineResult<()> {
        config.validate()?;
        if self.state.is_idle() {
            config.admits(&self.rect)?;
            self.config = config;
            debug!(element = self.id, "Configuration applied");
        } else {
            self.pending_config = Some(config);
            debug!(element = self.id, mode = ?self.mode(), "Configuration queued until interaction ends");
        }
        Ok(())
    }

    /// Replace the rectangle from outside (position/size set by the host).
    ///
    /// Only allowed while idle.
    pub fn set_rectangle(&mut self, rect: Rectangle) -> EngineResult<()> {
        if !self.state.is_idle() {
            return Err(EngineError::InteractionAlreadyActive);
        }
        self.config.admits(&rect)?;
        self.rect = rect;
        Ok(())
    }

    /// Install the queued configuration once the interaction has ended.
    ///
    /// A queued value the final rectangle does not satisfy is dropped and the
    /// previous configuration stays in force.
    pub(crate) fn apply_pending_configuration(&mut self) {
        let Some(config) = self.pending_config.take() else {
            return;
        };
        match config.admits(&self.rect) {
            Ok(()) => {
                self.config = config;
                debug!(element = self.id, "Queued configuration applied");
            }
            Err(err) => {
                warn!(element = self.id, error = %err, "Queued configuration discarded");
            }
        }
    }

    // ------------------------------------------------------------------------
    // Activation
    // ------------------------------------------------------------------------

    /// Mark the element active. Returns an update only if the flag changed.
    pub fn activate(&mut self) -> Option<Update> {
        if self.active {
            return None;
        }
        self.active = true;
        debug!(element = self.id, "Activated");
        Some(self.snapshot(UpdateKind::Activated))
    }

    /// Mark the element inactive. Returns an update only if the flag changed.
    pub fn deactivate(&mut self) -> Option<Update> {
        if !self.active {
            return None;
        }
        self.active = false;
        debug!(element = self.id, "Deactivated");
        Some(self.snapshot(UpdateKind::Deactivated))
    }

    /// Pointer-driven activation, suppressed by `prevent_active_behavior`.
    /// Returns true if the element just became active.
    pub(crate) fn activate_by_pointer(&mut self) -> bool {
        !self.config.prevent_active_behavior && self.activate().is_some()
    }

    pub(crate) fn deactivate_by_pointer(&mut self) -> Option<Update> {
        if self.config.prevent_active_behavior {
            return None;
        }
        self.deactivate()
    }

    // ------------------------------------------------------------------------
    // Event dispatch
    // ------------------------------------------------------------------------

    /// Classify a screen point as a stick, the body or outside.
    ///
    /// `parent_origin` is the screen position of the parent's top-left corner.
    pub fn target_at(&self, point: ScreenPoint, parent_origin: ScreenPoint) -> PointerTarget {
        let (sx, sy) = point - parent_origin;
        let x = CoordinateConverter::screen_to_local_length(sx, self.config.scale_x);
        let y = CoordinateConverter::screen_to_local_length(sy, self.config.scale_y);

        if let Some(stick) = sticks::hit_test(x, y, &self.rect, &self.config) {
            PointerTarget::Stick(stick)
        } else if self.rect.contains_point(x, y) {
            PointerTarget::Body
        } else {
            PointerTarget::Outside
        }
    }

    /// Feed one pointer event through the state machine.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> EngineResult<Option<Update>> {
        match event.phase {
            PointerPhase::Down => self.pointer_down(event.position, event.target),
            PointerPhase::Move => self.pointer_move(event.position),
            PointerPhase::Up => Ok(self.pointer_up()),
            PointerPhase::Cancel => Ok(self.pointer_cancel()),
        }
    }
}
