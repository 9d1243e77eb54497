//! Pointer move handling - drag and resize updates.
//!
//! ## Performance Notes
//!
//! Pointer move is called very frequently during an interaction (potentially
//! 60+ times per second). Key points:
//! - Early exit while idle
//! - Non-finite positions are refused before reaching the engines
//! - One engine call per move, computed from the cumulative sample so a
//!   dropped move is corrected by the next one
//! - Timing recorded per operation in the element's `InteractionStats`
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::constants::POINTER_MOVE_BUDGET_MS;
use crate::element::{DragResize, Update, UpdateKind};
use crate::engine;
use crate::error::{EngineError, EngineResult};
use crate::input::coords::{CoordinateConverter, ScaleContext};
use crate::perf::measure;
use crate::profile_scope;
use crate::types::ScreenPoint;
use tracing::{trace, warn};

impl DragResize {
    pub fn pointer_move(&mut self, position: ScreenPoint) -> EngineResult<Option<Update>> {
        profile_scope!("pointer_move");

        let (Some(origin), Some(start_rect)) = (self.state.origin(), self.state.start_rect())
        else {
            trace!(element = self.id, "Pointer move while idle, ignoring");
            return Ok(None);
        };

        let scale = ScaleContext::new(self.config.scale_x, self.config.scale_y)?;
        let sample = CoordinateConverter::sample_between(origin, position, &scale);
        if !position.is_finite() || !sample.is_finite() {
            warn!(
                element = self.id,
                x = position.x,
                y = position.y,
                "Pointer move refused: unusable position"
            );
            return Err(EngineError::InvalidPosition {
                x: position.x,
                y: position.y,
            });
        }

        let resizing = self.state.resizing_stick();
        let config = &self.config;
        let (result, elapsed_ms) = measure(|| match resizing {
            Some(stick) => engine::resize(stick, sample, start_rect, config),
            None => engine::drag(sample, start_rect, config),
        });

        let rect = match result {
            Ok(rect) => rect,
            Err(err) => {
                warn!(element = self.id, error = %err, "Pointer move refused");
                return Err(err);
            }
        };

        let (operation, kind) = match resizing {
            Some(_) => ("resize", UpdateKind::Resizing),
            None => ("drag", UpdateKind::Dragging),
        };
        self.stats.record(operation, elapsed_ms, POINTER_MOVE_BUDGET_MS);

        self.state.set_sample(sample);
        self.rect = rect;
        trace!(element = self.id, dx = sample.dx, dy = sample.dy, %rect, "Pointer move applied");
        Ok(Some(self.snapshot(kind)))
    }
}
