//! Drag engine - pointer sample to a new top-left position.
//!
//! Each axis is handled on its own: axis lock decides whether it moves at
//! all, then parent bounds clip it, then grid snap quantizes it. An axis with
//! no effective displacement keeps its starting value exactly.

use crate::config::Configuration;
use crate::engine::constraints::{clamp_position, lock_axis, snap_within};
use crate::error::{EngineError, EngineResult};
use crate::profile_scope;
use crate::types::{PointerSample, Rectangle};
use tracing::trace;

/// Compute the rectangle produced by dragging `start` by `sample`.
///
/// Width and height never change. Deterministic for identical inputs.
pub fn drag(
    sample: PointerSample,
    start: Rectangle,
    config: &Configuration,
) -> EngineResult<Rectangle> {
    profile_scope!("drag");

    if !config.is_draggable {
        return Err(EngineError::DragDisabled);
    }

    let locked = lock_axis(sample, config.axis);
    let x = move_axis(
        start.x,
        locked.dx,
        start.width,
        config.parent_limitation.then_some(config.parent_width),
        config.snap_to_grid.then_some(config.grid_x),
    );
    let y = move_axis(
        start.y,
        locked.dy,
        start.height,
        config.parent_limitation.then_some(config.parent_height),
        config.snap_to_grid.then_some(config.grid_y),
    );

    let rect = start.with_position(x, y);
    trace!(dx = locked.dx, dy = locked.dy, %rect, "drag");
    Ok(rect)
}

fn move_axis(
    position: f64,
    delta: f64,
    size: f64,
    parent: Option<f64>,
    grid: Option<f64>,
) -> f64 {
    if delta == 0.0 {
        return position;
    }

    let mut moved = position + delta;
    let (lo, hi) = match parent {
        Some(parent) => {
            moved = clamp_position(moved, size, parent);
            (0.0, (parent - size).max(0.0))
        }
        None => (f64::NEG_INFINITY, f64::INFINITY),
    };
    if let Some(grid) = grid {
        moved = snap_within(moved, grid, lo, hi);
    }
    moved
}
