//! Resize engine - stick + pointer sample to a new rectangle.
//!
//! The stick's anchors pick which edge of each axis moves. The edge transform
//! is applied first, then the constraint pipeline runs in priority order:
//!
//! ```text
//! edge transform -> min-size -> aspect ratio -> parent bounds -> grid snap
//! ```
//!
//! Grid snap runs last so the emitted rectangle is grid-aligned even after the
//! other constraints moved an edge.

use crate::config::Configuration;
use crate::engine::constraints::{
    AspectDriver, AxisSpan, MovingEdge, apply_aspect_ratio, clamp_aspect_to_parent,
};
use crate::error::{EngineError, EngineResult};
use crate::profile_scope;
use crate::types::{PointerSample, Rectangle, Stick};
use tracing::trace;

/// Compute the rectangle produced by dragging `stick` by `sample` from `start`.
///
/// Deterministic: the same inputs always give the same rectangle, so replaying
/// the latest cumulative sample recovers a consistent state. A zero sample
/// returns `start` unchanged.
pub fn resize(
    stick: Stick,
    sample: PointerSample,
    start: Rectangle,
    config: &Configuration,
) -> EngineResult<Rectangle> {
    profile_scope!("resize");

    if !config.is_stick_enabled(stick) {
        return Err(EngineError::HandleDisabled(stick));
    }
    if sample.is_zero() {
        return Ok(start);
    }

    let ratio = if config.aspect_ratio {
        start.aspect_ratio()
    } else {
        None
    };
    let (vertical, horizontal) = stick.anchors();

    // Edge transform
    let width = AxisSpan::new(
        start.x,
        start.width,
        MovingEdge::horizontal(horizontal, ratio.is_some()),
    )
    .apply_delta(sample.dx);
    let height = AxisSpan::new(
        start.y,
        start.height,
        MovingEdge::vertical(vertical, ratio.is_some()),
    )
    .apply_delta(sample.dy);

    // Min-size
    let mut width = width.enforce_min(config.min_width);
    let mut height = height.enforce_min(config.min_height);

    // Aspect ratio
    if let Some(ratio) = ratio {
        let driver = AspectDriver::for_resize(horizontal, vertical, &width, &height);
        (width, height) = apply_aspect_ratio(
            width,
            height,
            ratio,
            driver,
            config.min_width,
            config.min_height,
        );
    }

    // Parent bounds
    if config.parent_limitation {
        match ratio {
            Some(ratio) => {
                (width, height) = clamp_aspect_to_parent(
                    width,
                    height,
                    ratio,
                    config.parent_width,
                    config.parent_height,
                );
            }
            None => {
                width = width.clamp_to_parent(config.parent_width);
                height = height.clamp_to_parent(config.parent_height);
            }
        }
    }

    // Grid snap
    if config.snap_to_grid {
        let (parent_width, parent_height) = if config.parent_limitation {
            (Some(config.parent_width), Some(config.parent_height))
        } else {
            (None, None)
        };
        width = width.snap_moving_edge(config.grid_x, config.min_width, parent_width);
        height = height.snap_moving_edge(config.grid_y, config.min_height, parent_height);
    }

    let rect = Rectangle::new(width.position(), height.position(), width.length, height.length);
    trace!(stick = %stick, dx = sample.dx, dy = sample.dy, %rect, "resize");
    Ok(rect)
}
