//! Constraint set - pure clamps shared by the drag and resize engines.
//!
//! Resize constraints operate on one axis at a time through [`AxisSpan`]: the
//! starting edges of that axis, which edge (if any) the grabbed stick moves,
//! and the current length. Working per axis keeps the anchor edge exactly
//! where it was while the moving edge is pushed around by each constraint.
//!
//! Pipeline order is fixed by the engines; a later constraint may undo an
//! earlier one and wins when they disagree.

use crate::types::{Axis, HorizontalAnchor, PointerSample, VerticalAnchor};

// ============================================================================
// Axis Lock
// ============================================================================

/// Zero the delta components the axis restriction disallows.
#[inline]
pub fn lock_axis(sample: PointerSample, axis: Axis) -> PointerSample {
    PointerSample::new(
        if axis.allows_x() { sample.dx } else { 0.0 },
        if axis.allows_y() { sample.dy } else { 0.0 },
    )
}

// ============================================================================
// Grid Snap
// ============================================================================

/// Round `value` to the nearest multiple of `grid`. A grid of 0 disables snapping.
#[inline]
pub fn snap_to_grid(value: f64, grid: f64) -> f64 {
    if grid > 0.0 {
        (value / grid).round() * grid
    } else {
        value
    }
}

/// Snap `value` to the nearest grid line inside `[lo, hi]`.
///
/// Falls back to the grid line closest to the violated bound, and to the
/// unsnapped value when no grid line fits in the range at all.
pub fn snap_within(value: f64, grid: f64, lo: f64, hi: f64) -> f64 {
    if !(grid > 0.0) {
        return value;
    }
    let nearest = snap_to_grid(value, grid);
    if nearest >= lo && nearest <= hi {
        return nearest;
    }
    let fallback = if nearest < lo {
        (lo / grid).ceil() * grid
    } else {
        (hi / grid).floor() * grid
    };
    if fallback >= lo && fallback <= hi {
        fallback
    } else {
        value
    }
}

// ============================================================================
// Parent Bounds (drag)
// ============================================================================

/// Clamp a position so `[position, position + size]` stays within `[0, parent]`.
///
/// An element larger than its parent is pinned to 0.
#[inline]
pub fn clamp_position(position: f64, size: f64, parent: f64) -> f64 {
    position.clamp(0.0, (parent - size).max(0.0))
}

// ============================================================================
// Resize Spans
// ============================================================================

/// Which edge of an axis a resize moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovingEdge {
    /// The low edge (left/top) moves, the high edge is the anchor
    Low,
    /// The high edge (right/bottom) moves, the low edge is the anchor
    High,
    /// Neither edge moves
    Fixed,
}

impl MovingEdge {
    /// Edge moved by a horizontal anchor. A middle anchor only grows the
    /// high edge when the axis is derived from the other one.
    pub fn horizontal(anchor: HorizontalAnchor, derived: bool) -> Self {
        match anchor {
            HorizontalAnchor::Left => Self::Low,
            HorizontalAnchor::Right => Self::High,
            HorizontalAnchor::Middle if derived => Self::High,
            HorizontalAnchor::Middle => Self::Fixed,
        }
    }

    /// Vertical counterpart of [`MovingEdge::horizontal`]
    pub fn vertical(anchor: VerticalAnchor, derived: bool) -> Self {
        match anchor {
            VerticalAnchor::Top => Self::Low,
            VerticalAnchor::Bottom => Self::High,
            VerticalAnchor::Middle if derived => Self::High,
            VerticalAnchor::Middle => Self::Fixed,
        }
    }
}

/// One axis of a rectangle under resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisSpan {
    /// Low edge at interaction start
    pub start: f64,
    /// High edge at interaction start
    pub end: f64,
    pub moving: MovingEdge,
    /// Current length along this axis
    pub length: f64,
}

impl AxisSpan {
    pub fn new(position: f64, length: f64, moving: MovingEdge) -> Self {
        Self {
            start: position,
            end: position + length,
            moving,
            length,
        }
    }

    /// Length the span had at interaction start
    #[inline]
    pub fn initial_length(&self) -> f64 {
        self.end - self.start
    }

    /// Position of the low edge for the current length, keeping the anchor fixed
    #[inline]
    pub fn position(&self) -> f64 {
        match self.moving {
            MovingEdge::Low => self.end - self.length,
            MovingEdge::High | MovingEdge::Fixed => self.start,
        }
    }

    #[inline]
    pub fn moves(&self) -> bool {
        self.moving != MovingEdge::Fixed
    }

    /// Edge transform: move the grabbed edge by `delta`.
    pub fn apply_delta(mut self, delta: f64) -> Self {
        self.length = match self.moving {
            MovingEdge::Low => self.initial_length() - delta,
            MovingEdge::High => self.initial_length() + delta,
            MovingEdge::Fixed => self.initial_length(),
        };
        self
    }

    /// Min-size: grow back to `min`, pushing the moving edge away from the anchor.
    pub fn enforce_min(mut self, min: f64) -> Self {
        if self.moves() {
            self.length = self.length.max(min);
        }
        self
    }

    /// Longest length that keeps the moving edge inside `[0, parent]`.
    pub fn max_length_in(&self, parent: f64) -> f64 {
        let max = match self.moving {
            MovingEdge::Low => self.end,
            MovingEdge::High => parent - self.start,
            MovingEdge::Fixed => self.length,
        };
        max.max(0.0)
    }

    /// Parent bounds: stop the moving edge at the container boundary.
    pub fn clamp_to_parent(mut self, parent: f64) -> Self {
        if self.moves() {
            self.length = self.length.min(self.max_length_in(parent));
        }
        self
    }

    /// Grid snap: put the moving edge on a grid line without breaking the
    /// size floor or, when `parent` is given, the container boundary.
    pub fn snap_moving_edge(mut self, grid: f64, min: f64, parent: Option<f64>) -> Self {
        match self.moving {
            MovingEdge::Low => {
                let edge = self.end - self.length;
                let lo = if parent.is_some() { 0.0 } else { f64::NEG_INFINITY };
                let snapped = snap_within(edge, grid, lo, self.end - min);
                self.length = self.end - snapped;
            }
            MovingEdge::High => {
                let edge = self.start + self.length;
                let hi = parent.unwrap_or(f64::INFINITY);
                let snapped = snap_within(edge, grid, self.start + min, hi);
                self.length = snapped - self.start;
            }
            MovingEdge::Fixed => {}
        }
        self
    }
}

// ============================================================================
// Aspect Ratio
// ============================================================================

/// Which dimension drives an aspect-locked resize.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AspectDriver {
    Width,
    Height,
}

impl AspectDriver {
    /// Corner sticks follow the larger proportional change; edge sticks are
    /// driven by the dimension their edge controls.
    pub fn for_resize(
        horizontal: HorizontalAnchor,
        vertical: VerticalAnchor,
        width: &AxisSpan,
        height: &AxisSpan,
    ) -> Self {
        match (horizontal, vertical) {
            (HorizontalAnchor::Middle, _) => Self::Height,
            (_, VerticalAnchor::Middle) => Self::Width,
            _ => {
                let w0 = width.initial_length();
                let h0 = height.initial_length();
                let dw = (width.length - w0).abs() / w0;
                let dh = (height.length - h0).abs() / h0;
                if dw >= dh { Self::Width } else { Self::Height }
            }
        }
    }
}

/// Re-derive one dimension from the other so `width / height == ratio`.
///
/// The driving dimension is first raised far enough that neither dimension
/// drops below its floor.
pub fn apply_aspect_ratio(
    width: AxisSpan,
    height: AxisSpan,
    ratio: f64,
    driver: AspectDriver,
    min_width: f64,
    min_height: f64,
) -> (AxisSpan, AxisSpan) {
    let (mut width, mut height) = (width, height);
    match driver {
        AspectDriver::Width => {
            width.length = width.length.max(min_width).max(min_height * ratio);
            height.length = width.length / ratio;
        }
        AspectDriver::Height => {
            height.length = height.length.max(min_height).max(min_width / ratio);
            width.length = height.length * ratio;
        }
    }
    (width, height)
}

/// Parent bounds for an aspect-locked resize: whichever dimension hits the
/// container first shrinks the other with it.
pub fn clamp_aspect_to_parent(
    width: AxisSpan,
    height: AxisSpan,
    ratio: f64,
    parent_width: f64,
    parent_height: f64,
) -> (AxisSpan, AxisSpan) {
    let (mut width, mut height) = (width, height);
    let max_width = width.max_length_in(parent_width);
    let max_height = height.max_length_in(parent_height);
    if width.length > max_width {
        width.length = max_width;
        height.length = width.length / ratio;
    }
    if height.length > max_height {
        height.length = max_height;
        width.length = height.length * ratio;
    }
    (width, height)
}
