//! Drag and resize engine tests through the public API.

use crate::helpers::{assert_rect_close, on_grid};
use drag_resize::engine::constraints::{clamp_position, lock_axis, snap_to_grid, snap_within};
use drag_resize::engine::{drag, resize};
use drag_resize::input::coords::to_local_delta;
use drag_resize::types::PointerSample;
use drag_resize::{Axis, Configuration, EngineError, Rectangle, Stick};

fn free() -> Configuration {
    Configuration::default().with_min_size(0.0, 0.0)
}

fn square() -> Rectangle {
    Rectangle::new(0.0, 0.0, 100.0, 100.0)
}

// ============================================================================
// Coordinate model
// ============================================================================

#[test]
fn test_local_delta_divides_by_scale() {
    assert_eq!(to_local_delta(50.0, 30.0, 2.0, 0.5).unwrap(), PointerSample::new(25.0, 60.0));
    assert_eq!(to_local_delta(-8.0, 8.0, 1.0, 1.0).unwrap(), PointerSample::new(-8.0, 8.0));
}

#[test]
fn test_local_delta_rejects_non_positive_scale() {
    for (sx, sy) in [(0.0, 1.0), (1.0, -2.0), (f64::NAN, 1.0), (f64::INFINITY, 1.0)] {
        assert!(matches!(
            to_local_delta(1.0, 1.0, sx, sy),
            Err(EngineError::InvalidScale { .. })
        ));
    }
}

// ============================================================================
// Constraint set
// ============================================================================

#[test]
fn test_lock_axis_variants() {
    let sample = PointerSample::new(3.0, 4.0);
    assert_eq!(lock_axis(sample, Axis::Both), sample);
    assert_eq!(lock_axis(sample, Axis::X), PointerSample::new(3.0, 0.0));
    assert_eq!(lock_axis(sample, Axis::Y), PointerSample::new(0.0, 4.0));
    assert_eq!(lock_axis(sample, Axis::None), PointerSample::ZERO);
}

#[test]
fn test_snap_helpers() {
    assert_eq!(snap_to_grid(14.0, 10.0), 10.0);
    assert_eq!(snap_to_grid(15.0, 10.0), 20.0);
    assert_eq!(snap_to_grid(-14.0, 10.0), -10.0);
    assert_eq!(snap_to_grid(14.0, 0.0), 14.0);

    assert_eq!(snap_within(48.0, 10.0, 0.0, 45.0), 40.0);
    assert_eq!(snap_within(2.0, 10.0, 3.0, 100.0), 10.0);
    // No grid line in [3, 7]
    assert_eq!(snap_within(4.0, 10.0, 3.0, 7.0), 4.0);
}

#[test]
fn test_clamp_position_pins_oversized_element() {
    assert_eq!(clamp_position(-5.0, 50.0, 200.0), 0.0);
    assert_eq!(clamp_position(180.0, 50.0, 200.0), 150.0);
    assert_eq!(clamp_position(30.0, 300.0, 200.0), 0.0);
}

// ============================================================================
// Resize engine
// ============================================================================

#[test]
fn test_every_stick_moves_its_edges() {
    let sample = PointerSample::new(10.0, 20.0);
    let expected = [
        (Stick::TopLeft, Rectangle::new(10.0, 20.0, 90.0, 80.0)),
        (Stick::TopMiddle, Rectangle::new(0.0, 20.0, 100.0, 80.0)),
        (Stick::TopRight, Rectangle::new(0.0, 20.0, 110.0, 80.0)),
        (Stick::MiddleRight, Rectangle::new(0.0, 0.0, 110.0, 100.0)),
        (Stick::BottomRight, Rectangle::new(0.0, 0.0, 110.0, 120.0)),
        (Stick::BottomMiddle, Rectangle::new(0.0, 0.0, 100.0, 120.0)),
        (Stick::BottomLeft, Rectangle::new(10.0, 0.0, 90.0, 120.0)),
        (Stick::MiddleLeft, Rectangle::new(10.0, 0.0, 90.0, 100.0)),
    ];
    for (stick, rect) in expected {
        assert_eq!(resize(stick, sample, square(), &free()).unwrap(), rect, "{stick}");
    }
}

#[test]
fn test_resize_engine_scenario() {
    let config = Configuration::default().with_min_size(20.0, 20.0);
    let rect = resize(Stick::BottomRight, PointerSample::new(-90.0, -90.0), square(), &config).unwrap();
    assert_eq!(rect, Rectangle::new(0.0, 0.0, 20.0, 20.0));
}

#[test]
fn test_dragging_past_the_anchor_stops_at_min_size() {
    let config = Configuration::default().with_min_size(10.0, 10.0);
    let rect = resize(Stick::MiddleLeft, PointerSample::new(500.0, 0.0), square(), &config).unwrap();
    assert_eq!(rect, Rectangle::new(90.0, 0.0, 10.0, 100.0));
}

#[test]
fn test_parent_wins_over_min_size() {
    // Only 30 units of room to the right of x=120
    let config = Configuration::default()
        .with_min_size(50.0, 0.0)
        .with_parent(150.0, 500.0);
    let start = Rectangle::new(120.0, 0.0, 60.0, 60.0);
    let rect = resize(Stick::MiddleRight, PointerSample::new(5.0, 0.0), start, &config).unwrap();
    assert_eq!(rect, Rectangle::new(120.0, 0.0, 30.0, 60.0));
}

#[test]
fn test_aspect_with_parent_keeps_ratio() {
    let config = free().with_aspect_ratio(true).with_parent(300.0, 1000.0);
    let start = Rectangle::new(0.0, 0.0, 200.0, 100.0);
    let rect = resize(Stick::BottomRight, PointerSample::new(400.0, 0.0), start, &config).unwrap();
    assert_rect_close(rect, Rectangle::new(0.0, 0.0, 300.0, 150.0));
}

#[test]
fn test_aspect_with_min_size_raises_driver() {
    let config = Configuration::default()
        .with_min_size(40.0, 40.0)
        .with_aspect_ratio(true);
    let start = Rectangle::new(0.0, 0.0, 200.0, 100.0);
    let rect = resize(Stick::BottomRight, PointerSample::new(-190.0, -95.0), start, &config).unwrap();
    // height floor 40 needs width 80 at 2:1
    assert_rect_close(rect, Rectangle::new(0.0, 0.0, 80.0, 40.0));
}

#[test]
fn test_aspect_edge_stick_grows_derived_axis_down() {
    let config = free().with_aspect_ratio(true);
    let start = Rectangle::new(0.0, 0.0, 100.0, 100.0);
    let rect = resize(Stick::MiddleLeft, PointerSample::new(-50.0, 0.0), start, &config).unwrap();
    assert_rect_close(rect, Rectangle::new(-50.0, 0.0, 150.0, 150.0));
}

#[test]
fn test_aspect_skipped_for_degenerate_start() {
    let config = free().with_aspect_ratio(true);
    let start = Rectangle::new(0.0, 0.0, 100.0, 0.0);
    let rect = resize(Stick::BottomRight, PointerSample::new(10.0, 10.0), start, &config).unwrap();
    assert_eq!(rect, Rectangle::new(0.0, 0.0, 110.0, 10.0));
}

#[test]
fn test_grid_snap_from_top_left() {
    let config = free().with_grid(10.0, 10.0);
    let start = Rectangle::new(20.0, 20.0, 80.0, 80.0);
    let rect = resize(Stick::TopLeft, PointerSample::new(-7.0, 4.0), start, &config).unwrap();
    // left edge 13 -> 10, top edge 24 -> 20, anchors stay at 100
    assert_eq!(rect, Rectangle::new(10.0, 20.0, 90.0, 80.0));
    assert!(on_grid(rect.x, 10.0) && on_grid(rect.y, 10.0));
}

#[test]
fn test_grid_respects_min_size() {
    let config = Configuration::default().with_min_size(35.0, 0.0).with_grid(10.0, 10.0);
    let start = Rectangle::new(0.0, 0.0, 100.0, 100.0);
    let rect = resize(Stick::MiddleRight, PointerSample::new(-70.0, 0.0), start, &config).unwrap();
    // floor lifts 30 to 35, nearest line above it is 40
    assert_eq!(rect, Rectangle::new(0.0, 0.0, 40.0, 100.0));
}

#[test]
fn test_resize_is_deterministic() {
    let config = Configuration::default()
        .with_min_size(10.0, 10.0)
        .with_aspect_ratio(true)
        .with_parent(400.0, 400.0)
        .with_grid(7.0, 7.0);
    let start = Rectangle::new(31.0, 17.0, 120.0, 90.0);
    let sample = PointerSample::new(-43.5, 71.25);
    let first = resize(Stick::TopRight, sample, start, &config).unwrap();
    for _ in 0..10 {
        assert_eq!(resize(Stick::TopRight, sample, start, &config).unwrap(), first);
    }
}

// ============================================================================
// Drag engine
// ============================================================================

#[test]
fn test_drag_engine_scenario() {
    let rect = drag(PointerSample::new(25.0, -10.0), square(), &Configuration::default()).unwrap();
    assert_eq!(rect, Rectangle::new(25.0, -10.0, 100.0, 100.0));
}

#[test]
fn test_drag_keeps_size() {
    let config = free().with_parent(120.0, 120.0).with_grid(7.0, 7.0);
    let rect = drag(PointerSample::new(300.0, 300.0), square(), &config).unwrap();
    assert_eq!((rect.width, rect.height), (100.0, 100.0));
    assert_eq!((rect.x, rect.y), (14.0, 14.0));
}

#[test]
fn test_drag_rejected_when_disabled() {
    let config = Configuration::default().with_draggable(false);
    assert_eq!(
        drag(PointerSample::new(1.0, 0.0), square(), &config),
        Err(EngineError::DragDisabled)
    );
}

#[test]
fn test_drag_negative_grid_snap() {
    let config = free().with_grid(10.0, 10.0);
    let rect = drag(PointerSample::new(-26.0, -34.0), square(), &config).unwrap();
    assert_eq!(rect, Rectangle::new(-30.0, -30.0, 100.0, 100.0));
}
