//! End-to-end resize workflows.

use crate::helpers::{TestElementBuilder, assert_rect_close, drive};
use drag_resize::{InteractionMode, PointerEvent, PointerTarget, Rectangle, Stick, UpdateKind};

fn grab(stick: Stick, x: f64, y: f64) -> PointerEvent {
    PointerEvent::down(x, y, PointerTarget::Stick(stick))
}

#[test]
fn test_resize_scenario_clamps_at_min_size() {
    let mut element = TestElementBuilder::new()
        .configure(|c| c.with_resizable(true).with_min_size(20.0, 20.0))
        .build();

    let updates = drive(
        &mut element,
        &[
            grab(Stick::BottomRight, 100.0, 100.0),
            PointerEvent::moved(10.0, 10.0),
            PointerEvent::up(10.0, 10.0),
        ],
    );

    assert_eq!(element.rect(), Rectangle::new(0.0, 0.0, 20.0, 20.0));
    assert_eq!(element.mode(), InteractionMode::Idle);

    let kinds: Vec<UpdateKind> = updates.iter().map(|u| u.kind).collect();
    assert_eq!(
        kinds,
        vec![UpdateKind::ResizeStarted, UpdateKind::Resizing, UpdateKind::ResizeStopped]
    );
    assert_eq!(updates[0].mode, InteractionMode::Resizing(Stick::BottomRight));
    assert_eq!(updates[1].mode, InteractionMode::Resizing(Stick::BottomRight));
}

#[test]
fn test_top_left_keeps_bottom_right_corner() {
    let mut element = TestElementBuilder::new()
        .with_rect(50.0, 50.0, 100.0, 100.0)
        .build();

    drive(
        &mut element,
        &[
            grab(Stick::TopLeft, 50.0, 50.0),
            PointerEvent::moved(20.0, 70.0),
            PointerEvent::up(20.0, 70.0),
        ],
    );

    let rect = element.rect();
    assert_eq!(rect, Rectangle::new(20.0, 70.0, 130.0, 80.0));
    assert_eq!(rect.right(), 150.0);
    assert_eq!(rect.bottom(), 150.0);
}

#[test]
fn test_cancel_reverts_resize() {
    let mut element = TestElementBuilder::new()
        .with_rect(10.0, 10.0, 50.0, 50.0)
        .build();

    drive(
        &mut element,
        &[
            grab(Stick::MiddleRight, 60.0, 35.0),
            PointerEvent::moved(100.0, 80.0),
        ],
    );
    assert_eq!(element.rect(), Rectangle::new(10.0, 10.0, 90.0, 50.0));

    let updates = drive(&mut element, &[PointerEvent::cancel()]);
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].kind, UpdateKind::Cancelled);
    assert_eq!(element.rect(), Rectangle::new(10.0, 10.0, 50.0, 50.0));
    assert_eq!(element.mode(), InteractionMode::Idle);
}

#[test]
fn test_aspect_locked_corner_resize() {
    let mut element = TestElementBuilder::new()
        .with_rect(0.0, 0.0, 200.0, 100.0)
        .configure(|c| c.with_aspect_ratio(true))
        .build();

    drive(
        &mut element,
        &[
            grab(Stick::BottomRight, 200.0, 100.0),
            PointerEvent::moved(300.0, 110.0),
            PointerEvent::up(300.0, 110.0),
        ],
    );

    // width changed by 50%, height by 10%: width drives
    assert_rect_close(element.rect(), Rectangle::new(0.0, 0.0, 300.0, 150.0));
}

#[test]
fn test_resize_compensates_for_parent_scale() {
    let mut element = TestElementBuilder::new()
        .configure(|c| c.with_scale(2.0, 2.0))
        .build();

    drive(
        &mut element,
        &[
            grab(Stick::BottomRight, 200.0, 200.0),
            PointerEvent::moved(240.0, 220.0),
        ],
    );
    assert_eq!(element.rect(), Rectangle::new(0.0, 0.0, 120.0, 110.0));
}

#[test]
fn test_resize_inside_parent_with_grid() {
    let mut element = TestElementBuilder::new()
        .configure(|c| c.with_parent(250.0, 250.0).with_grid(25.0, 25.0))
        .build();

    drive(
        &mut element,
        &[
            grab(Stick::BottomRight, 0.0, 0.0),
            PointerEvent::moved(500.0, 37.0),
            PointerEvent::up(500.0, 37.0),
        ],
    );
    // right edge stops at the parent, bottom edge 137 snaps to 125
    assert_eq!(element.rect(), Rectangle::new(0.0, 0.0, 250.0, 125.0));
}

#[test]
fn test_latest_move_decides_the_result() {
    let mut element = TestElementBuilder::new().build();

    drive(
        &mut element,
        &[
            grab(Stick::BottomMiddle, 50.0, 100.0),
            PointerEvent::moved(50.0, 180.0),
            PointerEvent::moved(50.0, 60.0),
            PointerEvent::moved(50.0, 130.0),
        ],
    );
    assert_eq!(element.rect(), Rectangle::new(0.0, 0.0, 100.0, 130.0));
}

#[test]
fn test_resize_then_drag_starts_from_committed_rect() {
    let mut element = TestElementBuilder::new().build();

    drive(
        &mut element,
        &[
            grab(Stick::BottomRight, 0.0, 0.0),
            PointerEvent::moved(20.0, 20.0),
            PointerEvent::up(20.0, 20.0),
            PointerEvent::down(50.0, 50.0, PointerTarget::Body),
            PointerEvent::moved(60.0, 55.0),
            PointerEvent::up(60.0, 55.0),
        ],
    );
    assert_eq!(element.rect(), Rectangle::new(10.0, 5.0, 120.0, 120.0));
}
