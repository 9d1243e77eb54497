//! Snapshot tests using the insta crate.
//!
//! Snapshots pin the shape of what hosts consume: the serialized
//! configuration, the update payload and the event sequence of a full
//! interaction. Snapshots are inline so the expected value sits next to the
//! code producing it.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::{TestElementBuilder, drive};
use drag_resize::engine::resize;
use drag_resize::{
    Configuration, InteractionMode, PointerEvent, PointerSample, PointerTarget, Rectangle, Stick,
    UpdateKind,
};

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn snapshot_default_configuration() {
    insta::assert_json_snapshot!(Configuration::default(), @r###"
    {
      "isDraggable": true,
      "isResizable": true,
      "aspectRatio": false,
      "axis": "both",
      "snapToGrid": false,
      "gridX": 50.0,
      "gridY": 50.0,
      "minWidth": 50.0,
      "minHeight": 50.0,
      "parentLimitation": false,
      "parentWidth": 0.0,
      "parentHeight": 0.0,
      "scaleX": 1.0,
      "scaleY": 1.0,
      "enabledHandles": [
        "tl",
        "tm",
        "tr",
        "mr",
        "br",
        "bm",
        "bl",
        "ml"
      ],
      "showSticks": true,
      "stickSize": 8.0,
      "preventActiveBehavior": false
    }
    "###);
}

#[test]
fn snapshot_update_payload() {
    let mut element = TestElementBuilder::new().build();
    let updates = drive(
        &mut element,
        &[
            PointerEvent::down(100.0, 100.0, PointerTarget::Stick(Stick::BottomRight)),
            PointerEvent::moved(120.0, 130.0),
        ],
    );

    insta::assert_json_snapshot!(updates[1], @r###"
    {
      "kind": "resizing",
      "rect": {
        "x": 0.0,
        "y": 0.0,
        "width": 120.0,
        "height": 130.0
      },
      "mode": {
        "mode": "resizing",
        "stick": "br"
      },
      "active": true
    }
    "###);
}

#[test]
fn snapshot_idle_mode_and_kind() {
    insta::assert_json_snapshot!(InteractionMode::Idle, @r###"
    {
      "mode": "idle"
    }
    "###);
    insta::assert_json_snapshot!(UpdateKind::DragStopped, @r###""dragStopped""###);
}

// ============================================================================
// Interaction sequences
// ============================================================================

#[test]
fn snapshot_drag_event_sequence() {
    let mut element = TestElementBuilder::new().build();
    let updates = drive(
        &mut element,
        &[
            PointerEvent::down(500.0, 500.0, PointerTarget::Body),
            PointerEvent::moved(510.0, 500.0),
            PointerEvent::moved(525.0, 490.0),
            PointerEvent::up(525.0, 490.0),
        ],
    );
    let kinds: Vec<UpdateKind> = updates.iter().map(|u| u.kind).collect();

    insta::assert_debug_snapshot!(kinds, @r###"
    [
        DragStarted,
        Dragging,
        Dragging,
        DragStopped,
    ]
    "###);
    insta::assert_debug_snapshot!(element.rect(), @r###"
    Rectangle {
        x: 25.0,
        y: -10.0,
        width: 100.0,
        height: 100.0,
    }
    "###);
}

#[test]
fn snapshot_constrained_resize() {
    let config = Configuration::default()
        .with_min_size(20.0, 20.0)
        .with_parent(300.0, 300.0)
        .with_grid(10.0, 10.0);
    let start = Rectangle::new(40.0, 40.0, 100.0, 100.0);
    let rect = resize(Stick::TopLeft, PointerSample::new(-63.0, 94.0), start, &config).unwrap();

    // left edge clipped at 0, top edge stopped by the floor at 120
    insta::assert_debug_snapshot!(rect, @r###"
    Rectangle {
        x: 0.0,
        y: 120.0,
        width: 140.0,
        height: 20.0,
    }
    "###);
}
