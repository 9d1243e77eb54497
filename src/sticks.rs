//! Resize stick layout and hit testing.
//!
//! Sticks are small squares centered on the element's corners and edge
//! midpoints. Their on-screen size is constant, so in parent-local units the
//! side length is `stick_size / scale`.

use crate::config::Configuration;
use crate::input::coords::CoordinateConverter;
use crate::types::{HorizontalAnchor, Rectangle, Stick, VerticalAnchor};

/// Corners are checked before edges so overlapping squares on tiny elements
/// resolve to the corner.
const HIT_ORDER: [Stick; 8] = [
    Stick::TopLeft,
    Stick::TopRight,
    Stick::BottomRight,
    Stick::BottomLeft,
    Stick::TopMiddle,
    Stick::MiddleRight,
    Stick::BottomMiddle,
    Stick::MiddleLeft,
];

/// Bounds of `stick` around `rect`, in the same space as `rect`.
pub fn stick_bounds(
    stick: Stick,
    rect: &Rectangle,
    stick_size: f64,
    scale_x: f64,
    scale_y: f64,
) -> Rectangle {
    let size_x = CoordinateConverter::screen_to_local_length(stick_size, scale_x);
    let size_y = CoordinateConverter::screen_to_local_length(stick_size, scale_y);

    let center_x = match stick.horizontal() {
        HorizontalAnchor::Left => rect.x,
        HorizontalAnchor::Middle => rect.x + rect.width / 2.0,
        HorizontalAnchor::Right => rect.right(),
    };
    let center_y = match stick.vertical() {
        VerticalAnchor::Top => rect.y,
        VerticalAnchor::Middle => rect.y + rect.height / 2.0,
        VerticalAnchor::Bottom => rect.bottom(),
    };

    Rectangle::new(
        center_x - size_x / 2.0,
        center_y - size_y / 2.0,
        size_x,
        size_y,
    )
}

/// Every stick a renderer should draw, with its bounds.
///
/// Empty when resizing is off or sticks are hidden.
pub fn layout(rect: &Rectangle, config: &Configuration) -> Vec<(Stick, Rectangle)> {
    if !config.is_resizable || !config.show_sticks {
        return Vec::new();
    }
    config
        .enabled_handles
        .iter()
        .map(|&stick| {
            (
                stick,
                stick_bounds(stick, rect, config.stick_size, config.scale_x, config.scale_y),
            )
        })
        .collect()
}

/// The enabled stick under a parent-local point, if any.
pub fn hit_test(x: f64, y: f64, rect: &Rectangle, config: &Configuration) -> Option<Stick> {
    if !config.is_resizable || !config.show_sticks {
        return None;
    }
    HIT_ORDER
        .into_iter()
        .filter(|stick| config.enabled_handles.contains(stick))
        .find(|&stick| {
            stick_bounds(stick, rect, config.stick_size, config.scale_x, config.scale_y)
                .contains_point(x, y)
        })
}
