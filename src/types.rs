//! Core types for the drag/resize engine.
//!
//! This module defines the value types that flow between the coordinate model,
//! the engines and the interaction state machine: rectangles, resize stick
//! identities, the drag axis restriction and the interaction mode.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;

// ============================================================================
// Rectangle
// ============================================================================

/// An element's position and size in parent-local units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// X coordinate of the right edge
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Y coordinate of the bottom edge
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Width divided by height, or `None` for a degenerate rectangle
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.width > 0.0 && self.height > 0.0 {
            Some(self.width / self.height)
        } else {
            None
        }
    }

    /// Inclusive point containment in the same coordinate space as the rectangle
    #[inline]
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// Returns the rectangle moved to a new top-left corner
    pub fn with_position(self, x: f64, y: f64) -> Self {
        Self { x, y, ..self }
    }

    /// True when every component is a finite number
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.2}, {:.2}) {:.2}x{:.2}",
            self.x, self.y, self.width, self.height
        )
    }
}

// ============================================================================
// Resize Sticks
// ============================================================================

/// Vertical placement of a stick, deciding what happens to `y`/`height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerticalAnchor {
    /// Moves `y` and inversely adjusts `height`
    Top,
    /// Leaves `y` and `height` alone
    Middle,
    /// Adjusts `height` only
    Bottom,
}

/// Horizontal placement of a stick, deciding what happens to `x`/`width`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HorizontalAnchor {
    /// Moves `x` and inversely adjusts `width`
    Left,
    /// Leaves `x` and `width` alone
    Middle,
    /// Adjusts `width` only
    Right,
}

/// One of the eight resize handles around an element.
///
/// Serialized with the short codes hosts already use (`"tl"`, `"mr"`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stick {
    #[serde(rename = "tl")]
    TopLeft,
    #[serde(rename = "tm")]
    TopMiddle,
    #[serde(rename = "tr")]
    TopRight,
    #[serde(rename = "mr")]
    MiddleRight,
    #[serde(rename = "br")]
    BottomRight,
    #[serde(rename = "bm")]
    BottomMiddle,
    #[serde(rename = "bl")]
    BottomLeft,
    #[serde(rename = "ml")]
    MiddleLeft,
}

impl Stick {
    /// All sticks, clockwise from the top-left corner.
    pub const ALL: [Stick; 8] = [
        Stick::TopLeft,
        Stick::TopMiddle,
        Stick::TopRight,
        Stick::MiddleRight,
        Stick::BottomRight,
        Stick::BottomMiddle,
        Stick::BottomLeft,
        Stick::MiddleLeft,
    ];

    /// Edge mapping table: which anchors this stick combines.
    pub const fn anchors(self) -> (VerticalAnchor, HorizontalAnchor) {
        use HorizontalAnchor as H;
        use VerticalAnchor as V;
        match self {
            Stick::TopLeft => (V::Top, H::Left),
            Stick::TopMiddle => (V::Top, H::Middle),
            Stick::TopRight => (V::Top, H::Right),
            Stick::MiddleRight => (V::Middle, H::Right),
            Stick::BottomRight => (V::Bottom, H::Right),
            Stick::BottomMiddle => (V::Bottom, H::Middle),
            Stick::BottomLeft => (V::Bottom, H::Left),
            Stick::MiddleLeft => (V::Middle, H::Left),
        }
    }

    #[inline]
    pub const fn vertical(self) -> VerticalAnchor {
        self.anchors().0
    }

    #[inline]
    pub const fn horizontal(self) -> HorizontalAnchor {
        self.anchors().1
    }

    /// Returns true for the four corner sticks
    pub fn is_corner(self) -> bool {
        self.vertical() != VerticalAnchor::Middle && self.horizontal() != HorizontalAnchor::Middle
    }

    /// Short code used on the wire and in logs
    pub const fn code(self) -> &'static str {
        match self {
            Stick::TopLeft => "tl",
            Stick::TopMiddle => "tm",
            Stick::TopRight => "tr",
            Stick::MiddleRight => "mr",
            Stick::BottomRight => "br",
            Stick::BottomMiddle => "bm",
            Stick::BottomLeft => "bl",
            Stick::MiddleLeft => "ml",
        }
    }

    /// Parse a short code. The center (`"mm"`) is not a stick.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|stick| stick.code() == code)
    }

    /// CSS cursor name a renderer should show while hovering this stick.
    pub const fn cursor(self) -> &'static str {
        match self {
            Stick::TopLeft | Stick::BottomRight => "nwse-resize",
            Stick::TopRight | Stick::BottomLeft => "nesw-resize",
            Stick::TopMiddle | Stick::BottomMiddle => "ns-resize",
            Stick::MiddleLeft | Stick::MiddleRight => "ew-resize",
        }
    }
}

impl fmt::Display for Stick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// Drag Axis
// ============================================================================

/// Axis restriction applied to drag deltas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    #[default]
    Both,
    None,
}

impl Axis {
    #[inline]
    pub fn allows_x(self) -> bool {
        matches!(self, Axis::X | Axis::Both)
    }

    #[inline]
    pub fn allows_y(self) -> bool {
        matches!(self, Axis::Y | Axis::Both)
    }
}

// ============================================================================
// Interaction Mode
// ============================================================================

/// Public view of what the element is doing right now.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "stick", rename_all = "lowercase")]
pub enum InteractionMode {
    #[default]
    Idle,
    Dragging,
    Resizing(Stick),
}

impl InteractionMode {
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

// ============================================================================
// Pointer Geometry
// ============================================================================

/// Pointer position in screen space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Sub for ScreenPoint {
    type Output = (f64, f64);

    fn sub(self, rhs: Self) -> Self::Output {
        (self.x - rhs.x, self.y - rhs.y)
    }
}

/// Cumulative pointer displacement since the interaction started, in
/// element-local units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub dx: f64,
    pub dy: f64,
}

impl PointerSample {
    pub const ZERO: PointerSample = PointerSample { dx: 0.0, dy: 0.0 };

    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }

    /// False when subtracting far-apart positions overflowed
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.dx.is_finite() && self.dy.is_finite()
    }
}
