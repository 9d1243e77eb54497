//! Pure geometry engines.
//!
//! Neither engine holds state: each takes the rectangle captured at pointer
//! down, the cumulative pointer sample and the configuration, and returns the
//! rectangle the element should have now. The interaction state machine in
//! [`crate::element`] is the only caller that mutates anything.
//!
//! - `constraints` - Axis lock, grid snap, min-size, aspect ratio, parent bounds
//! - `drag` - Body drag
//! - `resize` - Stick resize

pub mod constraints;
mod drag;
mod resize;

pub use drag::drag;
pub use resize::resize;
