//! Interaction and geometry engine for draggable, resizable elements.
//!
//! The crate turns a stream of pointer events into constraint-satisfying
//! rectangles. It owns no rendering: a host feeds it a [`Configuration`] and
//! [`PointerEvent`]s, and reflects the returned [`Update`]s into its own
//! presentation state.
//!
//! ## Modules
//!
//! - `types` - Rectangle, stick identities, axis and interaction mode
//! - `config` - Configuration snapshot with validation and JSON loading
//! - `engine` - Pure drag/resize engines and the constraint pipeline
//! - `input` - Coordinate model and the pointer event state machine
//! - `element` - The per-element owner of rectangle, mode and configuration
//! - `sticks` - Resize handle layout, hit testing and cursor affordances

pub mod config;
pub mod constants;
pub mod element;
pub mod engine;
pub mod error;
pub mod input;
pub mod logging;
pub mod perf;
pub mod sticks;
pub mod types;

pub use config::Configuration;
pub use element::{DragResize, Update, UpdateKind};
pub use error::{EngineError, EngineResult};
pub use input::{InteractionState, PointerEvent, PointerPhase, PointerTarget};
pub use types::{
    Axis, HorizontalAnchor, InteractionMode, PointerSample, Rectangle, ScreenPoint, Stick,
    VerticalAnchor,
};
