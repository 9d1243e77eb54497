//! Error types for the drag/resize engine
//!
//! Every error is local and synchronous. An operation that returns an error
//! leaves the element's rectangle untouched.

use crate::types::Stick;
use thiserror::Error;

/// Errors that can occur while converting input or running an interaction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A scale factor was zero, negative or not a number
    #[error("Invalid scale factor: ({scale_x}, {scale_y}) (both must be > 0)")]
    InvalidScale { scale_x: f64, scale_y: f64 },

    /// A resize was attempted on a stick that is disabled, or with resizing off
    #[error("Resize stick {0} is disabled")]
    HandleDisabled(Stick),

    /// A drag was attempted while dragging is disabled
    #[error("Dragging is disabled")]
    DragDisabled,

    /// A pointer position was NaN or infinite, or too far from the origin
    /// to measure
    #[error("Invalid pointer position: ({x}, {y})")]
    InvalidPosition { x: f64, y: f64 },

    /// A pointer down arrived while another interaction is still running
    #[error("An interaction is already active")]
    InteractionAlreadyActive,

    /// A configuration or externally supplied rectangle failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
