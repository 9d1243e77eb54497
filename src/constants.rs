//! Engine-wide constants.
//!
//! Centralizes the documented defaults of the drag/resize component and the
//! numeric tolerances used by the constraint pipeline.

// ============================================================================
// Configuration Defaults
// ============================================================================

/// Default grid cell width when snapping is turned on
pub const DEFAULT_GRID_X: f64 = 50.0;

/// Default grid cell height when snapping is turned on
pub const DEFAULT_GRID_Y: f64 = 50.0;

/// Default minimum element width
pub const DEFAULT_MIN_WIDTH: f64 = 50.0;

/// Default minimum element height
pub const DEFAULT_MIN_HEIGHT: f64 = 50.0;

/// Default ancestor scale factor (no transform)
pub const DEFAULT_SCALE: f64 = 1.0;

/// Default edge length of a resize stick in screen pixels
pub const DEFAULT_STICK_SIZE: f64 = 8.0;

// ============================================================================
// Element Defaults
// ============================================================================

/// Default element width
pub const DEFAULT_WIDTH: f64 = 200.0;

/// Default element height
pub const DEFAULT_HEIGHT: f64 = 200.0;

// ============================================================================
// Profiling
// ============================================================================

/// A single pointer move should stay well under a frame at 60 FPS
pub const POINTER_MOVE_BUDGET_MS: f64 = 1.0;
