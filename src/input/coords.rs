//! Coordinate conversion between screen space and element-local space.
//!
//! Pointer events arrive in screen pixels, but an element can sit inside
//! ancestors that are scaled (zoomed canvases, CSS transforms). Deltas are
//! divided by those ancestor scale factors before the engines see them.

use crate::error::{EngineError, EngineResult};
use crate::types::{PointerSample, ScreenPoint};

/// Reject scale factors that would make delta conversion undefined.
#[inline]
pub fn validate_scale(scale_x: f64, scale_y: f64) -> EngineResult<()> {
    let valid = |s: f64| s.is_finite() && s > 0.0;
    if valid(scale_x) && valid(scale_y) {
        Ok(())
    } else {
        Err(EngineError::InvalidScale { scale_x, scale_y })
    }
}

/// Convert a raw screen delta into an element-local [`PointerSample`].
pub fn to_local_delta(
    screen_dx: f64,
    screen_dy: f64,
    scale_x: f64,
    scale_y: f64,
) -> EngineResult<PointerSample> {
    validate_scale(scale_x, scale_y)?;
    Ok(PointerSample::new(screen_dx / scale_x, screen_dy / scale_y))
}

/// Ancestor scale factors needed for conversions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleContext {
    pub scale_x: f64,
    pub scale_y: f64,
}

impl ScaleContext {
    /// Create a validated scale context
    pub fn new(scale_x: f64, scale_y: f64) -> EngineResult<Self> {
        validate_scale(scale_x, scale_y)?;
        Ok(Self { scale_x, scale_y })
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Cumulative local displacement between the interaction origin and `current`
    #[inline]
    pub fn sample_between(
        origin: ScreenPoint,
        current: ScreenPoint,
        ctx: &ScaleContext,
    ) -> PointerSample {
        let (dx, dy) = current - origin;
        PointerSample::new(dx / ctx.scale_x, dy / ctx.scale_y)
    }

    /// Convert a screen length into local units
    #[inline]
    pub fn screen_to_local_length(length: f64, scale: f64) -> f64 {
        length / scale
    }
}
