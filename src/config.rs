//! Interaction configuration.
//!
//! A [`Configuration`] is the complete, immutable snapshot of the options that
//! govern one drag or resize. The host builds it (or loads it from JSON using
//! the component's familiar prop names) and hands it to the element before an
//! interaction starts; the engines only ever read it.

use crate::constants::{
    DEFAULT_GRID_X, DEFAULT_GRID_Y, DEFAULT_MIN_HEIGHT, DEFAULT_MIN_WIDTH, DEFAULT_SCALE,
    DEFAULT_STICK_SIZE,
};
use crate::error::{EngineError, EngineResult};
use crate::input::coords::validate_scale;
use crate::types::{Axis, Rectangle, Stick};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Options that gate and constrain drag/resize interactions.
///
/// Field names serialize in camelCase; the short prop names of the web
/// component (`minw`, `parentW`, `sticks`, `parentScaleX`, ...) are accepted as
/// aliases when deserializing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Configuration {
    /// Whether the body can be dragged
    pub is_draggable: bool,
    /// Whether any stick can resize the element
    pub is_resizable: bool,
    /// Lock width:height to the ratio captured when a resize starts
    pub aspect_ratio: bool,
    /// Axis restriction for drags
    pub axis: Axis,
    pub snap_to_grid: bool,
    pub grid_x: f64,
    pub grid_y: f64,
    #[serde(alias = "minw")]
    pub min_width: f64,
    #[serde(alias = "minh")]
    pub min_height: f64,
    /// Keep the element inside `[0, 0]-[parent_width, parent_height]`
    pub parent_limitation: bool,
    #[serde(alias = "parentW")]
    pub parent_width: f64,
    #[serde(alias = "parentH")]
    pub parent_height: f64,
    /// Ancestor scale factors used to convert screen deltas
    #[serde(alias = "parentScaleX")]
    pub scale_x: f64,
    #[serde(alias = "parentScaleY")]
    pub scale_y: f64,
    /// Sticks that may start a resize
    #[serde(alias = "sticks")]
    pub enabled_handles: BTreeSet<Stick>,
    /// Whether sticks are shown (and therefore hit-testable)
    #[serde(alias = "showStick")]
    pub show_sticks: bool,
    /// Stick edge length in screen pixels
    pub stick_size: f64,
    /// Pointer downs never change the activation flag when set
    pub prevent_active_behavior: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            is_draggable: true,
            is_resizable: true,
            aspect_ratio: false,
            axis: Axis::Both,
            snap_to_grid: false,
            grid_x: DEFAULT_GRID_X,
            grid_y: DEFAULT_GRID_Y,
            min_width: DEFAULT_MIN_WIDTH,
            min_height: DEFAULT_MIN_HEIGHT,
            parent_limitation: false,
            parent_width: 0.0,
            parent_height: 0.0,
            scale_x: DEFAULT_SCALE,
            scale_y: DEFAULT_SCALE,
            enabled_handles: Stick::ALL.into_iter().collect(),
            show_sticks: true,
            stick_size: DEFAULT_STICK_SIZE,
            prevent_active_behavior: false,
        }
    }
}

impl Configuration {
    /// Parse a configuration from JSON and validate it.
    ///
    /// Missing fields take the component defaults.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: Configuration =
            serde_json::from_str(json).context("Failed to parse drag/resize configuration")?;
        config
            .validate()
            .context("Drag/resize configuration failed validation")?;
        Ok(config)
    }

    /// Serialize to pretty JSON using the camelCase field names.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Check every numeric option.
    ///
    /// Scale factors report [`EngineError::InvalidScale`]; everything else
    /// reports [`EngineError::InvalidConfiguration`].
    pub fn validate(&self) -> EngineResult<()> {
        validate_scale(self.scale_x, self.scale_y)?;

        let non_negative = [
            ("gridX", self.grid_x),
            ("gridY", self.grid_y),
            ("minWidth", self.min_width),
            ("minHeight", self.min_height),
            ("parentWidth", self.parent_width),
            ("parentHeight", self.parent_height),
            ("stickSize", self.stick_size),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::InvalidConfiguration(format!(
                    "{name} must be a finite number >= 0, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Returns true if a resize may start from `stick`.
    #[inline]
    pub fn is_stick_enabled(&self, stick: Stick) -> bool {
        self.is_resizable && self.enabled_handles.contains(&stick)
    }

    /// Check that a rectangle already satisfies this configuration.
    ///
    /// The size floor always applies. With parent limitation on, the
    /// rectangle must also lie fully inside `[0, parent_width] x [0, parent_height]`.
    pub fn admits(&self, rect: &Rectangle) -> EngineResult<()> {
        if !rect.is_finite() {
            return Err(EngineError::InvalidConfiguration(format!(
                "rectangle {rect} has non-finite components"
            )));
        }
        if rect.width < self.min_width || rect.height < self.min_height {
            return Err(EngineError::InvalidConfiguration(format!(
                "rectangle {rect} is smaller than the minimum {}x{}",
                self.min_width, self.min_height
            )));
        }
        if self.parent_limitation
            && (rect.x < 0.0
                || rect.y < 0.0
                || rect.right() > self.parent_width
                || rect.bottom() > self.parent_height)
        {
            return Err(EngineError::InvalidConfiguration(format!(
                "rectangle {rect} lies outside the parent {}x{}",
                self.parent_width, self.parent_height
            )));
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Builder helpers
    // ------------------------------------------------------------------------

    pub fn with_draggable(mut self, draggable: bool) -> Self {
        self.is_draggable = draggable;
        self
    }

    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.is_resizable = resizable;
        self
    }

    pub fn with_aspect_ratio(mut self, locked: bool) -> Self {
        self.aspect_ratio = locked;
        self
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Turn grid snapping on with the given cell size.
    pub fn with_grid(mut self, grid_x: f64, grid_y: f64) -> Self {
        self.snap_to_grid = true;
        self.grid_x = grid_x;
        self.grid_y = grid_y;
        self
    }

    pub fn with_min_size(mut self, min_width: f64, min_height: f64) -> Self {
        self.min_width = min_width;
        self.min_height = min_height;
        self
    }

    /// Turn parent limitation on with the given container size.
    pub fn with_parent(mut self, parent_width: f64, parent_height: f64) -> Self {
        self.parent_limitation = true;
        self.parent_width = parent_width;
        self.parent_height = parent_height;
        self
    }

    pub fn with_scale(mut self, scale_x: f64, scale_y: f64) -> Self {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        self
    }

    pub fn with_sticks(mut self, sticks: impl IntoIterator<Item = Stick>) -> Self {
        self.enabled_handles = sticks.into_iter().collect();
        self
    }

    pub fn with_stick_size(mut self, stick_size: f64) -> Self {
        self.stick_size = stick_size;
        self
    }

    pub fn with_prevent_active_behavior(mut self, prevent: bool) -> Self {
        self.prevent_active_behavior = prevent;
        self
    }
}
