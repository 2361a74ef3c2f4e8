//! Engine configuration supplied by the host.
//!
//! Every field is optional in the host's JSON; missing fields take the
//! defaults from [`crate::consts`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    DEFAULT_ANIMATION_SPEED, DEFAULT_BRUSH_COLOR, DEFAULT_BRUSH_RADIUS, DEFAULT_CATENARY_COLOR, DEFAULT_GRID_COLOR,
    DEFAULT_LAZY_RADIUS,
};
use crate::error::EngineError;

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Points revealed per millisecond while animating a history change.
    pub animation_speed: f64,
    /// Leash length between pointer and brush, in CSS pixels.
    pub lazy_radius: f64,
    pub brush_radius: f64,
    pub brush_color: String,
    /// Color of the pointer dot and catenary connector.
    pub catenary_color: String,
    pub grid_color: String,
    pub hide_grid: bool,
    pub hide_interface: bool,
    /// Ignore all pointer input.
    pub disabled: bool,
    /// Redraw history changes instantly instead of animating them.
    pub immediate_draw: bool,
    pub device_pixel_ratio: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            animation_speed: DEFAULT_ANIMATION_SPEED,
            lazy_radius: DEFAULT_LAZY_RADIUS,
            brush_radius: DEFAULT_BRUSH_RADIUS,
            brush_color: DEFAULT_BRUSH_COLOR.to_owned(),
            catenary_color: DEFAULT_CATENARY_COLOR.to_owned(),
            grid_color: DEFAULT_GRID_COLOR.to_owned(),
            hide_grid: false,
            hide_interface: false,
            disabled: false,
            immediate_draw: false,
            device_pixel_ratio: 1.0,
        }
    }
}

impl EngineConfig {
    /// Parse host props from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] if the JSON is malformed or a field
    /// has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Leash length in device pixels; also the catenary chain length.
    #[must_use]
    pub fn chain_length(&self) -> f64 {
        self.lazy_radius * self.device_pixel_ratio
    }
}
