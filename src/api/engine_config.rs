use serde::{Deserialize, Serialize};

use crate::error::{RangeError, RangeResult};
use crate::interaction::{SelectorTuning, ZoomConfig};
use crate::overlay::OverlayStyle;

use super::DateLabelConfig;
use super::validation::validate_engine_config;

/// Public engine bootstrap configuration.
///
/// Serializable so a screen variant can be described as data (tolerances,
/// overlay look, zoom limits, label offset) on top of one shared engine.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RangeSelectorConfig {
    #[serde(default)]
    pub selector: SelectorTuning,
    #[serde(default)]
    pub overlay: OverlayStyle,
    #[serde(default)]
    pub zoom: ZoomConfig,
    #[serde(default)]
    pub labels: DateLabelConfig,
}

impl RangeSelectorConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the inclusive hit radius around each handle.
    #[must_use]
    pub fn with_handle_tolerance_px(mut self, tolerance: f64) -> Self {
        self.selector.handle_tolerance_px = tolerance;
        self
    }

    /// Sets how close a dragged handle may get to the opposite one.
    #[must_use]
    pub fn with_min_boundary_gap_px(mut self, gap: f64) -> Self {
        self.selector.min_boundary_gap_px = gap;
        self
    }

    #[must_use]
    pub fn with_overlay_style(mut self, overlay: OverlayStyle) -> Self {
        self.overlay = overlay;
        self
    }

    #[must_use]
    pub fn with_zoom_limits(mut self, min_level: f64, max_level: f64) -> Self {
        self.zoom = ZoomConfig {
            min_level,
            max_level,
        };
        self
    }

    #[must_use]
    pub fn with_label_config(mut self, labels: DateLabelConfig) -> Self {
        self.labels = labels;
        self
    }

    pub fn validate(self) -> RangeResult<Self> {
        validate_engine_config(self)
    }

    pub fn to_json_pretty(&self) -> RangeResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            RangeError::Serialization(format!("failed to serialize engine config: {e}"))
        })
    }

    /// Parses and validates a config. Missing sections fall back to defaults.
    pub fn from_json_str(input: &str) -> RangeResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            RangeError::Serialization(format!("failed to parse engine config: {e}"))
        })?;
        config.validate()
    }
}
