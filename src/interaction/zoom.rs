use serde::{Deserialize, Serialize};

use crate::error::{RangeError, RangeResult};

/// Allowed pinch zoom levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomConfig {
    pub min_level: f64,
    pub max_level: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_level: 1.0,
            max_level: 10.0,
        }
    }
}

impl ZoomConfig {
    pub fn validate(self) -> RangeResult<Self> {
        if !self.min_level.is_finite() || self.min_level <= 0.0 {
            return Err(RangeError::InvalidConfig(
                "zoom min_level must be finite and > 0".to_owned(),
            ));
        }
        if !self.max_level.is_finite() || self.max_level < self.min_level {
            return Err(RangeError::InvalidConfig(
                "zoom max_level must be finite and >= min_level".to_owned(),
            ));
        }
        Ok(self)
    }

    #[must_use]
    pub fn clamp(self, level: f64) -> f64 {
        level.clamp(self.min_level, self.max_level)
    }
}

/// Pinch zoom level.
///
/// Owned separately from the selection boundaries: pinch callbacks only ever
/// write here, so a pinch recognized together with a pan cannot disturb the
/// selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomState {
    config: ZoomConfig,
    level: f64,
    /// Level captured at pinch begin; scale factors are relative to it.
    pinch_base: Option<f64>,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::new(ZoomConfig::default())
    }
}

impl ZoomState {
    #[must_use]
    pub fn new(config: ZoomConfig) -> Self {
        Self {
            config,
            level: config.min_level,
            pinch_base: None,
        }
    }

    #[must_use]
    pub fn level(&self) -> f64 {
        self.level
    }

    #[must_use]
    pub fn config(&self) -> ZoomConfig {
        self.config
    }

    pub fn set_config(&mut self, config: ZoomConfig) {
        self.config = config;
        self.level = config.clamp(self.level);
    }

    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch_base.is_some()
    }

    pub fn on_pinch_begin(&mut self) {
        self.pinch_base = Some(self.level);
    }

    /// Applies a cumulative pinch scale factor. Returns `true` when the level
    /// changed. Non-finite or non-positive factors are ignored.
    pub fn on_pinch_update(&mut self, scale_factor: f64) -> bool {
        if !scale_factor.is_finite() || scale_factor <= 0.0 {
            return false;
        }
        let base = *self.pinch_base.get_or_insert(self.level);
        let next = self.config.clamp(base * scale_factor);
        let changed = (next - self.level).abs() > f64::EPSILON;
        self.level = next;
        changed
    }

    pub fn on_pinch_end(&mut self) {
        self.pinch_base = None;
    }

    pub fn reset(&mut self) {
        self.level = self.config.min_level;
        self.pinch_base = None;
    }
}
