use serde::{Deserialize, Serialize};

use crate::error::{RangeError, RangeResult};

/// Plotted sub-region of the screen, in pixels.
///
/// Published by the rendering surface after each layout pass. `[left, right]`
/// spans the full data domain; axis labels and margins are outside it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPixelBounds {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl ChartPixelBounds {
    /// Builds bounds from the four plot edges.
    ///
    /// Only non-finite edges are rejected. Collapsed or inverted bounds are
    /// accepted and reported by [`Self::is_degenerate`], since a rendering
    /// surface can legitimately publish them mid-layout.
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> RangeResult<Self> {
        let bounds = Self {
            left,
            right,
            top,
            bottom,
        };
        if !left.is_finite() || !right.is_finite() || !top.is_finite() || !bottom.is_finite() {
            return Err(RangeError::InvalidLayout {
                left,
                right,
                top,
                bottom,
            });
        }
        Ok(bounds)
    }

    /// Bounds of a `width x height` plot whose top-left corner is the origin.
    #[must_use]
    pub fn from_size(width: f64, height: f64) -> Self {
        Self {
            left: 0.0,
            right: width,
            top: 0.0,
            bottom: height,
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    /// `true` when no horizontal position can be mapped to data.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        let width = self.width();
        !width.is_finite() || width <= 0.0
    }

    /// Converts an absolute pointer x into an offset inside `[0, width]`.
    ///
    /// Returns `None` for degenerate bounds or a NaN pointer.
    #[must_use]
    pub fn local_x(self, pointer_x: f64) -> Option<f64> {
        if self.is_degenerate() || pointer_x.is_nan() {
            return None;
        }
        Some((pointer_x - self.left).clamp(0.0, self.width()))
    }
}
