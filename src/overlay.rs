//! Selection band and handle geometry, derived from selector state.
//!
//! Nothing here mutates the selector; the overlay is recomputed from scratch
//! whenever the host draws a frame.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::ChartPixelBounds;
use crate::error::{RangeError, RangeResult};
use crate::interaction::{BoundaryRole, DragMode, RangeSelector};
use crate::render::Color;

/// Fixed visual sizes and colors of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayStyle {
    pub handle_width_px: f64,
    pub handle_height_px: f64,
    /// Size multiplier applied to the handle being dragged.
    pub active_handle_scale: f64,
    pub handle_corner_radius_px: f64,
    pub band_color: Color,
    pub handle_color: Color,
    pub active_handle_color: Color,
    pub guide_line_color: Color,
    pub guide_line_width_px: f64,
    pub label_font_size_px: f64,
    pub label_color: Color,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            handle_width_px: 12.0,
            handle_height_px: 28.0,
            active_handle_scale: 1.4,
            handle_corner_radius_px: 6.0,
            band_color: Color::from_rgba8(0, 120, 255, 0.2),
            handle_color: Color::from_rgba8(0, 120, 255, 1.0),
            active_handle_color: Color::from_rgba8(255, 149, 0, 1.0),
            guide_line_color: Color::rgba(1.0, 0.0, 0.0, 1.0),
            guide_line_width_px: 2.0,
            label_font_size_px: 12.0,
            label_color: Color::rgba(0.0, 0.0, 0.0, 1.0),
        }
    }
}

impl OverlayStyle {
    pub fn validate(self) -> RangeResult<Self> {
        for (name, value) in [
            ("handle_width_px", self.handle_width_px),
            ("handle_height_px", self.handle_height_px),
            ("guide_line_width_px", self.guide_line_width_px),
            ("label_font_size_px", self.label_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(RangeError::InvalidConfig(format!(
                    "overlay {name} must be finite and > 0"
                )));
            }
        }
        if !self.active_handle_scale.is_finite() || self.active_handle_scale < 1.0 {
            return Err(RangeError::InvalidConfig(
                "overlay active_handle_scale must be finite and >= 1".to_owned(),
            ));
        }
        if !self.handle_corner_radius_px.is_finite() || self.handle_corner_radius_px < 0.0 {
            return Err(RangeError::InvalidConfig(
                "overlay handle_corner_radius_px must be finite and >= 0".to_owned(),
            ));
        }
        for color in [
            self.band_color,
            self.handle_color,
            self.active_handle_color,
            self.guide_line_color,
            self.label_color,
        ] {
            color
                .validate()
                .map_err(|e| RangeError::InvalidConfig(format!("overlay color: {e}")))?;
        }
        Ok(self)
    }
}

/// Highlighted band between the two boundaries, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Draggable handle centered on one boundary, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandleGeometry {
    pub role: BoundaryRole,
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
    /// Set while this handle is the one being dragged.
    pub active: bool,
}

impl HandleGeometry {
    #[must_use]
    pub fn left(self) -> f64 {
        self.center_x - self.width / 2.0
    }

    #[must_use]
    pub fn top(self) -> f64 {
        self.center_y - self.height / 2.0
    }
}

/// Vertical guide through one boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuideGeometry {
    pub role: BoundaryRole,
    pub x: f64,
    pub top: f64,
    pub bottom: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionOverlay {
    pub band: Option<BandGeometry>,
    pub handles: SmallVec<[HandleGeometry; 2]>,
    pub guides: SmallVec<[GuideGeometry; 2]>,
}

impl SelectionOverlay {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.band.is_none() && self.handles.is_empty()
    }

    #[must_use]
    pub fn handle(&self, role: BoundaryRole) -> Option<HandleGeometry> {
        self.handles.iter().copied().find(|handle| handle.role == role)
    }
}

fn is_role_active(selector: &RangeSelector, role: BoundaryRole) -> bool {
    match selector.mode() {
        DragMode::None => false,
        DragMode::CreatingNew => role == BoundaryRole::End,
        DragMode::MovingSelection { .. } => true,
        DragMode::DraggingLeftBoundary => selector
            .ordered()
            .is_some_and(|ordered| ordered.left_role() == role),
        DragMode::DraggingRightBoundary => selector
            .ordered()
            .is_some_and(|ordered| ordered.right_role() == role),
    }
}

/// Derives the overlay for the current selector state and plot bounds.
///
/// Degenerate bounds produce an empty overlay.
#[must_use]
pub fn derive_overlay(
    selector: &RangeSelector,
    bounds: ChartPixelBounds,
    style: &OverlayStyle,
) -> SelectionOverlay {
    let mut overlay = SelectionOverlay::default();
    if bounds.is_degenerate() {
        return overlay;
    }

    if let (Some(start_px), Some(end_px)) = (
        selector.start().pixel_offset,
        selector.end().pixel_offset,
    ) {
        overlay.band = Some(BandGeometry {
            x: start_px.min(end_px) + bounds.left,
            y: bounds.top,
            width: (end_px - start_px).abs(),
            height: bounds.height(),
        });
    }

    let center_y = bounds.top + bounds.height() / 2.0;
    for role in [BoundaryRole::Start, BoundaryRole::End] {
        let Some(offset) = selector.boundary(role).pixel_offset else {
            continue;
        };
        let active = is_role_active(selector, role);
        let scale = if active {
            style.active_handle_scale
        } else {
            1.0
        };
        let x = offset + bounds.left;
        overlay.handles.push(HandleGeometry {
            role,
            center_x: x,
            center_y,
            width: style.handle_width_px * scale,
            height: style.handle_height_px * scale,
            active,
        });
        overlay.guides.push(GuideGeometry {
            role,
            x,
            top: bounds.top,
            bottom: bounds.bottom,
        });
    }

    overlay
}
