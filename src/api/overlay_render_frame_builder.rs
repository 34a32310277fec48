use crate::core::ChartPixelBounds;
use crate::interaction::BoundaryRole;
use crate::overlay::{OverlayStyle, SelectionOverlay};
use crate::render::{LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::BoundaryLabels;

/// Gap between the plot top and the baseline of the boundary labels.
const LABEL_BASELINE_GAP_PX: f64 = 4.0;

/// Converts overlay geometry and boundary labels into draw primitives.
///
/// Order: band, guides, handles, labels.
pub(super) fn build_overlay_render_frame(
    overlay: &SelectionOverlay,
    labels: &BoundaryLabels,
    bounds: ChartPixelBounds,
    style: &OverlayStyle,
) -> RenderFrame {
    let mut frame = RenderFrame::new(bounds);

    if let Some(band) = overlay.band {
        frame = frame.with_rect(RectPrimitive::new(
            band.x,
            band.y,
            band.width,
            band.height,
            style.band_color,
        ));
    }

    for guide in &overlay.guides {
        frame = frame.with_line(LinePrimitive::vertical(
            guide.x,
            guide.top,
            guide.bottom,
            style.guide_line_width_px,
            style.guide_line_color,
        ));
    }

    for handle in &overlay.handles {
        let fill = if handle.active {
            style.active_handle_color
        } else {
            style.handle_color
        };
        frame = frame.with_rect(
            RectPrimitive::new(handle.left(), handle.top(), handle.width, handle.height, fill)
                .with_corner_radius(style.handle_corner_radius_px.min(handle.width / 2.0)),
        );

        let text = match handle.role {
            BoundaryRole::Start => labels.start.as_deref(),
            BoundaryRole::End => labels.end.as_deref(),
        };
        if let Some(text) = text.filter(|text| !text.is_empty()) {
            frame = frame.with_text(TextPrimitive::new(
                text,
                handle.center_x,
                bounds.top - LABEL_BASELINE_GAP_PX,
                style.label_font_size_px,
                style.label_color,
                TextHAlign::Center,
            ));
        }
    }

    frame
}
