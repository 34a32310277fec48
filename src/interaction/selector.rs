use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{ChartPixelBounds, SortedReadings, date_index_to_pixel, pixel_to_date};

use super::{
    BoundaryRole, DragMode, OrderedBoundaries, RangeSelection, SelectionBoundary,
    resolve_ordered_boundaries,
};

/// Hit-test and crossover tuning for the drag state machine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectorTuning {
    /// Inclusive radius around each boundary that grabs its handle.
    pub handle_tolerance_px: f64,
    /// Smallest distance a dragged handle keeps from the opposite one.
    pub min_boundary_gap_px: f64,
}

impl Default for SelectorTuning {
    fn default() -> Self {
        Self {
            handle_tolerance_px: 20.0,
            min_boundary_gap_px: 1.0,
        }
    }
}

/// Latest layout and data, read by every gesture callback.
#[derive(Debug, Clone, Copy)]
pub struct GestureContext<'a> {
    pub bounds: ChartPixelBounds,
    pub readings: &'a SortedReadings,
}

impl<'a> GestureContext<'a> {
    #[must_use]
    pub fn new(bounds: ChartPixelBounds, readings: &'a SortedReadings) -> Self {
        Self { bounds, readings }
    }

    /// `false` when positions cannot be mapped: collapsed bounds or fewer
    /// than two readings.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        !self.bounds.is_degenerate() && self.readings.len() >= 2
    }

    fn local_x(&self, pointer_x: f64) -> Option<f64> {
        if !self.is_usable() {
            return None;
        }
        self.bounds.local_x(pointer_x)
    }

    fn date_at(&self, local_x: f64) -> Option<DateTime<Utc>> {
        pixel_to_date(local_x, self.bounds.width(), self.readings)
    }

    /// Boundary for `date`. Dates outside the data domain are pinned to the
    /// plot edge and take the date of the reading found there.
    fn boundary_at_date(&self, date: DateTime<Utc>) -> Option<SelectionBoundary> {
        let width = self.bounds.width();
        let raw = date_index_to_pixel(date, self.bounds, self.readings)? - self.bounds.left;
        if (0.0..=width).contains(&raw) {
            return Some(SelectionBoundary::at(raw, Some(date)));
        }
        let local_x = raw.clamp(0.0, width);
        Some(SelectionBoundary::at(local_x, self.date_at(local_x)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum HitTarget {
    LeftHandle,
    RightHandle,
    Body,
    Outside,
}

fn hit_test(local_x: f64, ordered: Option<OrderedBoundaries>, tolerance: f64) -> HitTarget {
    let Some(ordered) = ordered else {
        return HitTarget::Outside;
    };
    if (local_x - ordered.left_px).abs() <= tolerance {
        return HitTarget::LeftHandle;
    }
    if (local_x - ordered.right_px).abs() <= tolerance {
        return HitTarget::RightHandle;
    }
    if local_x > ordered.left_px + tolerance && local_x < ordered.right_px - tolerance {
        return HitTarget::Body;
    }
    HitTarget::Outside
}

/// Drag state machine owning both selection boundaries.
///
/// Every callback takes the current [`GestureContext`]; nothing about the
/// layout is cached between calls. Unusable contexts turn callbacks into
/// no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RangeSelector {
    tuning: SelectorTuning,
    mode: DragMode,
    start: SelectionBoundary,
    end: SelectionBoundary,
}

impl RangeSelector {
    #[must_use]
    pub fn new(tuning: SelectorTuning) -> Self {
        Self {
            tuning,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn tuning(&self) -> SelectorTuning {
        self.tuning
    }

    pub fn set_tuning(&mut self, tuning: SelectorTuning) {
        self.tuning = tuning;
    }

    #[must_use]
    pub fn mode(&self) -> DragMode {
        self.mode
    }

    #[must_use]
    pub fn start(&self) -> SelectionBoundary {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> SelectionBoundary {
        self.end
    }

    #[must_use]
    pub fn ordered(&self) -> Option<OrderedBoundaries> {
        resolve_ordered_boundaries(self.start, self.end)
    }

    /// Committed-looking range for the current boundaries, `None` until both
    /// carry a date.
    #[must_use]
    pub fn selection(&self) -> Option<RangeSelection> {
        Some(RangeSelection::ordered(self.start.date?, self.end.date?))
    }

    #[must_use]
    pub fn boundary(&self, role: BoundaryRole) -> SelectionBoundary {
        match role {
            BoundaryRole::Start => self.start,
            BoundaryRole::End => self.end,
        }
    }

    /// Drops the selection and any gesture in progress.
    pub fn clear(&mut self) {
        self.mode = DragMode::None;
        self.start = SelectionBoundary::default();
        self.end = SelectionBoundary::default();
    }

    /// Places both boundaries at dates, e.g. the screen's initial range.
    ///
    /// Dates inside the data domain are kept as given. Dates outside it are
    /// pinned to the nearest plot edge together with the date found there.
    /// Returns `false` (and changes nothing) when the context cannot map
    /// dates.
    pub fn set_range(
        &mut self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        ctx: GestureContext<'_>,
    ) -> bool {
        if !ctx.is_usable() {
            return false;
        }
        let (Some(start), Some(end)) = (ctx.boundary_at_date(start), ctx.boundary_at_date(end))
        else {
            return false;
        };
        self.start = start;
        self.end = end;
        true
    }

    /// Re-derives pixel offsets from boundary dates, for a new data domain.
    pub fn reproject(&mut self, ctx: GestureContext<'_>) -> bool {
        match (self.start.date, self.end.date) {
            (Some(start), Some(end)) => self.set_range(start, end, ctx),
            _ => false,
        }
    }

    /// Scales pixel offsets from a plot `previous_width` wide to the current
    /// one. Dates are kept; an in-progress move keeps its grab point.
    ///
    /// Returns `false` when nothing was scaled.
    pub fn rescale(&mut self, previous_width: f64, ctx: GestureContext<'_>) -> bool {
        if !ctx.is_usable() || !previous_width.is_finite() || previous_width <= 0.0 {
            return false;
        }
        let width = ctx.bounds.width();
        let factor = width / previous_width;
        if (factor - 1.0).abs() <= f64::EPSILON {
            return false;
        }
        for boundary in [&mut self.start, &mut self.end] {
            if let Some(offset) = boundary.pixel_offset {
                boundary.pixel_offset = Some((offset * factor).clamp(0.0, width));
            }
        }
        if let DragMode::MovingSelection { grab_offset_px } = self.mode {
            self.mode = DragMode::MovingSelection {
                grab_offset_px: grab_offset_px * factor,
            };
        }
        trace!(previous_width, width, "rescaled selection to new plot width");
        true
    }

    /// Classifies a pointer-down and enters the matching mode.
    ///
    /// Handles win over the band; the left handle wins over the right one.
    /// Anything else starts a new zero-width selection under the pointer.
    pub fn on_gesture_begin(&mut self, pointer_x: f64, ctx: GestureContext<'_>) -> DragMode {
        let Some(local_x) = ctx.local_x(pointer_x) else {
            return self.mode;
        };

        let ordered = self.ordered();
        self.mode = match hit_test(local_x, ordered, self.tuning.handle_tolerance_px) {
            HitTarget::LeftHandle => DragMode::DraggingLeftBoundary,
            HitTarget::RightHandle => DragMode::DraggingRightBoundary,
            HitTarget::Body => match ordered {
                Some(ordered) => DragMode::MovingSelection {
                    grab_offset_px: local_x - ordered.left_px,
                },
                None => DragMode::CreatingNew,
            },
            HitTarget::Outside => DragMode::CreatingNew,
        };

        if self.mode == DragMode::CreatingNew {
            self.write(BoundaryRole::Start, local_x, &ctx);
            self.write(BoundaryRole::End, local_x, &ctx);
        }
        trace!(local_x, mode = ?self.mode, "selection gesture begin");
        self.mode
    }

    /// Applies one pointer move. Returns `true` when a boundary moved.
    pub fn on_gesture_update(&mut self, pointer_x: f64, ctx: GestureContext<'_>) -> bool {
        if !self.mode.is_active() {
            return false;
        }
        let Some(local_x) = ctx.local_x(pointer_x) else {
            return false;
        };

        let changed = match self.mode {
            DragMode::None => false,
            DragMode::CreatingNew => self.write(BoundaryRole::End, local_x, &ctx),
            DragMode::DraggingLeftBoundary => self.drag_left(local_x, &ctx),
            DragMode::DraggingRightBoundary => self.drag_right(local_x, &ctx),
            DragMode::MovingSelection { grab_offset_px } => {
                self.move_selection(local_x - grab_offset_px, &ctx)
            }
        };
        trace!(local_x, mode = ?self.mode, changed, "selection gesture update");
        changed
    }

    /// Leaves the current mode and reports the resulting range.
    ///
    /// Returns `None` when no gesture was active or no dated selection exists.
    pub fn on_gesture_end(&mut self) -> Option<RangeSelection> {
        let was_active = self.mode.is_active();
        self.mode = DragMode::None;
        if !was_active {
            return None;
        }
        self.selection()
    }

    fn drag_left(&mut self, local_x: f64, ctx: &GestureContext<'_>) -> bool {
        let Some(ordered) = self.ordered() else {
            return false;
        };
        let target = if local_x < ordered.right_px {
            local_x
        } else {
            ordered.right_px - self.tuning.min_boundary_gap_px
        };
        if target < 0.0 {
            return false;
        }
        self.write(ordered.left_role(), target, ctx)
    }

    fn drag_right(&mut self, local_x: f64, ctx: &GestureContext<'_>) -> bool {
        let Some(ordered) = self.ordered() else {
            return false;
        };
        let target = if local_x > ordered.left_px {
            local_x
        } else {
            ordered.left_px + self.tuning.min_boundary_gap_px
        };
        if target > ctx.bounds.width() {
            return false;
        }
        self.write(ordered.right_role(), target, ctx)
    }

    // Right edge is clamped before the left one, so a band wider than the
    // plot ends up anchored at 0.
    fn move_selection(&mut self, requested_left: f64, ctx: &GestureContext<'_>) -> bool {
        let Some(ordered) = self.ordered() else {
            return false;
        };
        let chart_width = ctx.bounds.width();
        let width = ordered.width();

        let mut new_left = requested_left;
        if new_left + width > chart_width {
            new_left = chart_width - width;
        }
        if new_left < 0.0 {
            new_left = 0.0;
        }
        let new_right = new_left + width;

        let moved_left = self.write(ordered.left_role(), new_left, ctx);
        let moved_right = self.write(ordered.right_role(), new_right, ctx);
        moved_left || moved_right
    }

    fn write(&mut self, role: BoundaryRole, local_x: f64, ctx: &GestureContext<'_>) -> bool {
        let next = SelectionBoundary::at(local_x, ctx.date_at(local_x));
        let slot = match role {
            BoundaryRole::Start => &mut self.start,
            BoundaryRole::End => &mut self.end,
        };
        let changed = *slot != next;
        *slot = next;
        changed
    }
}
