mod selector;
mod zoom;

pub use selector::{GestureContext, RangeSelector, SelectorTuning};
pub use zoom::{ZoomConfig, ZoomState};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Effect of the pointer gesture currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum DragMode {
    #[default]
    None,
    /// Pointer went down away from any handle: a fresh selection is drawn.
    CreatingNew,
    DraggingLeftBoundary,
    DraggingRightBoundary,
    /// Pointer went down inside the band; `grab_offset_px` is its distance
    /// from the band's left edge at gesture begin.
    MovingSelection { grab_offset_px: f64 },
}

impl DragMode {
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Logical identity of a boundary, independent of its screen side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoundaryRole {
    Start,
    End,
}

/// One edge of the selected range. Both fields are `None` before the first
/// selection gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectionBoundary {
    /// Offset from the plot's left edge, clamped to `[0, width]`.
    pub pixel_offset: Option<f64>,
    pub date: Option<DateTime<Utc>>,
}

impl SelectionBoundary {
    #[must_use]
    pub fn at(pixel_offset: f64, date: Option<DateTime<Utc>>) -> Self {
        Self {
            pixel_offset: Some(pixel_offset),
            date,
        }
    }

    #[must_use]
    pub fn is_set(self) -> bool {
        self.pixel_offset.is_some()
    }
}

/// Start/end resolved into screen order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderedBoundaries {
    pub left_px: f64,
    pub right_px: f64,
    /// Whether the start boundary is the one on the left.
    pub is_start_on_left: bool,
}

impl OrderedBoundaries {
    #[must_use]
    pub fn width(self) -> f64 {
        self.right_px - self.left_px
    }

    #[must_use]
    pub fn left_role(self) -> BoundaryRole {
        if self.is_start_on_left {
            BoundaryRole::Start
        } else {
            BoundaryRole::End
        }
    }

    #[must_use]
    pub fn right_role(self) -> BoundaryRole {
        if self.is_start_on_left {
            BoundaryRole::End
        } else {
            BoundaryRole::Start
        }
    }
}

/// Orders two boundaries by pixel offset. `None` until both are set.
///
/// Equal offsets report the start boundary on the left.
#[must_use]
pub fn resolve_ordered_boundaries(
    start: SelectionBoundary,
    end: SelectionBoundary,
) -> Option<OrderedBoundaries> {
    let start_px = start.pixel_offset?;
    let end_px = end.pixel_offset?;
    let is_start_on_left = start_px <= end_px;
    Some(OrderedBoundaries {
        left_px: start_px.min(end_px),
        right_px: start_px.max(end_px),
        is_start_on_left,
    })
}

/// Date range emitted when a selection gesture ends. Always `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSelection {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl RangeSelection {
    #[must_use]
    pub fn ordered(a: DateTime<Utc>, b: DateTime<Utc>) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    #[must_use]
    pub fn duration(self) -> Duration {
        self.end - self.start
    }

    #[must_use]
    pub fn contains(self, time: DateTime<Utc>) -> bool {
        self.start <= time && time <= self.end
    }
}
