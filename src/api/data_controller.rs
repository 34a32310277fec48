use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use crate::core::{ChartPixelBounds, Reading, SortedReadings};
use crate::extensions::SelectionEvent;
use crate::interaction::{GestureContext, RangeSelection};
use crate::render::Renderer;

use super::RangeSelectorEngine;

/// What changed before a selection sync.
#[derive(Debug, Clone, Copy)]
enum SelectionSync {
    /// New data domain: pixel offsets are re-derived from boundary dates.
    Readings,
    /// New plot bounds: pixel offsets follow the plot width.
    Layout { previous: Option<ChartPixelBounds> },
    /// Only a pending initial range may be applied.
    PendingRange,
}

impl<R: Renderer> RangeSelectorEngine<R> {
    /// Replaces the reading sequence.
    ///
    /// Input order is free; readings are sorted once here. Boundary dates are
    /// kept and re-projected onto the new data domain, unless a gesture is in
    /// progress.
    pub fn set_readings(&mut self, readings: Vec<Reading>) {
        let original_count = readings.len();
        self.readings = SortedReadings::from_unsorted(readings);
        let dropped = original_count - self.readings.len();
        debug!(
            original_count,
            canonical_count = self.readings.len(),
            "set readings"
        );
        if dropped > 0 {
            warn!(dropped, "dropped readings with non-finite values");
        }
        self.sync_selection(SelectionSync::Readings);
        self.emit_event(SelectionEvent::ReadingsUpdated {
            readings_len: self.readings.len(),
        });
    }

    #[must_use]
    pub fn readings(&self) -> &SortedReadings {
        &self.readings
    }

    /// Sets the range shown before any gesture.
    ///
    /// Applied immediately when layout and readings allow it, otherwise on
    /// the next usable `publish_layout`/`set_readings`. A range set while a
    /// gesture is in progress is dropped when that gesture commits.
    pub fn set_initial_range(&mut self, start: DateTime<Utc>, end: DateTime<Utc>) {
        self.pending_range = Some(RangeSelection::ordered(start, end));
        self.sync_selection(SelectionSync::PendingRange);
    }

    /// Stores the plot bounds produced by the latest layout pass.
    ///
    /// Republishing identical bounds leaves the selection untouched. A new
    /// plot width scales boundary offsets, including during a gesture.
    pub fn publish_layout(&mut self, bounds: ChartPixelBounds) {
        if bounds.is_degenerate() {
            warn!(
                left = bounds.left,
                right = bounds.right,
                "published degenerate chart layout; selection updates are paused"
            );
        } else {
            debug!(
                left = bounds.left,
                right = bounds.right,
                top = bounds.top,
                bottom = bounds.bottom,
                "published chart layout"
            );
        }
        let previous = self.layout.replace(bounds);
        self.sync_selection(SelectionSync::Layout { previous });
        self.emit_event(SelectionEvent::LayoutPublished { bounds });
    }

    #[must_use]
    pub fn layout(&self) -> Option<ChartPixelBounds> {
        self.layout
    }

    /// Drops the selection, any pending initial range and the last commit.
    pub fn clear_selection(&mut self) {
        self.selector.clear();
        self.pending_range = None;
        self.last_committed = None;
        self.emit_event(SelectionEvent::BoundariesChanged);
    }

    /// Sets one free-form descriptive entry (sensor name, unit, ...).
    ///
    /// Entries keep insertion order so snapshots stay stable.
    pub fn set_series_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.series_metadata.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn series_metadata(&self) -> &IndexMap<String, String> {
        &self.series_metadata
    }

    /// Brings boundary offsets in line with the current layout and data.
    ///
    /// While a gesture is active, offsets written by it are only ever scaled
    /// to a new plot width; date-driven placement waits for the gesture end.
    fn sync_selection(&mut self, cause: SelectionSync) {
        let Some(bounds) = self.layout else {
            return;
        };
        let ctx = GestureContext::new(bounds, &self.readings);
        if !ctx.is_usable() {
            return;
        }
        let gesture_active = self.selector.mode().is_active();

        if let Some(pending) = self.pending_range.filter(|_| !gesture_active) {
            if self.selector.set_range(pending.start, pending.end, ctx) {
                debug!(start = %pending.start, end = %pending.end, "applied initial range");
                self.pending_range = None;
            }
            return;
        }

        match cause {
            SelectionSync::Readings if !gesture_active => {
                self.selector.reproject(ctx);
            }
            SelectionSync::Layout { previous } => {
                match previous.filter(|previous| !previous.is_degenerate()) {
                    Some(previous) if previous == bounds => {}
                    Some(previous) => {
                        self.selector.rescale(previous.width(), ctx);
                    }
                    // First usable layout: nothing to scale from.
                    None if !gesture_active => {
                        self.selector.reproject(ctx);
                    }
                    None => {}
                }
            }
            _ => trace!(?cause, gesture_active, "selection sync skipped"),
        }
    }
}
