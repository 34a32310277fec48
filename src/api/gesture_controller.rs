use tracing::{debug, trace};

use crate::extensions::SelectionEvent;
use crate::interaction::{DragMode, GestureContext, RangeSelection};
use crate::render::Renderer;

use super::RangeSelectorEngine;

impl<R: Renderer> RangeSelectorEngine<R> {
    /// Pan gesture began at absolute screen x `pointer_x`.
    ///
    /// Returns the mode the gesture entered; `DragMode::None` when no usable
    /// layout or fewer than two readings are available.
    pub fn pan_begin(&mut self, pointer_x: f64) -> DragMode {
        let Some(bounds) = self.layout else {
            trace!(pointer_x, "ignoring pan begin before first layout");
            return DragMode::None;
        };
        let ctx = GestureContext::new(bounds, &self.readings);
        if !ctx.is_usable() {
            trace!(
                pointer_x,
                readings = self.readings.len(),
                "ignoring pan begin on degenerate layout or data"
            );
            return DragMode::None;
        }

        let mode = self.selector.on_gesture_begin(pointer_x, ctx);
        if mode.is_active() {
            self.emit_event(SelectionEvent::GestureStarted { mode });
            if mode == DragMode::CreatingNew {
                self.emit_event(SelectionEvent::BoundariesChanged);
            }
        }
        mode
    }

    /// Pan gesture moved. Returns `true` when a boundary moved.
    pub fn pan_update(&mut self, pointer_x: f64) -> bool {
        let Some(bounds) = self.layout else {
            return false;
        };
        let changed = self
            .selector
            .on_gesture_update(pointer_x, GestureContext::new(bounds, &self.readings));
        if changed {
            self.emit_event(SelectionEvent::BoundariesChanged);
        }
        changed
    }

    /// Pan gesture ended. Returns the committed range, ordered `start <= end`.
    ///
    /// The committed range replaces any initial range set during the gesture.
    pub fn pan_end(&mut self) -> Option<RangeSelection> {
        let selection = self.selector.on_gesture_end()?;
        if let Some(pending) = self.pending_range.take() {
            debug!(
                start = %pending.start,
                end = %pending.end,
                "initial range superseded by gesture"
            );
        }
        debug!(start = %selection.start, end = %selection.end, "selection committed");
        self.last_committed = Some(selection);
        self.emit_event(SelectionEvent::RangeCommitted { selection });
        Some(selection)
    }

    pub fn pinch_begin(&mut self) {
        self.zoom.on_pinch_begin();
    }

    /// Applies a cumulative pinch scale factor relative to the level at
    /// `pinch_begin`. Returns `true` when the zoom level changed.
    pub fn pinch_update(&mut self, scale_factor: f64) -> bool {
        let changed = self.zoom.on_pinch_update(scale_factor);
        if changed {
            let level = self.zoom.level();
            trace!(scale_factor, level, "pinch zoom update");
            self.emit_event(SelectionEvent::ZoomChanged { level });
        }
        changed
    }

    pub fn pinch_end(&mut self) {
        self.zoom.on_pinch_end();
    }

    pub fn reset_zoom(&mut self) {
        self.zoom.reset();
        self.emit_event(SelectionEvent::ZoomChanged {
            level: self.zoom.level(),
        });
    }
}
