use crate::error::{RangeError, RangeResult};
use crate::render::Renderer;

use super::{RangeSelectorEngine, SelectionSnapshot};

impl<R: Renderer> RangeSelectorEngine<R> {
    /// Captures the full selection state at this instant.
    #[must_use]
    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            layout: self.layout,
            readings_len: self.readings.len(),
            mode: self.selector.mode(),
            start: self.selector.start(),
            end: self.selector.end(),
            last_committed: self.last_committed,
            zoom_level: self.zoom.level(),
            labels: self.boundary_labels(),
            summary: self.selection_summary(),
            overlay: self.overlay(),
            series_metadata: self.series_metadata.clone(),
        }
    }

    pub fn snapshot_json_pretty(&self) -> RangeResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| RangeError::Serialization(format!("failed to serialize snapshot: {e}")))
    }
}
