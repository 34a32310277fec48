use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::ChartPixelBounds;
use crate::interaction::{DragMode, RangeSelection, SelectionBoundary};
use crate::overlay::SelectionOverlay;

use super::{BoundaryLabels, SelectionSummary};

/// Serializable selection state used by regression tests and trace tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionSnapshot {
    pub layout: Option<ChartPixelBounds>,
    pub readings_len: usize,
    pub mode: DragMode,
    pub start: SelectionBoundary,
    pub end: SelectionBoundary,
    pub last_committed: Option<RangeSelection>,
    pub zoom_level: f64,
    pub labels: BoundaryLabels,
    pub summary: Option<SelectionSummary>,
    pub overlay: SelectionOverlay,
    pub series_metadata: IndexMap<String, String>,
}
